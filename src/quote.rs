//! Quote request form rules. The submission itself is simulated; nothing leaves the page.

pub const SENDING_LABEL: &str = "Sending...";
pub const THANK_YOU_MESSAGE: &str =
    "Thank you for your quote request! We will get back to you soon.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteField {
    pub name: String,
    pub value: String,
    pub required: bool,
}

impl QuoteField {
    pub fn new(name: impl Into<String>, value: impl Into<String>, required: bool) -> Self {
        QuoteField {
            name: name.into(),
            value: value.into(),
            required,
        }
    }

    pub fn is_missing(&self) -> bool {
        self.required && self.value.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    /// Indices of required fields left blank, in form order.
    pub invalid: Vec<usize>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.invalid.is_empty()
    }

    pub fn is_invalid(&self, index: usize) -> bool {
        self.invalid.contains(&index)
    }
}

pub fn validate(fields: &[QuoteField]) -> Validation {
    Validation {
        invalid: fields
            .iter()
            .enumerate()
            .filter(|(_, field)| field.is_missing())
            .map(|(index, _)| index)
            .collect(),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Sending,
}

/// Lets one simulated submission through at a time.
#[derive(Debug, Clone, Default)]
pub struct SubmissionGate {
    state: SubmitState,
    original_label: Option<String>,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Opens a submission and remembers the button label to restore later.
    pub fn begin(&mut self, button_label: impl Into<String>) -> bool {
        if self.state == SubmitState::Sending {
            return false;
        }
        self.state = SubmitState::Sending;
        self.original_label = Some(button_label.into());
        true
    }

    /// Closes the submission, handing back the saved label.
    pub fn finish(&mut self) -> Option<String> {
        if self.state != SubmitState::Sending {
            return None;
        }
        self.state = SubmitState::Idle;
        self.original_label.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactions::scheduler::Scheduler;
    use crate::interactions::virtual_clock::VirtualClock;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn form(values: &[(&str, &str, bool)]) -> Vec<QuoteField> {
        values
            .iter()
            .map(|(name, value, required)| QuoteField::new(*name, *value, *required))
            .collect()
    }

    #[test]
    fn flags_blank_required_fields_only() {
        let fields = form(&[
            ("name", "Ada", true),
            ("email", "   ", true),
            ("company", "", false),
            ("message", "\n\t", true),
        ]);
        let validation = validate(&fields);

        assert_eq!(validation.invalid, vec![1, 3]);
        assert!(!validation.is_valid());
        assert!(validation.is_invalid(3));
        assert!(!validation.is_invalid(2));
    }

    #[test]
    fn filled_form_is_valid() {
        let fields = form(&[("name", " Ada ", true), ("phone", "", false)]);
        assert!(validate(&fields).is_valid());
        assert!(validate(&[]).is_valid());
    }

    #[test]
    fn gate_blocks_double_submit_and_restores_label() {
        let mut gate = SubmissionGate::new();
        assert_eq!(gate.finish(), None);

        assert!(gate.begin("Request Quote"));
        assert!(!gate.begin(SENDING_LABEL));
        assert_eq!(gate.state(), SubmitState::Sending);

        assert_eq!(gate.finish(), Some("Request Quote".to_string()));
        assert_eq!(gate.state(), SubmitState::Idle);
        assert!(gate.begin("Request Quote"));
    }

    #[test]
    fn simulated_submission_completes_after_delay() {
        let clock = VirtualClock::new();
        let gate = Rc::new(RefCell::new(SubmissionGate::new()));
        let restored = Rc::new(RefCell::new(None));

        assert!(gate.borrow_mut().begin("Send"));
        let finish_gate = gate.clone();
        let sink = restored.clone();
        clock.after(
            1500,
            Box::new(move || {
                *sink.borrow_mut() = finish_gate.borrow_mut().finish();
            }),
        );

        clock.advance(1499);
        assert_eq!(gate.borrow().state(), SubmitState::Sending);
        assert!(!gate.borrow_mut().begin("Send"));

        clock.advance(1);
        assert_eq!(gate.borrow().state(), SubmitState::Idle);
        assert_eq!(*restored.borrow(), Some("Send".to_string()));
    }
}
