use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error, info};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement, Window,
};

use crate::config::InteractionConfig;
use crate::dom::discovery::{js_fault, query_all, query_one, query_within};
use crate::dom::events::listen;
use crate::dom::render::{set_class, INVALID_CLASS, SHOW_CLASS};
use crate::dom::timers::GlooScheduler;
use crate::interactions::error::{contain, InteractionError};
use crate::interactions::scheduler::Scheduler;
use crate::interactions::teardown::Teardown;
use crate::quote::{
    validate, QuoteField, SubmissionGate, SubmitState, SENDING_LABEL, THANK_YOU_MESSAGE,
};

const COMPONENT: &str = "Quote form";
const MODAL_ID: &str = "quoteModal";

pub fn modal_display(open: bool) -> &'static str {
    if open {
        "block"
    } else {
        "none"
    }
}

fn set_modal_open(modal: &Element, open: bool) {
    set_class(modal, SHOW_CLASS, open);
    if let Some(modal) = modal.dyn_ref::<HtmlElement>() {
        if let Err(e) = modal.style().set_property("display", modal_display(open)) {
            error!("Failed to set modal display: {:?}", e);
        }
    }
}

fn field_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

pub fn mount(
    window: &Window,
    document: &Document,
    scheduler: &GlooScheduler,
    config: &InteractionConfig,
    teardown: &mut Teardown,
) -> Result<(), InteractionError> {
    let form = query_one(document, "#quoteModal form", COMPONENT)?
        .ok_or(InteractionError::MissingElements {
            component: COMPONENT,
        })?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| InteractionError::fault(COMPONENT, "#quoteModal form is not a <form>"))?;
    let modal = document.get_element_by_id(MODAL_ID);

    mount_modal_buttons(document, modal.as_ref(), teardown)?;

    let gate = Rc::new(RefCell::new(SubmissionGate::new()));
    let delay_ms = config.submit_delay_ms;
    let scheduler = *scheduler;
    let submitted = form.clone();
    let window = window.clone();
    teardown.add(listen(&form, "submit", COMPONENT, move |event| {
        event.prevent_default();
        if gate.borrow().state() == SubmitState::Sending {
            return Ok(());
        }

        let required = query_within(&submitted, "[required]", COMPONENT)?;
        let fields: Vec<QuoteField> = required
            .iter()
            .map(|element| {
                let name = element.get_attribute("name").unwrap_or_default();
                QuoteField::new(name, field_value(element), true)
            })
            .collect();
        let validation = validate(&fields);
        for (index, element) in required.iter().enumerate() {
            set_class(element, INVALID_CLASS, validation.is_invalid(index));
        }
        if !validation.is_valid() {
            debug!("Quote form has {} blank required fields", validation.invalid.len());
            return Ok(());
        }

        let button = submitted
            .query_selector(r#"button[type="submit"]"#)
            .map_err(js_fault(COMPONENT))?
            .and_then(|button| button.dyn_into::<HtmlButtonElement>().ok())
            .ok_or_else(|| InteractionError::fault(COMPONENT, "submit button not found"))?;
        let label = button.text_content().unwrap_or_default();
        if !gate.borrow_mut().begin(label) {
            return Ok(());
        }
        button.set_text_content(Some(SENDING_LABEL));
        button.set_disabled(true);
        info!("Quote request accepted for {} fields", fields.len());

        let gate = gate.clone();
        let form = submitted.clone();
        let window = window.clone();
        let modal = modal.clone();
        scheduler.after(
            delay_ms,
            Box::new(move || {
                contain(COMPONENT, || {
                    let alerted = window.alert_with_message(THANK_YOU_MESSAGE);
                    form.reset();
                    if let Some(modal) = &modal {
                        set_modal_open(modal, false);
                    }
                    if let Some(label) = gate.borrow_mut().finish() {
                        button.set_text_content(Some(&label));
                    }
                    button.set_disabled(false);
                    alerted.map_err(js_fault(COMPONENT))
                });
            }),
        );
        Ok(())
    })?);

    for input in query_within(&form, "input, textarea", COMPONENT)? {
        let field = input.clone();
        teardown.add(listen(&input, "input", COMPONENT, move |_| {
            set_class(&field, INVALID_CLASS, false);
            Ok(())
        })?);
    }
    Ok(())
}

/// `data-open-modal="<id>"` buttons open a modal, `data-dismiss="modal"` closes it.
fn mount_modal_buttons(
    document: &Document,
    modal: Option<&Element>,
    teardown: &mut Teardown,
) -> Result<(), InteractionError> {
    for opener in query_all(document, "[data-open-modal]", COMPONENT)? {
        let document = document.clone();
        let target = opener.get_attribute("data-open-modal").unwrap_or_default();
        teardown.add(listen(&opener, "click", COMPONENT, move |event| {
            event.prevent_default();
            if let Some(modal) = document.get_element_by_id(&target) {
                set_modal_open(&modal, true);
            }
            Ok(())
        })?);
    }

    let Some(modal) = modal else {
        return Ok(());
    };
    for closer in query_within(modal, r#"[data-dismiss="modal"]"#, COMPONENT)? {
        let modal = modal.clone();
        teardown.add(listen(&closer, "click", COMPONENT, move |_| {
            set_modal_open(&modal, false);
            Ok(())
        })?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_display_matches_open_state() {
        assert_eq!(modal_display(true), "block");
        assert_eq!(modal_display(false), "none");
    }
}
