use log::{error, warn};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InteractionError {
    /// The elements a feature needs were not found on the page.
    #[error("{component} elements not found")]
    MissingElements { component: &'static str },
    #[error("{component} handler failed: {message}")]
    HandlerFault {
        component: &'static str,
        message: String,
    },
    #[error("initial member {initial} is out of range for group `{group}` of {len} members")]
    InitialOutOfRange {
        group: String,
        initial: usize,
        len: usize,
    },
    #[error("invalid interaction config: {0}")]
    InvalidConfig(String),
}

impl InteractionError {
    pub fn fault(component: &'static str, message: impl Into<String>) -> Self {
        InteractionError::HandlerFault {
            component,
            message: message.into(),
        }
    }
}

/// Runs one feature's setup or one event handler and keeps its failure local.
///
/// Missing elements are an expected degraded state and only warn; anything
/// else is logged as an error. Returns whether `f` succeeded.
pub fn contain<F>(component: &'static str, f: F) -> bool
where
    F: FnOnce() -> Result<(), InteractionError>,
{
    match f() {
        Ok(()) => true,
        Err(err @ InteractionError::MissingElements { .. }) => {
            warn!("{}", err);
            false
        }
        Err(err) => {
            error!("Error in {}: {}", component, err);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contain_reports_success() {
        assert!(contain("slider", || Ok(())));
    }

    #[test]
    fn contain_swallows_faults() {
        let ok = contain("tabs", || Err(InteractionError::fault("tabs", "boom")));
        assert!(!ok);

        let ok = contain("counters", || {
            Err(InteractionError::MissingElements { component: "counters" })
        });
        assert!(!ok);
    }

    #[test]
    fn missing_elements_message_names_component() {
        let err = InteractionError::MissingElements {
            component: "Hero slider",
        };
        assert_eq!(err.to_string(), "Hero slider elements not found");
    }
}
