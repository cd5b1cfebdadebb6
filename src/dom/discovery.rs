use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

use crate::interactions::error::InteractionError;

pub fn js_fault(component: &'static str) -> impl Fn(JsValue) -> InteractionError {
    move |value| InteractionError::fault(component, format!("{:?}", value))
}

/// Every element matching `selector`, in document order.
pub fn query_all(
    root: &Document,
    selector: &str,
    component: &'static str,
) -> Result<Vec<Element>, InteractionError> {
    let nodes = root
        .query_selector_all(selector)
        .map_err(js_fault(component))?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn query_within(
    root: &Element,
    selector: &str,
    component: &'static str,
) -> Result<Vec<Element>, InteractionError> {
    let nodes = root
        .query_selector_all(selector)
        .map_err(js_fault(component))?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn query_one(
    root: &Document,
    selector: &str,
    component: &'static str,
) -> Result<Option<Element>, InteractionError> {
    root.query_selector(selector).map_err(js_fault(component))
}

/// Like [`query_all`], but an empty result means the feature cannot run.
pub fn require_all(
    root: &Document,
    selector: &str,
    component: &'static str,
) -> Result<Vec<Element>, InteractionError> {
    let found = query_all(root, selector, component)?;
    if found.is_empty() {
        return Err(InteractionError::MissingElements { component });
    }
    Ok(found)
}

/// Target of a count-up counter from its `data-target` value. Missing or
/// unreadable values count to zero, with a warning.
pub fn count_target(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        warn!("Counter without data-target; counting to 0");
        return 0;
    };
    parse_count(raw).unwrap_or_else(|| {
        warn!("Counter data-target {:?} is not a number; counting to 0", raw);
        0
    })
}

/// Reads the leading digits of `raw` after optional whitespace and a `+`.
/// Values past `u32::MAX` saturate.
pub fn parse_count(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = unsigned
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse().unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_count_reads_leading_digits() {
        assert_eq!(parse_count("250"), Some(250));
        assert_eq!(parse_count(" 98 "), Some(98));
        assert_eq!(parse_count("15+"), Some(15));
        assert_eq!(parse_count("007"), Some(7));
    }

    #[test]
    fn parse_count_accepts_leading_plus() {
        assert_eq!(parse_count("+250"), Some(250));
        assert_eq!(parse_count(" +3k"), Some(3));
        assert_eq!(parse_count("++3"), None);
    }

    #[test]
    fn parse_count_saturates_large_targets() {
        assert_eq!(parse_count("5000000000"), Some(u32::MAX));
        assert_eq!(parse_count("4294967295"), Some(u32::MAX));
    }

    #[test]
    fn parse_count_rejects_non_numbers() {
        assert_eq!(parse_count("abc"), None);
        assert_eq!(parse_count("-4"), None);
        assert_eq!(parse_count(""), None);
        assert_eq!(parse_count("+"), None);
    }

    #[test]
    fn count_target_falls_back_to_zero() {
        assert_eq!(count_target(Some("350")), 350);
        assert_eq!(count_target(Some("n/a")), 0);
        assert_eq!(count_target(None), 0);
    }
}
