use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use crate::dom::discovery::js_fault;
use crate::dom::events::listen;
use crate::interactions::error::InteractionError;
use crate::interactions::teardown::Teardown;

const PORTFOLIO_COMPONENT: &str = "Portfolio";
const RESIZE_COMPONENT: &str = "Resize";

/// Logs the title of any portfolio card that gets clicked.
pub fn mount_portfolio_clicks(
    document: &Document,
    teardown: &mut Teardown,
) -> Result<(), InteractionError> {
    teardown.add(listen(document, "click", PORTFOLIO_COMPONENT, |event| {
        let Some(target) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
        else {
            return Ok(());
        };
        let Some(card) = target
            .closest(".portfolio-card")
            .map_err(js_fault(PORTFOLIO_COMPONENT))?
        else {
            return Ok(());
        };
        if let Some(title) = card
            .query_selector(".portfolio-overlay h4")
            .map_err(js_fault(PORTFOLIO_COMPONENT))?
        {
            info!(
                "Portfolio item clicked: {}",
                title.text_content().unwrap_or_default()
            );
        }
        Ok(())
    })?);
    Ok(())
}

pub fn mount_resize_log(window: &Window, teardown: &mut Teardown) -> Result<(), InteractionError> {
    let resized = window.clone();
    teardown.add(listen(window, "resize", RESIZE_COMPONENT, move |_| {
        let width = resized
            .inner_width()
            .map_err(js_fault(RESIZE_COMPONENT))?
            .as_f64()
            .unwrap_or_default();
        let height = resized
            .inner_height()
            .map_err(js_fault(RESIZE_COMPONENT))?
            .as_f64()
            .unwrap_or_default();
        debug!("Window resized to: {} x {}", width, height);
        Ok(())
    })?);
    Ok(())
}
