use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config::InteractionConfig;
use crate::dom::discovery::{js_fault, query_all, query_one};
use crate::dom::events::listen;
use crate::dom::render::{set_class, SHOW_CLASS};
use crate::interactions::error::InteractionError;
use crate::interactions::teardown::Teardown;

const SCROLL_COMPONENT: &str = "Smooth scrolling";
const NAVBAR_COMPONENT: &str = "Navbar";

pub const SCROLLED_BACKGROUND: &str = "rgba(0, 0, 0, 0.95)";
pub const TOP_BACKGROUND: &str = "rgba(0, 0, 0, 0.9)";

/// Where to scroll so a section's top clears the fixed navbar.
pub fn scroll_target(offset_top: f64, nav_offset: f64) -> f64 {
    (offset_top - nav_offset).max(0.0)
}

pub fn navbar_background(scroll_y: f64, threshold: f64) -> &'static str {
    if scroll_y > threshold {
        SCROLLED_BACKGROUND
    } else {
        TOP_BACKGROUND
    }
}

/// In-page `#section` links scroll smoothly and close the mobile menu.
pub fn mount_smooth_scroll(
    window: &Window,
    document: &Document,
    config: &InteractionConfig,
    teardown: &mut Teardown,
) -> Result<(), InteractionError> {
    let links = query_all(document, r##".nav-link[href^="#"]"##, SCROLL_COMPONENT)?;
    let nav_offset = config.nav_offset_px;

    for link in links {
        let window = window.clone();
        let document = document.clone();
        let anchor = link.clone();
        teardown.add(listen(&link, "click", SCROLL_COMPONENT, move |event| {
            event.prevent_default();
            let Some(href) = anchor.get_attribute("href") else {
                return Ok(());
            };
            if href.len() < 2 {
                return Ok(());
            }
            let Some(section) = query_one(&document, &href, SCROLL_COMPONENT)? else {
                return Ok(());
            };
            let offset_top = section
                .dyn_ref::<HtmlElement>()
                .map(|section| f64::from(section.offset_top()))
                .unwrap_or(0.0);

            let options = ScrollToOptions::new();
            options.set_top(scroll_target(offset_top, nav_offset));
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);

            if let Some(menu) = query_one(&document, ".navbar-collapse", SCROLL_COMPONENT)? {
                if menu.class_list().contains(SHOW_CLASS) {
                    set_class(&menu, SHOW_CLASS, false);
                }
            }
            Ok(())
        })?);
    }
    Ok(())
}

/// The burger button opens and closes the collapsed menu.
pub fn mount_menu_toggle(
    document: &Document,
    teardown: &mut Teardown,
) -> Result<(), InteractionError> {
    let Some(toggler) = query_one(document, ".navbar-toggler", NAVBAR_COMPONENT)? else {
        return Ok(());
    };
    let document = document.clone();
    teardown.add(listen(&toggler, "click", NAVBAR_COMPONENT, move |_| {
        if let Some(menu) = query_one(&document, ".navbar-collapse", NAVBAR_COMPONENT)? {
            menu.class_list()
                .toggle(SHOW_CLASS)
                .map_err(js_fault(NAVBAR_COMPONENT))?;
        }
        Ok(())
    })?);
    Ok(())
}

/// Darkens the navbar once the page has scrolled past the threshold.
pub fn mount_navbar_background(
    window: &Window,
    document: &Document,
    config: &InteractionConfig,
    teardown: &mut Teardown,
) -> Result<(), InteractionError> {
    let Some(navbar) = query_one(document, ".navbar", NAVBAR_COMPONENT)? else {
        debug!("No navbar on this page");
        return Ok(());
    };
    let Ok(navbar) = navbar.dyn_into::<HtmlElement>() else {
        return Err(InteractionError::fault(
            NAVBAR_COMPONENT,
            "navbar is not an HTML element",
        ));
    };
    let threshold = config.navbar_scroll_threshold_px;
    let scrolled = window.clone();
    teardown.add(listen(window, "scroll", NAVBAR_COMPONENT, move |_| {
        let scroll_y = scrolled.scroll_y().map_err(js_fault(NAVBAR_COMPONENT))?;
        navbar
            .style()
            .set_property("background", navbar_background(scroll_y, threshold))
            .map_err(js_fault(NAVBAR_COMPONENT))
    })?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_target_clears_fixed_navbar() {
        assert_eq!(scroll_target(600.0, 80.0), 520.0);
        assert_eq!(scroll_target(40.0, 80.0), 0.0);
    }

    #[test]
    fn navbar_darkens_strictly_above_threshold() {
        assert_eq!(navbar_background(0.0, 50.0), TOP_BACKGROUND);
        assert_eq!(navbar_background(50.0, 50.0), TOP_BACKGROUND);
        assert_eq!(navbar_background(50.5, 50.0), SCROLLED_BACKGROUND);
    }
}
