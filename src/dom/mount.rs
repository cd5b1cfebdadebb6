use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use web_sys::{Document, Window};

use crate::config::{InteractionConfig, CONFIG_ELEMENT_ID};
use crate::dom::reveal::REVEAL_GROUP;
use crate::dom::slider::SLIDER_GROUP;
use crate::dom::tabs::TABS_GROUP;
use crate::dom::timers::GlooScheduler;
use crate::dom::{counters, navigation, page_events, quote_form, reveal, slider, tabs};
use crate::interactions::coordinator::ActivationCoordinator;
use crate::interactions::error::contain;
use crate::interactions::teardown::Teardown;

/// Every listener, observer and timer [`mount`] attached.
pub struct MountedPage {
    teardown: Teardown,
}

impl MountedPage {
    pub fn teardown(self) {
        let detached = self.teardown.run();
        debug!("Detached {} landing page handlers", detached);
    }
}

pub fn load_config(document: &Document) -> InteractionConfig {
    let Some(source) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return InteractionConfig::default();
    };
    match InteractionConfig::from_json(&source) {
        Ok(config) => config,
        Err(e) => {
            warn!("{}; using default timings", e);
            InteractionConfig::default()
        }
    }
}

/// Wires every feature onto the rendered page. A feature that fails to set
/// up is logged and skipped; the others still run. Whatever a failing
/// feature attached before the failure is still torn down with the page.
pub fn mount(window: &Window, document: &Document) -> MountedPage {
    let config = load_config(document);
    let scheduler = GlooScheduler;
    let coordinator = Rc::new(RefCell::new(ActivationCoordinator::new()));
    let mut teardown = Teardown::new();

    contain("Hero slider", || {
        slider::mount(document, &coordinator, &scheduler, &config, &mut teardown)
    });
    contain("Counters", || {
        counters::mount(document, &scheduler, &config, &mut teardown)
    });
    contain("Service tabs", || {
        tabs::mount(document, &coordinator, &mut teardown)
    });
    contain("Smooth scrolling", || {
        navigation::mount_smooth_scroll(window, document, &config, &mut teardown)?;
        navigation::mount_menu_toggle(document, &mut teardown)
    });
    contain("Scroll animations", || {
        reveal::mount(document, &coordinator, &config, &mut teardown)
    });
    contain("Modal form", || {
        quote_form::mount(window, document, &scheduler, &config, &mut teardown)
    });
    contain("Navbar", || {
        navigation::mount_navbar_background(window, document, &config, &mut teardown)
    });
    contain("Page events", || {
        page_events::mount_portfolio_clicks(document, &mut teardown)?;
        page_events::mount_resize_log(window, &mut teardown)
    });

    let registered = coordinator.borrow();
    for id in [SLIDER_GROUP, TABS_GROUP, REVEAL_GROUP] {
        if let Some(group) = registered.group(id) {
            debug!(
                "{} ({:?}): {} members, active {:?}",
                id,
                group.policy(),
                group.len(),
                registered.active_index(id)
            );
        }
    }
    info!(
        "Landing page interactions initialized ({} handlers)",
        teardown.len()
    );
    MountedPage { teardown }
}
