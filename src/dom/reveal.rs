use log::debug;
use web_sys::{Document, Element};

use crate::config::InteractionConfig;
use crate::dom::discovery::query_all;
use crate::dom::observer::observe;
use crate::dom::render::{set_class, toggle_members, FADE_IN_CLASS, VISIBLE_CLASS};
use crate::interactions::error::InteractionError;
use crate::interactions::registry::{ActivationGroup, Member};
use crate::interactions::teardown::Teardown;
use crate::interactions::triggers::{reveal_on_enter, SharedCoordinator};

pub const REVEAL_GROUP: &str = "scroll-reveal";
const COMPONENT: &str = "Scroll animation";
const TARGETS: &str = ".portfolio-item, .testimonial-card, .pricing-card";

pub fn mount(
    document: &Document,
    coordinator: &SharedCoordinator<Vec<Element>>,
    config: &InteractionConfig,
    teardown: &mut Teardown,
) -> Result<(), InteractionError> {
    let targets = query_all(document, TARGETS, COMPONENT)?;
    if targets.is_empty() {
        debug!("No scroll reveal targets on this page");
        return Ok(());
    }

    for target in &targets {
        set_class(target, FADE_IN_CLASS, true);
    }
    let members = targets
        .iter()
        .enumerate()
        .map(|(index, target)| Member::new(index.to_string(), vec![target.clone()]))
        .collect();
    let group = ActivationGroup::independent(REVEAL_GROUP, members)?;
    coordinator
        .borrow_mut()
        .register(group, toggle_members(VISIBLE_CLASS));

    let on_enter = reveal_on_enter(coordinator.clone(), REVEAL_GROUP);
    teardown.add(observe(
        &targets,
        &config.reveal_options(),
        COMPONENT,
        move |index, intersecting| on_enter(index, intersecting),
    )?);
    Ok(())
}
