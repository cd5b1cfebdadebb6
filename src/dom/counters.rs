use std::rc::Rc;

use log::{info, warn};
use web_sys::Document;

use crate::config::InteractionConfig;
use crate::dom::discovery::{count_target, query_one, require_all};
use crate::dom::observer::observe;
use crate::dom::render::show_count;
use crate::dom::timers::GlooScheduler;
use crate::interactions::counter::CounterAnimator;
use crate::interactions::error::InteractionError;
use crate::interactions::teardown::Teardown;
use crate::interactions::visibility::VisibilityWatch;

const COMPONENT: &str = "Counter";

/// Counters count up once, the first time the stats section is half visible.
pub fn mount(
    document: &Document,
    scheduler: &GlooScheduler,
    config: &InteractionConfig,
    teardown: &mut Teardown,
) -> Result<(), InteractionError> {
    let elements = require_all(document, ".counter", COMPONENT)?;
    let counters = elements
        .into_iter()
        .map(|element| {
            let target = count_target(element.get_attribute("data-target").as_deref());
            (element, target)
        })
        .collect();
    let animator = Rc::new(CounterAnimator::new(
        counters,
        config.counter_timing(),
        *scheduler,
        show_count,
    ));

    let Some(section) = query_one(document, ".stats-section", COMPONENT)? else {
        warn!("Stats section not found; counters stay at their initial value");
        return Ok(());
    };

    let mut watch = VisibilityWatch::new(move || {
        let started = animator.start_all();
        info!("Started {} of {} counters", started, animator.len());
    });
    teardown.add(observe(
        &[section],
        &config.stats_options(),
        COMPONENT,
        move |_, intersecting| {
            watch.notify(intersecting);
        },
    )?);
    Ok(())
}
