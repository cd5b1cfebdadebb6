use web_sys::{Document, Element};

use crate::config::InteractionConfig;
use crate::dom::discovery::query_all;
use crate::dom::events::listen;
use crate::dom::render::{toggle_members, ACTIVE_CLASS};
use crate::dom::timers::GlooScheduler;
use crate::interactions::error::InteractionError;
use crate::interactions::registry::{ActivationGroup, Member};
use crate::interactions::teardown::Teardown;
use crate::interactions::triggers::{auto_advance, select, SharedCoordinator};

pub const SLIDER_GROUP: &str = "hero-slider";
const COMPONENT: &str = "Hero slider";

/// One member per slide, holding the slide and the indicator at the same
/// position. Indicators past the last slide belong to no member.
pub fn slide_members<T: Clone>(slides: &[T], indicators: &[T]) -> Vec<Member<Vec<T>>> {
    slides
        .iter()
        .enumerate()
        .map(|(index, slide)| {
            let mut handle = vec![slide.clone()];
            handle.extend(indicators.get(index).cloned());
            Member::new(index.to_string(), handle)
        })
        .collect()
}

/// How many indicators get a click handler.
pub fn clickable_indicators(slides: usize, indicators: usize) -> usize {
    slides.min(indicators)
}

/// Hero slides paired with their indicators; slide 0 starts active.
pub fn mount(
    document: &Document,
    coordinator: &SharedCoordinator<Vec<Element>>,
    scheduler: &GlooScheduler,
    config: &InteractionConfig,
    teardown: &mut Teardown,
) -> Result<(), InteractionError> {
    let slides = query_all(document, ".hero-slide", COMPONENT)?;
    let indicators = query_all(document, ".indicator", COMPONENT)?;
    if slides.is_empty() || indicators.is_empty() {
        return Err(InteractionError::MissingElements {
            component: COMPONENT,
        });
    }

    let group = ActivationGroup::exclusive(SLIDER_GROUP, slide_members(&slides, &indicators), 0)?;
    coordinator
        .borrow_mut()
        .register(group, toggle_members(ACTIVE_CLASS));

    let clickable = clickable_indicators(slides.len(), indicators.len());
    for (index, indicator) in indicators.iter().enumerate().take(clickable) {
        let go_to = select(coordinator.clone(), SLIDER_GROUP, index);
        teardown.add(listen(indicator, "click", COMPONENT, move |_| {
            go_to();
            Ok(())
        })?);
    }

    teardown.add(auto_advance(
        scheduler,
        coordinator.clone(),
        SLIDER_GROUP,
        config.auto_advance_ms,
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_pairs_with_slide_at_same_position() {
        let members = slide_members(&["s0", "s1", "s2"], &["i0", "i1", "i2"]);

        assert_eq!(members.len(), 3);
        assert_eq!(members[1].id, "1");
        assert_eq!(members[1].handle, vec!["s1", "i1"]);
    }

    #[test]
    fn extra_indicators_are_ignored() {
        let members = slide_members(&["s0", "s1"], &["i0", "i1", "i2", "i3"]);

        assert_eq!(members.len(), 2);
        assert!(members.iter().all(|member| !member.handle.contains(&"i2")));
        assert_eq!(clickable_indicators(2, 4), 2);
    }

    #[test]
    fn slides_without_indicator_stand_alone() {
        let members = slide_members(&["s0", "s1", "s2"], &["i0"]);

        assert_eq!(members[0].handle, vec!["s0", "i0"]);
        assert_eq!(members[2].handle, vec!["s2"]);
        assert_eq!(clickable_indicators(3, 1), 1);
    }
}
