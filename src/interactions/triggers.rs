use std::cell::RefCell;
use std::rc::Rc;

use crate::interactions::coordinator::ActivationCoordinator;
use crate::interactions::scheduler::{Scheduler, Tick};

pub type SharedCoordinator<H> = Rc<RefCell<ActivationCoordinator<H>>>;

/// Advances `group` every `period_ms`, forever.
///
/// Goes through the same `advance`/`request` path as clicks, so a click just
/// before a tick is simply followed by the tick's move.
pub fn auto_advance<H, S>(
    scheduler: &S,
    coordinator: SharedCoordinator<H>,
    group: &str,
    period_ms: u32,
) -> S::Timer
where
    H: 'static,
    S: Scheduler,
{
    let group = group.to_string();
    scheduler.every(
        period_ms,
        Box::new(move || {
            coordinator.borrow_mut().advance(&group);
            Tick::Continue
        }),
    )
}

/// Click handler body that activates a fixed member.
pub fn select<H: 'static>(
    coordinator: SharedCoordinator<H>,
    group: &str,
    index: usize,
) -> impl Fn() {
    let group = group.to_string();
    move || {
        coordinator.borrow_mut().request(&group, index);
    }
}

/// Observer body for an independent group: every intersecting member is activated.
pub fn reveal_on_enter<H: 'static>(
    coordinator: SharedCoordinator<H>,
    group: &str,
) -> impl Fn(usize, bool) {
    let group = group.to_string();
    move |index, intersecting| {
        if intersecting && !coordinator.borrow().is_active(&group, index) {
            coordinator.borrow_mut().request(&group, index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactions::registry::{ActivationGroup, Member};
    use crate::interactions::scheduler::TimerHandle;
    use crate::interactions::virtual_clock::VirtualClock;

    type Log = Rc<RefCell<Vec<(usize, bool)>>>;

    fn shared(id: &str, size: usize, exclusive: bool) -> (SharedCoordinator<usize>, Log) {
        let members = (0..size).map(|i| Member::new(format!("m{i}"), i)).collect();
        let group = if exclusive {
            ActivationGroup::exclusive(id, members, 0).unwrap()
        } else {
            ActivationGroup::independent(id, members).unwrap()
        };
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let mut coordinator = ActivationCoordinator::new();
        coordinator.register(group, move |index: &usize, active| {
            sink.borrow_mut().push((*index, active));
        });
        (Rc::new(RefCell::new(coordinator)), log)
    }

    #[test]
    fn auto_advance_cycles_every_period() {
        let clock = VirtualClock::new();
        let (slider, _log) = shared("slider", 3, true);
        let timer = auto_advance(&clock, slider.clone(), "slider", 5000);

        clock.advance(4999);
        assert_eq!(slider.borrow().active_index("slider"), Some(0));

        let mut seen = Vec::new();
        for _ in 0..4 {
            clock.advance(5000);
            seen.push(slider.borrow().active_index("slider").unwrap());
        }
        assert_eq!(seen, vec![1, 2, 0, 1]);
        assert!(timer.is_active());
    }

    #[test]
    fn click_then_auto_advance() {
        let clock = VirtualClock::new();
        let (slider, log) = shared("slider", 3, true);
        auto_advance(&clock, slider.clone(), "slider", 5000);
        let click_second = select(slider.clone(), "slider", 1);

        clock.advance(1000);
        click_second();
        assert_eq!(*log.borrow(), vec![(0, false), (1, true)]);

        clock.advance(4000);
        assert_eq!(slider.borrow().active_index("slider"), Some(2));
        assert_eq!(log.borrow().len(), 4);
    }

    #[test]
    fn repeated_click_on_active_indicator_is_silent() {
        let (slider, log) = shared("slider", 3, true);
        let click_first = select(slider.clone(), "slider", 0);

        click_first();
        click_first();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn reveal_is_one_way_per_member() {
        let (reveal, log) = shared("reveal", 3, false);
        let observe = reveal_on_enter(reveal.clone(), "reveal");

        observe(2, false);
        observe(2, true);
        observe(0, true);
        observe(2, true);
        observe(2, false);

        assert_eq!(*log.borrow(), vec![(2, true), (0, true)]);
        assert!(reveal.borrow().is_active("reveal", 2));
        assert!(!reveal.borrow().is_active("reveal", 1));
    }
}
