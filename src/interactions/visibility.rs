/// Observer options, in the units `IntersectionObserver` takes.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl ObserverOptions {
    pub fn new(threshold: f64, root_margin: impl Into<String>) -> Self {
        ObserverOptions {
            threshold,
            root_margin: root_margin.into(),
        }
    }
}

/// Turns a noisy intersection signal into a single "entered" event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityLatch {
    fired: bool,
}

impl VisibilityLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true only for the first intersecting observation.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if !intersecting || self.fired {
            return false;
        }
        self.fired = true;
        true
    }

    #[cfg(test)]
    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// A latch bound to the bulk activation it unlocks.
pub struct VisibilityWatch<F: FnMut()> {
    latch: VisibilityLatch,
    on_enter: F,
}

impl<F: FnMut()> VisibilityWatch<F> {
    pub fn new(on_enter: F) -> Self {
        VisibilityWatch {
            latch: VisibilityLatch::new(),
            on_enter,
        }
    }

    pub fn notify(&mut self, intersecting: bool) -> bool {
        if self.latch.observe(intersecting) {
            (self.on_enter)();
            return true;
        }
        false
    }

    #[cfg(test)]
    pub fn has_fired(&self) -> bool {
        self.latch.has_fired()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactions::counter::{CounterAnimator, CounterTiming};
    use crate::interactions::virtual_clock::VirtualClock;
    use std::cell::Cell;

    #[test]
    fn latch_ignores_leaving_and_repeats() {
        let mut latch = VisibilityLatch::new();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(latch.has_fired());
    }

    #[test]
    fn watch_fires_bulk_activation_once() {
        let fired = Cell::new(0);
        let mut watch = VisibilityWatch::new(|| fired.set(fired.get() + 1));

        for intersecting in [false, true, true, false, true, true] {
            watch.notify(intersecting);
        }
        assert_eq!(fired.get(), 1);
        assert!(watch.has_fired());
    }

    #[test]
    fn stats_section_starts_counters_once() {
        let clock = VirtualClock::new();
        let animator = CounterAnimator::new(
            vec![("clients", 250), ("projects", 125)],
            CounterTiming::default(),
            clock.clone(),
            |_: &&'static str, _| {},
        );
        let started = Cell::new(0);
        let mut watch = VisibilityWatch::new(|| started.set(started.get() + animator.start_all()));

        watch.notify(true);
        clock.advance(400);
        watch.notify(true);
        clock.advance(4000);

        assert_eq!(started.get(), 2);
        assert_eq!(animator.display_value(0), Some(250));
        assert_eq!(animator.display_value(1), Some(125));
    }
}
