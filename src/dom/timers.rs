use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen_futures::spawn_local;

use crate::interactions::scheduler::{Scheduler, Tick, TimerHandle};
use crate::interactions::teardown::Detach;

enum Pending {
    Interval(Interval),
    Timeout(Timeout),
}

/// Browser scheduler on top of `setInterval`/`setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooScheduler;

/// The timer lives in a slot its own callback can reach, so it stays alive
/// until it stops itself or is cancelled.
#[derive(Clone)]
pub struct GlooTimer {
    slot: Rc<RefCell<Option<Pending>>>,
}

impl TimerHandle for GlooTimer {
    fn cancel(&self) {
        // Dropping clears the browser timer and frees its closure.
        drop(self.slot.borrow_mut().take());
    }

    fn is_active(&self) -> bool {
        self.slot.borrow().is_some()
    }
}

impl Detach for GlooTimer {
    fn detach(self: Box<Self>) {
        if self.is_active() {
            self.cancel();
        }
    }
}

impl Scheduler for GlooScheduler {
    type Timer = GlooTimer;

    fn every(&self, period_ms: u32, mut task: Box<dyn FnMut() -> Tick>) -> GlooTimer {
        let slot = Rc::new(RefCell::new(None));
        let own_slot = slot.clone();
        let interval = Interval::new(period_ms, move || {
            if task() == Tick::Stop {
                let taken = own_slot.borrow_mut().take();
                if let Some(Pending::Interval(interval)) = taken {
                    // Clear now, free the running closure once it has returned.
                    let closure = interval.cancel();
                    spawn_local(async move { drop(closure) });
                }
            }
        });
        *slot.borrow_mut() = Some(Pending::Interval(interval));
        GlooTimer { slot }
    }

    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> GlooTimer {
        let slot = Rc::new(RefCell::new(None));
        let own_slot = slot.clone();
        let timeout = Timeout::new(delay_ms, move || {
            let taken = own_slot.borrow_mut().take();
            task();
            if let Some(Pending::Timeout(timeout)) = taken {
                let closure = timeout.cancel();
                spawn_local(async move { drop(closure) });
            }
        });
        *slot.borrow_mut() = Some(Pending::Timeout(timeout));
        GlooTimer { slot }
    }
}
