use std::cell::RefCell;
use std::rc::Rc;

use crate::interactions::scheduler::{Scheduler, Tick};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterTiming {
    pub duration_ms: u32,
    pub tick_ms: u32,
}

impl CounterTiming {
    pub fn new(duration_ms: u32, tick_ms: u32) -> Self {
        CounterTiming {
            duration_ms,
            tick_ms: tick_ms.max(1),
        }
    }
}

impl Default for CounterTiming {
    fn default() -> Self {
        CounterTiming::new(2000, 16)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterPhase {
    Idle,
    Running,
    Completed,
}

/// Linear count-up from zero to `target` over a fixed duration.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterTask {
    target: u32,
    timing: CounterTiming,
    increment: f64,
    current: f64,
    elapsed_ms: u32,
    phase: CounterPhase,
}

impl CounterTask {
    pub fn new(target: u32, timing: CounterTiming) -> Self {
        let steps = f64::from(timing.duration_ms) / f64::from(timing.tick_ms);
        let increment = if steps > 0.0 {
            f64::from(target) / steps
        } else {
            f64::from(target)
        };
        CounterTask {
            target,
            timing,
            increment,
            current: 0.0,
            elapsed_ms: 0,
            phase: CounterPhase::Idle,
        }
    }

    #[cfg(test)]
    pub fn increment(&self) -> f64 {
        self.increment
    }

    #[cfg(test)]
    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    pub fn is_completed(&self) -> bool {
        self.phase == CounterPhase::Completed
    }

    /// Truncated, so a running counter never shows more than its target.
    pub fn display_value(&self) -> u32 {
        self.current.floor() as u32
    }

    /// Moves an idle task to running. Any other phase refuses.
    pub fn begin(&mut self) -> bool {
        if self.phase != CounterPhase::Idle {
            return false;
        }
        self.phase = CounterPhase::Running;
        true
    }

    /// Advances one tick period and returns the value to display.
    pub fn tick(&mut self) -> u32 {
        if self.phase != CounterPhase::Running {
            return self.display_value();
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(self.timing.tick_ms);
        self.current += self.increment;

        let target = f64::from(self.target);
        // The elapsed check ends runs whose step count is not a whole number.
        if self.current >= target || self.elapsed_ms >= self.timing.duration_ms {
            self.current = target;
            self.phase = CounterPhase::Completed;
        }
        self.display_value()
    }
}

struct Counter<H> {
    task: Rc<RefCell<CounterTask>>,
    handle: Rc<H>,
}

/// Runs one independent ticking timer per counter once started.
pub struct CounterAnimator<H, S: Scheduler> {
    counters: Vec<Counter<H>>,
    render: Rc<dyn Fn(&H, u32)>,
    scheduler: S,
}

impl<H: 'static, S: Scheduler> CounterAnimator<H, S> {
    /// Builds one idle task per `(handle, target)` pair.
    pub fn new<F>(
        counters: Vec<(H, u32)>,
        timing: CounterTiming,
        scheduler: S,
        render: F,
    ) -> Self
    where
        F: Fn(&H, u32) + 'static,
    {
        let counters = counters
            .into_iter()
            .map(|(handle, target)| Counter {
                task: Rc::new(RefCell::new(CounterTask::new(target, timing))),
                handle: Rc::new(handle),
            })
            .collect();
        CounterAnimator {
            counters,
            render: Rc::new(render),
            scheduler,
        }
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    /// Starts the counter at `index`. Running or finished counters are left alone.
    pub fn start(&self, index: usize) -> bool {
        let Some(counter) = self.counters.get(index) else {
            return false;
        };
        if !counter.task.borrow_mut().begin() {
            return false;
        }

        let task = counter.task.clone();
        let handle = counter.handle.clone();
        let render = self.render.clone();
        let period = task.borrow().timing.tick_ms;
        self.scheduler.every(
            period,
            Box::new(move || {
                let mut task = task.borrow_mut();
                let value = task.tick();
                render(&handle, value);
                if task.is_completed() {
                    Tick::Stop
                } else {
                    Tick::Continue
                }
            }),
        );
        true
    }

    /// Starts every counter; returns how many actually started.
    pub fn start_all(&self) -> usize {
        (0..self.counters.len())
            .filter(|index| self.start(*index))
            .count()
    }

    #[cfg(test)]
    pub fn phase(&self, index: usize) -> Option<CounterPhase> {
        self.counters
            .get(index)
            .map(|counter| counter.task.borrow().phase())
    }

    #[cfg(test)]
    pub fn display_value(&self, index: usize) -> Option<u32> {
        self.counters
            .get(index)
            .map(|counter| counter.task.borrow().display_value())
    }
}
