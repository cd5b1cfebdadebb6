//! Deterministic [`Scheduler`] for tests: time only moves when `advance` is called.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::interactions::scheduler::{Scheduler, Tick, TimerHandle};

enum Task {
    Periodic(Box<dyn FnMut() -> Tick>),
    Once(Box<dyn FnOnce()>),
}

struct Entry {
    id: u64,
    due_ms: u64,
    period_ms: u64,
    task: Option<Task>,
    active: Rc<Cell<bool>>,
}

#[derive(Default)]
struct Inner {
    now_ms: u64,
    next_id: u64,
    timers: Vec<Entry>,
}

#[derive(Clone, Default)]
pub struct VirtualClock {
    inner: Rc<RefCell<Inner>>,
}

#[derive(Clone, Debug)]
pub struct VirtualTimer {
    active: Rc<Cell<bool>>,
}

impl TimerHandle for VirtualTimer {
    fn cancel(&self) {
        self.active.set(false);
    }

    fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.inner.borrow().now_ms
    }

    pub fn pending(&self) -> usize {
        self.inner
            .borrow()
            .timers
            .iter()
            .filter(|entry| entry.active.get())
            .count()
    }

    fn schedule(&self, delay_ms: u64, period_ms: u64, task: Task) -> VirtualTimer {
        let mut inner = self.inner.borrow_mut();
        let active = Rc::new(Cell::new(true));
        let id = inner.next_id;
        inner.next_id += 1;
        let due_ms = inner.now_ms + delay_ms;
        inner.timers.push(Entry {
            id,
            due_ms,
            period_ms,
            task: Some(task),
            active: active.clone(),
        });
        VirtualTimer { active }
    }

    /// Moves time forward by `ms`, firing every timer that falls due on the
    /// way in due-time order (ties in scheduling order).
    pub fn advance(&self, ms: u64) {
        let until = self.now_ms() + ms;
        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                inner.timers.retain(|entry| entry.active.get());
                let due = inner
                    .timers
                    .iter()
                    .filter(|entry| entry.due_ms <= until)
                    .min_by_key(|entry| (entry.due_ms, entry.id))
                    .map(|entry| (entry.id, entry.due_ms));
                match due {
                    Some((id, due_ms)) => {
                        inner.now_ms = due_ms;
                        let entry = inner.timers.iter_mut().find(|entry| entry.id == id);
                        entry.and_then(|entry| entry.task.take().map(|task| (id, task)))
                    }
                    None => None,
                }
            };
            let Some((id, task)) = next else {
                break;
            };

            match task {
                Task::Once(task) => {
                    self.finish(id);
                    task();
                }
                Task::Periodic(mut task) => {
                    let tick = task();
                    let mut inner = self.inner.borrow_mut();
                    if let Some(entry) = inner.timers.iter_mut().find(|entry| entry.id == id) {
                        if tick == Tick::Stop || !entry.active.get() {
                            entry.active.set(false);
                        } else {
                            entry.due_ms += entry.period_ms;
                            entry.task = Some(Task::Periodic(task));
                        }
                    }
                }
            }
        }
        self.inner.borrow_mut().now_ms = until;
    }

    fn finish(&self, id: u64) {
        let inner = self.inner.borrow();
        if let Some(entry) = inner.timers.iter().find(|entry| entry.id == id) {
            entry.active.set(false);
        }
    }
}

impl Scheduler for VirtualClock {
    type Timer = VirtualTimer;

    fn every(&self, period_ms: u32, task: Box<dyn FnMut() -> Tick>) -> VirtualTimer {
        let period_ms = u64::from(period_ms.max(1));
        self.schedule(period_ms, period_ms, Task::Periodic(task))
    }

    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> VirtualTimer {
        self.schedule(u64::from(delay_ms), 0, Task::Once(task))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn periodic_task_runs_until_stop() {
        let clock = VirtualClock::new();
        let runs = Rc::new(Cell::new(0));
        let counter = runs.clone();
        let timer = clock.every(
            10,
            Box::new(move || {
                counter.set(counter.get() + 1);
                if counter.get() == 3 {
                    Tick::Stop
                } else {
                    Tick::Continue
                }
            }),
        );

        clock.advance(25);
        assert_eq!(runs.get(), 2);
        assert!(timer.is_active());

        clock.advance(100);
        assert_eq!(runs.get(), 3);
        assert!(!timer.is_active());
        assert_eq!(clock.pending(), 0);
        assert_eq!(clock.now_ms(), 125);
    }

    #[test]
    fn cancel_is_idempotent() {
        let clock = VirtualClock::new();
        let runs = Rc::new(Cell::new(0));
        let counter = runs.clone();
        let timer = clock.after(50, Box::new(move || counter.set(counter.get() + 1)));

        timer.cancel();
        timer.cancel();
        clock.advance(100);

        assert_eq!(runs.get(), 0);
        assert!(!timer.is_active());
    }

    #[test]
    fn timers_fire_in_due_order() {
        let clock = VirtualClock::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let late = order.clone();
        clock.after(30, Box::new(move || late.borrow_mut().push("late")));
        let early = order.clone();
        clock.after(10, Box::new(move || early.borrow_mut().push("early")));
        let ticks = order.clone();
        clock.every(
            20,
            Box::new(move || {
                ticks.borrow_mut().push("tick");
                Tick::Continue
            }),
        );

        clock.advance(40);
        assert_eq!(*order.borrow(), vec!["early", "tick", "late", "tick"]);
    }

    #[test]
    fn tasks_may_schedule_more_work() {
        let clock = VirtualClock::new();
        let fired = Rc::new(Cell::new(false));
        let inner_clock = clock.clone();
        let flag = fired.clone();
        clock.after(
            5,
            Box::new(move || {
                let flag = flag.clone();
                inner_clock.after(5, Box::new(move || flag.set(true)));
            }),
        );

        clock.advance(10);
        assert!(fired.get());
    }
}
