/// Returned by a periodic task to keep or stop its timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Stop,
}

/// A scheduled timer.
///
/// Dropping a handle leaves the timer running; only [`TimerHandle::cancel`]
/// or a periodic task returning [`Tick::Stop`] ends it. Cancelling an already
/// finished timer does nothing.
pub trait TimerHandle {
    fn cancel(&self);
    fn is_active(&self) -> bool;
}

/// Posts callbacks onto the page's single control flow.
///
/// Callbacks never overlap: each one runs to completion before the next is
/// dispatched.
pub trait Scheduler {
    type Timer: TimerHandle;

    fn every(&self, period_ms: u32, task: Box<dyn FnMut() -> Tick>) -> Self::Timer;

    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Timer;
}
