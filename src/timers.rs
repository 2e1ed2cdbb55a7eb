//! Delayed work with cancellation.
//!
//! Everything time-based on the page (typing steps, the fake form submission,
//! banner auto-hide, scroll debouncing) goes through [`Scheduler`] so the
//! controllers can run against [`GlooScheduler`] in the browser and against a
//! manual clock in tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Shared flag telling a pending task to not run.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Owner of a scheduled task. Dropping it cancels the task.
#[derive(Debug)]
pub struct TimerHandle {
    token: CancelToken,
}

impl TimerHandle {
    pub fn new(token: CancelToken) -> Self {
        Self { token }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TimerHandle;
}

/// Browser timers via `setTimeout`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TimerHandle {
        let token = CancelToken::new();
        let guard = token.clone();
        // The JS timer is left to fire; a cancelled token turns it into a no-op.
        // This keeps a task free to re-arm the slot that owns its own handle.
        Timeout::new(delay_ms, move || {
            if !guard.is_cancelled() {
                task();
            }
        })
        .forget();
        TimerHandle::new(token)
    }
}

/// Holds at most one pending task. Arming it again cancels the previous one.
#[derive(Debug, Clone, Default)]
pub struct TimerSlot(Rc<RefCell<Option<TimerHandle>>>);

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&self, handle: TimerHandle) {
        let previous = self.0.borrow_mut().replace(handle);
        drop(previous);
    }

    pub fn cancel(&self) {
        let previous = self.0.borrow_mut().take();
        drop(previous);
    }
}

/// Trailing-edge debounce: a burst of calls runs only the last one, once the
/// burst has been quiet for `wait_ms`.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    wait_ms: u32,
    slot: TimerSlot,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, wait_ms: u32) -> Self {
        Self {
            scheduler,
            wait_ms,
            slot: TimerSlot::new(),
        }
    }

    pub fn call(&self, f: impl FnOnce() + 'static) {
        let handle = self.scheduler.schedule(self.wait_ms, Box::new(f));
        self.slot.arm(handle);
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    struct Pending {
        due: u64,
        seq: u64,
        token: CancelToken,
        task: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Clock {
        now: u64,
        seq: u64,
        queue: Vec<Pending>,
    }

    /// Manual clock. Tasks run only inside [`FakeScheduler::advance`].
    #[derive(Clone, Default)]
    pub struct FakeScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    impl FakeScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> u64 {
            self.clock.borrow().now
        }

        /// Number of tasks still waiting that have not been cancelled.
        pub fn pending(&self) -> usize {
            self.clock
                .borrow()
                .queue
                .iter()
                .filter(|p| !p.token.is_cancelled())
                .count()
        }

        /// Moves time forward, running due tasks in order. Tasks scheduled
        /// by a running task run too if they fall due inside the window.
        pub fn advance(&self, ms: u64) {
            let target = self.now() + ms;
            loop {
                let next = {
                    let mut clock = self.clock.borrow_mut();
                    let idx = clock
                        .queue
                        .iter()
                        .enumerate()
                        .filter(|(_, p)| p.due <= target)
                        .min_by_key(|(_, p)| (p.due, p.seq))
                        .map(|(i, _)| i);
                    idx.map(|i| {
                        let pending = clock.queue.remove(i);
                        clock.now = pending.due;
                        pending
                    })
                };
                match next {
                    Some(pending) if !pending.token.is_cancelled() => (pending.task)(),
                    Some(_) => {}
                    None => break,
                }
            }
            self.clock.borrow_mut().now = target;
        }
    }

    impl Scheduler for FakeScheduler {
        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TimerHandle {
            let token = CancelToken::new();
            let mut clock = self.clock.borrow_mut();
            clock.seq += 1;
            let pending = Pending {
                due: clock.now + u64::from(delay_ms),
                seq: clock.seq,
                token: token.clone(),
                task,
            };
            clock.queue.push(pending);
            TimerHandle::new(token)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeScheduler;
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<u32>>>, impl Fn(u32) -> Box<dyn FnOnce()>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let make = move |n: u32| {
            let sink = sink.clone();
            Box::new(move || sink.borrow_mut().push(n)) as Box<dyn FnOnce()>
        };
        (log, make)
    }

    #[test]
    fn tasks_run_in_due_order() {
        let scheduler = FakeScheduler::new();
        let (log, task) = recorder();
        let _a = scheduler.schedule(30, task(3));
        let _b = scheduler.schedule(10, task(1));
        let _c = scheduler.schedule(20, task(2));

        scheduler.advance(15);
        assert_eq!(*log.borrow(), vec![1]);
        scheduler.advance(15);
        assert_eq!(*log.borrow(), vec![1, 2, 3]);
        assert_eq!(scheduler.now(), 30);
    }

    #[test]
    fn dropping_the_handle_cancels() {
        let scheduler = FakeScheduler::new();
        let (log, task) = recorder();
        let handle = scheduler.schedule(10, task(1));
        drop(handle);
        scheduler.advance(100);
        assert!(log.borrow().is_empty());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn rearming_a_slot_cancels_the_old_task() {
        let scheduler = FakeScheduler::new();
        let (log, task) = recorder();
        let slot = TimerSlot::new();
        slot.arm(scheduler.schedule(10, task(1)));
        slot.arm(scheduler.schedule(10, task(2)));
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(10);
        assert_eq!(*log.borrow(), vec![2]);

        slot.arm(scheduler.schedule(10, task(3)));
        slot.cancel();
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn debouncer_keeps_only_the_trailing_call() {
        let scheduler = FakeScheduler::new();
        let (log, task) = recorder();
        let debouncer = Debouncer::new(scheduler.clone(), 10);

        debouncer.call(task(1));
        scheduler.advance(4);
        debouncer.call(task(2));
        scheduler.advance(4);
        debouncer.call(task(3));
        scheduler.advance(9);
        assert!(log.borrow().is_empty());

        scheduler.advance(1);
        assert_eq!(*log.borrow(), vec![3]);

        debouncer.call(task(4));
        scheduler.advance(10);
        assert_eq!(*log.borrow(), vec![3, 4]);
    }

    #[test]
    fn nested_schedules_within_the_window_run() {
        let scheduler = FakeScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let slot = TimerSlot::new();

        let inner_scheduler = scheduler.clone();
        let inner_slot = slot.clone();
        let inner_log = log.clone();
        slot.arm(scheduler.schedule(
            5,
            Box::new(move || {
                inner_log.borrow_mut().push("outer");
                let log = inner_log.clone();
                inner_slot.arm(
                    inner_scheduler.schedule(5, Box::new(move || log.borrow_mut().push("inner"))),
                );
            }),
        ));

        scheduler.advance(10);
        assert_eq!(*log.borrow(), vec!["outer", "inner"]);
    }
}
