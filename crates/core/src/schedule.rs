//! Deferred callbacks.
//!
//! Search submission waits a short, fixed delay before navigating so the exit
//! animation can play. The delay is cosmetic, so it sits behind [`Scheduler`]
//! and tests drive it by hand with [`ManualScheduler`].

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// A deferred unit of work. Single-threaded: tasks never cross threads.
pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler {
    /// Run `task` once, no earlier than `delay` from now.
    fn schedule(&self, delay: Duration, task: Task);
}

impl<S: Scheduler + ?Sized> Scheduler for Rc<S> {
    fn schedule(&self, delay: Duration, task: Task) {
        (**self).schedule(delay, task)
    }
}

/// Runs every task immediately, ignoring the delay.
#[derive(Clone, Copy, Debug, Default)]
pub struct Immediate;

impl Scheduler for Immediate {
    fn schedule(&self, _delay: Duration, task: Task) {
        task()
    }
}

/// Queues tasks until [`run_pending`](ManualScheduler::run_pending) is called.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    pending: Rc<RefCell<Vec<(Duration, Task)>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Delays of the queued tasks, in scheduling order.
    pub fn pending_delays(&self) -> Vec<Duration> {
        self.pending.borrow().iter().map(|(d, _)| *d).collect()
    }

    /// Run everything queued so far and return how many tasks ran. Tasks
    /// scheduled while running stay queued for the next call.
    pub fn run_pending(&self) -> usize {
        let tasks: Vec<(Duration, Task)> = self.pending.borrow_mut().drain(..).collect();
        let count = tasks.len();
        for (_, task) in tasks {
            task();
        }
        count
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        self.pending.borrow_mut().push((delay, task));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn immediate_runs_synchronously() {
        let ran = Rc::new(Cell::new(false));
        let flag = ran.clone();
        Immediate.schedule(Duration::from_millis(300), Box::new(move || flag.set(true)));
        assert!(ran.get());
    }

    #[test]
    fn manual_defers_until_run() {
        let sched = ManualScheduler::new();
        let count = Rc::new(Cell::new(0));
        for _ in 0..2 {
            let c = count.clone();
            sched.schedule(Duration::from_millis(300), Box::new(move || c.set(c.get() + 1)));
        }
        assert_eq!(count.get(), 0);
        assert_eq!(sched.pending_delays(), vec![Duration::from_millis(300); 2]);
        assert_eq!(sched.run_pending(), 2);
        assert_eq!(count.get(), 2);
        assert_eq!(sched.run_pending(), 0);
    }

    #[test]
    fn tasks_scheduled_while_running_wait_for_next_run() {
        let sched = ManualScheduler::new();
        let inner = sched.clone();
        sched.schedule(
            Duration::ZERO,
            Box::new(move || inner.schedule(Duration::ZERO, Box::new(|| {}))),
        );
        assert_eq!(sched.run_pending(), 1);
        assert_eq!(sched.pending_count(), 1);
    }
}
