//! Cancellable delayed actions on a logical clock.
//!
//! The clock only moves when the owner calls [`Scheduler::pop_due`] or
//! [`Scheduler::settle`]; nothing fires on its own. Dropping the scheduler
//! drops every pending action with it.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

#[derive(Debug, Clone)]
struct Pending<A> {
    id: TaskId,
    due: Duration,
    action: A,
}

#[derive(Debug, Clone)]
pub struct Scheduler<A> {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending<A>>,
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Scheduler<A> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Time elapsed on this scheduler's clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn schedule(&mut self, delay: Duration, action: A) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.pending.push(Pending {
            id,
            due: self.now.saturating_add(delay),
            action,
        });
        id
    }

    /// Returns `false` if the task already fired or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|task| task.id != id);
        self.pending.len() != before
    }

    /// Drops every pending task and returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    /// Removes the earliest task due at or before `until` and moves the clock
    /// to its due time. Ties fire in scheduling order.
    ///
    /// Tasks scheduled while draining are measured from the fired task's due
    /// time, so a chain of delays lands where it would have with a finer clock.
    pub fn pop_due(&mut self, until: Duration) -> Option<A> {
        let (index, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, task)| task.due <= until)
            .min_by_key(|(_, task)| (task.due, task.id.0))?;
        let task = self.pending.swap_remove(index);
        self.now = self.now.max(task.due);
        Some(task.action)
    }

    /// Moves the clock forward to `until` once everything due has fired.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}
