//! Deferred task queue driven by the host's clock.
//!
//! The engine never sleeps or spawns timers. Components schedule tasks with
//! a due time and keep the returned [`TaskHandle`] so a later event can
//! cancel or supersede the task. The host arms a single timer for
//! [`Scheduler::next_deadline`] and calls back with the current instant;
//! due tasks are then drained in due-time order (ties in scheduling order).

use std::time::{Duration, Instant};

/// Handle to a scheduled task, used for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug)]
struct Scheduled<T> {
    handle: TaskHandle,
    due: Instant,
    task: T,
}

/// A cancellable set of pending tasks.
#[derive(Debug)]
pub struct Scheduler<T> {
    next_id: u64,
    pending: Vec<Scheduled<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to become due `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, task: T) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(Scheduled {
            handle,
            due: now + delay,
            task,
        });
        handle
    }

    /// Cancel a pending task. Returns false if it already ran or was
    /// cancelled before.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|s| s.handle != handle);
        self.pending.len() != before
    }

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.pending.iter().any(|s| s.handle == handle)
    }

    /// Earliest due time among pending tasks.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|s| s.due).min()
    }

    /// Remove and return every task due at or before `now`.
    pub fn take_due(&mut self, now: Instant) -> Vec<(TaskHandle, T)> {
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|s| s.due <= now);
        self.pending = pending;
        due.sort_by(|a, b| a.due.cmp(&b.due).then(a.handle.0.cmp(&b.handle.0)));
        due.into_iter().map(|s| (s.handle, s.task)).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tasks_drain_in_due_order() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(t0, Duration::from_millis(20), "late");
        scheduler.schedule(t0, Duration::from_millis(5), "early");
        scheduler.schedule(t0, Duration::from_millis(5), "early-second");

        assert_eq!(scheduler.next_deadline(), Some(t0 + Duration::from_millis(5)));

        let due: Vec<_> = scheduler
            .take_due(t0 + Duration::from_millis(10))
            .into_iter()
            .map(|(_, task)| task)
            .collect();
        assert_eq!(due, vec!["early", "early-second"]);
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn cancelled_task_never_fires() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new();
        let handle = scheduler.schedule(t0, Duration::ZERO, ());
        assert!(scheduler.is_pending(handle));
        assert!(scheduler.cancel(handle));
        assert!(!scheduler.cancel(handle));
        assert!(scheduler.take_due(t0 + Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn zero_delay_is_due_on_the_same_instant() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(t0, Duration::ZERO, 1u8);
        assert_eq!(scheduler.take_due(t0).len(), 1);
        assert!(scheduler.is_empty());
    }
}
