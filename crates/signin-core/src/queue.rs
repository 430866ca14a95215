//! Timer queue of the single UI execution context.
//!
//! Deferred work is a closure queued with a deadline relative to the queue's
//! own clock. Nothing runs on its own: whoever owns the execution context
//! advances the clock (`advance_to` from the event loop with real elapsed
//! time, `advance_by` from tests) and due tasks run inline, on that thread,
//! ordered by `(deadline, schedule order)`.
//!
//! There is no cancellation. Owners that may disappear before their task runs
//! capture a `Weak` and turn the task into a no-op.

use std::cell::RefCell;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

struct Scheduled {
    deadline: Duration,
    id: TimerId,
    task: Box<dyn FnOnce()>,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scheduled {}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.deadline, self.id.0).cmp(&(other.deadline, other.id.0))
    }
}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Default)]
struct QueueInner {
    now: Duration,
    next_id: u64,
    pending: BinaryHeap<Reverse<Scheduled>>,
}

/// Cheap-to-clone handle to the main queue. All clones share one clock.
#[derive(Clone, Default)]
pub struct MainQueue {
    inner: Rc<RefCell<QueueInner>>,
}

impl MainQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current time on the queue clock (time since the queue was created,
    /// as far as it has been advanced).
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Queues `task` to run once the clock reaches `now + delay`.
    pub fn schedule_after(&self, delay: Duration, task: impl FnOnce() + 'static) -> TimerId {
        let mut inner = self.inner.borrow_mut();
        let id = TimerId(inner.next_id);
        inner.next_id = inner.next_id.wrapping_add(1);
        let deadline = inner.now.saturating_add(delay);
        inner.pending.push(Reverse(Scheduled {
            deadline,
            id,
            task: Box::new(task),
        }));
        tracing::debug!(timer = id.0, ?deadline, "scheduled deferred task");
        id
    }

    /// Number of tasks waiting to run.
    pub fn pending(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    /// Deadline of the earliest pending task.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.inner
            .borrow()
            .pending
            .peek()
            .map(|Reverse(next)| next.deadline)
    }

    /// Time left until the earliest pending task is due.
    pub fn time_until_next(&self) -> Option<Duration> {
        let now = self.now();
        self.next_deadline()
            .map(|deadline| deadline.saturating_sub(now))
    }

    /// Advances the clock by `delta`, running every task that becomes due.
    ///
    /// Returns the number of tasks run.
    pub fn advance_by(&self, delta: Duration) -> usize {
        let target = self.now().saturating_add(delta);
        self.advance_to(target)
    }

    /// Advances the clock to `target`, running every task whose deadline is
    /// at or before it. Tasks scheduled by running tasks are honoured in the
    /// same call if they fall due. The clock never moves backwards.
    ///
    /// Returns the number of tasks run.
    pub fn advance_to(&self, target: Duration) -> usize {
        let mut ran = 0;
        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                let due = inner
                    .pending
                    .peek()
                    .is_some_and(|Reverse(next)| next.deadline <= target);
                if !due {
                    break;
                }
                let Some(Reverse(next)) = inner.pending.pop() else {
                    break;
                };
                if next.deadline > inner.now {
                    inner.now = next.deadline;
                }
                next
            };
            // Borrow released: the task may schedule more work.
            tracing::debug!(timer = next.id.0, "running deferred task");
            (next.task)();
            ran += 1;
        }

        let mut inner = self.inner.borrow_mut();
        if target > inner.now {
            inner.now = target;
        }
        ran
    }
}

impl fmt::Debug for MainQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("MainQueue")
            .field("now", &inner.now)
            .field("pending", &inner.pending.len())
            .finish()
    }
}
