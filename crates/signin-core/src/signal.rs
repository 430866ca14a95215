//! Push-based signals.
//!
//! A `Publisher<T>` delivers each emitted value to every current subscriber,
//! synchronously and in registration order, before `emit` returns.
//! `subscribe` hands back a `Subscription`; dropping it unsubscribes, so a
//! consumer keeps its subscriptions alive by storing them (usually in a
//! `Vec<Subscription>` next to whatever it renders).
//!
//! ## Re-entrancy
//!
//! No borrow is held while callbacks run, so a callback may emit, subscribe,
//! or drop subscriptions. A subscriber removed by an earlier callback during
//! the same emission is skipped.
//!
//! An `emit` issued while the same publisher is already delivering is queued
//! and delivered once the current value has reached every subscriber. Every
//! subscriber therefore sees every value exactly once, in emission order,
//! including the one that triggered the nested emit.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Subscribers<T> {
    next_id: u64,
    entries: Vec<(u64, Callback<T>)>,
}

impl<T> Subscribers<T> {
    fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }
}

/// A push channel for values of type `T`.
pub struct Publisher<T> {
    subscribers: Rc<RefCell<Subscribers<T>>>,
    /// Values emitted while a delivery was in progress.
    pending: RefCell<VecDeque<T>>,
    delivering: Cell<bool>,
}

impl<T: 'static> Publisher<T> {
    pub fn new() -> Self {
        Self {
            subscribers: Rc::new(RefCell::new(Subscribers {
                next_id: 0,
                entries: Vec::new(),
            })),
            pending: RefCell::new(VecDeque::new()),
            delivering: Cell::new(false),
        }
    }

    /// Registers `callback` for every future emission.
    ///
    /// The current value is not replayed; read it from the owner instead.
    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) -> Subscription {
        let id = {
            let mut subscribers = self.subscribers.borrow_mut();
            let id = subscribers.next_id;
            subscribers.next_id = subscribers.next_id.wrapping_add(1);
            let callback: Callback<T> = Rc::new(RefCell::new(callback));
            subscribers.entries.push((id, callback));
            id
        };

        let weak: Weak<RefCell<Subscribers<T>>> = Rc::downgrade(&self.subscribers);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(subscribers) = weak.upgrade() {
                    subscribers
                        .borrow_mut()
                        .entries
                        .retain(|(entry_id, _)| *entry_id != id);
                }
            })),
        }
    }

    /// Delivers `value` to all current subscribers, in registration order.
    ///
    /// Called from inside a callback of this publisher, the value is queued
    /// behind the one being delivered and sent before the outer call returns.
    pub fn emit(&self, value: &T)
    where
        T: Clone,
    {
        self.pending.borrow_mut().push_back(value.clone());
        if self.delivering.replace(true) {
            return;
        }

        let _delivering = DeliveryGuard(&self.delivering);
        loop {
            let Some(next) = self.pending.borrow_mut().pop_front() else {
                break;
            };
            self.deliver(&next);
        }
    }

    fn deliver(&self, value: &T) {
        let snapshot: Vec<(u64, Callback<T>)> = self
            .subscribers
            .borrow()
            .entries
            .iter()
            .map(|(id, callback)| (*id, Rc::clone(callback)))
            .collect();

        for (id, callback) in snapshot {
            if !self.subscribers.borrow().contains(id) {
                continue;
            }
            match callback.try_borrow_mut() {
                Ok(mut callback) => (&mut *callback)(value),
                Err(_) => tracing::warn!(subscriber = id, "subscriber busy; value skipped"),
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().entries.len()
    }
}

impl<T: 'static> Default for Publisher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Publisher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Publisher")
            .field("subscribers", &self.subscribers.borrow().entries.len())
            .field("pending", &self.pending.borrow().len())
            .finish()
    }
}

/// Clears the delivering flag on exit, including unwinding out of a callback.
struct DeliveryGuard<'a>(&'a Cell<bool>);

impl Drop for DeliveryGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Handle to a registered subscriber. Unsubscribes on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Unsubscribes now. Equivalent to dropping the handle.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn recorder<T: Clone + 'static>() -> (Rc<RefCell<Vec<T>>>, impl FnMut(&T) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |value: &T| sink.borrow_mut().push(value.clone()))
    }

    #[test]
    fn test_emit_reaches_all_subscribers_in_order() {
        let publisher = Publisher::<u32>::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&order);
        let _a = publisher.subscribe(move |v| first.borrow_mut().push(("a", *v)));
        let second = Rc::clone(&order);
        let _b = publisher.subscribe(move |v| second.borrow_mut().push(("b", *v)));

        publisher.emit(&1);
        publisher.emit(&2);

        assert_eq!(*order.borrow(), vec![("a", 1), ("b", 1), ("a", 2), ("b", 2)]);
    }

    #[test]
    fn test_no_replay_on_subscribe() {
        let publisher = Publisher::<u32>::new();
        publisher.emit(&7);

        let (seen, callback) = recorder();
        let _sub = publisher.subscribe(callback);
        assert!(seen.borrow().is_empty());

        publisher.emit(&8);
        assert_eq!(*seen.borrow(), vec![8]);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let publisher = Publisher::<u32>::new();
        let (seen, callback) = recorder();
        let sub = publisher.subscribe(callback);
        assert_eq!(publisher.subscriber_count(), 1);

        publisher.emit(&1);
        drop(sub);
        publisher.emit(&2);

        assert_eq!(*seen.borrow(), vec![1]);
        assert_eq!(publisher.subscriber_count(), 0);
    }

    #[test]
    fn test_cancel_unsubscribes() {
        let publisher = Publisher::<u32>::new();
        let (seen, callback) = recorder();
        let sub = publisher.subscribe(callback);
        sub.cancel();
        publisher.emit(&1);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_subscription_outliving_publisher_is_harmless() {
        let publisher = Publisher::<u32>::new();
        let sub = publisher.subscribe(|_| {});
        drop(publisher);
        drop(sub);
    }

    #[test]
    fn test_subscriber_removed_mid_emission_is_skipped() {
        let publisher = Publisher::<u32>::new();
        let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let slot = Rc::clone(&victim);
        let _killer = publisher.subscribe(move |_| {
            slot.borrow_mut().take();
        });
        let (seen, callback) = recorder();
        *victim.borrow_mut() = Some(publisher.subscribe(callback));

        publisher.emit(&1);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_callback_may_emit_on_other_publisher() {
        let upstream = Rc::new(Publisher::<u32>::new());
        let downstream = Rc::new(Publisher::<u32>::new());

        let forward = Rc::clone(&downstream);
        let _link = upstream.subscribe(move |v| forward.emit(&(v * 10)));
        let (seen, callback) = recorder();
        let _sink = downstream.subscribe(callback);

        upstream.emit(&3);
        assert_eq!(*seen.borrow(), vec![30]);
    }

    #[test]
    fn test_nested_emit_is_queued_behind_current_value() {
        let publisher = Rc::new(Publisher::<u32>::new());
        let order = Rc::new(RefCell::new(Vec::new()));

        let first_log = Rc::clone(&order);
        let again = Rc::downgrade(&publisher);
        let _first = publisher.subscribe(move |v| {
            first_log.borrow_mut().push(("first", *v));
            if *v == 1
                && let Some(publisher) = again.upgrade()
            {
                publisher.emit(&2);
            }
        });
        let second_log = Rc::clone(&order);
        let _second = publisher.subscribe(move |v| second_log.borrow_mut().push(("second", *v)));

        publisher.emit(&1);

        assert_eq!(
            *order.borrow(),
            vec![("first", 1), ("second", 1), ("first", 2), ("second", 2)]
        );
    }

    #[test]
    fn test_publisher_usable_after_panicking_subscriber() {
        let publisher = Publisher::<u32>::new();
        let panicky = publisher.subscribe(|v| assert!(*v != 1, "boom"));
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| publisher.emit(&1)));
        assert!(outcome.is_err());
        drop(panicky);

        let (seen, callback) = recorder();
        let _sub = publisher.subscribe(callback);
        publisher.emit(&2);
        assert_eq!(*seen.borrow(), vec![2]);
    }
}
