//! Shared "add form visible" flag with synchronous fan-out
//!
//! A `VisibilityBroadcaster` holds a single boolean slot. Clones share the
//! slot, so the header and the list view each get a handle to the same flag.
//!
//! # Invariants
//!
//! 1. A new subscriber is invoked once with the current value before
//!    `subscribe` returns.
//! 2. `toggle` and `reset` notify every subscriber exactly once, in
//!    registration order, even when the value did not change.
//! 3. A `toggle` or `reset` issued by an observer is delivered after the
//!    current round finishes, so every subscriber sees values in the order
//!    they were set and ends on the current value.
//! 4. Observers added or dropped during a round do not change that round.
//!    Dropping a [`Subscription`] removes its observer before the next one.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use tracing::debug;

type Observer = Rc<dyn Fn(bool)>;

struct Slot {
    value: bool,
    next_id: usize,
    observers: Vec<(usize, Observer)>,
    publishing: bool,
    pending: VecDeque<bool>,
}

#[derive(Clone)]
pub struct VisibilityBroadcaster {
    slot: Rc<RefCell<Slot>>,
}

impl Default for VisibilityBroadcaster {
    fn default() -> Self {
        Self::new(false)
    }
}

impl VisibilityBroadcaster {
    pub fn new(initial: bool) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Slot {
                value: initial,
                next_id: 0,
                observers: Vec::new(),
                publishing: false,
                pending: VecDeque::new(),
            })),
        }
    }

    pub fn get(&self) -> bool {
        self.slot.borrow().value
    }

    /// Flip the flag and notify subscribers with the new value
    pub fn toggle(&self) {
        let value = {
            let mut slot = self.slot.borrow_mut();
            slot.value = !slot.value;
            slot.value
        };
        self.publish(value);
    }

    /// Force the flag to `false` and notify subscribers
    pub fn reset(&self) {
        self.slot.borrow_mut().value = false;
        self.publish(false);
    }

    /// Register `observer`, replaying the current value to it immediately
    pub fn subscribe(&self, observer: impl Fn(bool) + 'static) -> Subscription {
        let observer: Observer = Rc::new(observer);
        let (id, value) = {
            let mut slot = self.slot.borrow_mut();
            let id = slot.next_id;
            slot.next_id += 1;
            slot.observers.push((id, observer.clone()));
            (id, slot.value)
        };
        observer(value);

        Subscription {
            slot: Rc::downgrade(&self.slot),
            id,
        }
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.slot.borrow().observers.len()
    }

    fn publish(&self, value: bool) {
        {
            let mut slot = self.slot.borrow_mut();
            if slot.publishing {
                slot.pending.push_back(value);
                return;
            }
            slot.publishing = true;
        }

        let mut next = Some(value);
        while let Some(value) = next {
            // No borrow is held across callbacks, so observers may
            // subscribe, unsubscribe or set the flag.
            let observers: Vec<Observer> = self
                .slot
                .borrow()
                .observers
                .iter()
                .map(|(_, observer)| observer.clone())
                .collect();
            debug!(value, subscribers = observers.len(), "add form visibility");
            for observer in observers {
                observer(value);
            }

            let mut slot = self.slot.borrow_mut();
            next = slot.pending.pop_front();
            if next.is_none() {
                slot.publishing = false;
            }
        }
    }
}

/// Handle returned by [`VisibilityBroadcaster::subscribe`].
///
/// The observer stays registered until this handle is dropped.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    slot: Weak<RefCell<Slot>>,
    id: usize,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(slot) = self.slot.upgrade() {
            slot.borrow_mut().observers.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn recorder() -> (Rc<RefCell<Vec<bool>>>, impl Fn(bool) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |value| sink.borrow_mut().push(value))
    }

    #[test]
    fn subscribe_replays_current_value() {
        let broadcaster = VisibilityBroadcaster::default();
        let (seen, observer) = recorder();
        let _sub = broadcaster.subscribe(observer);
        assert_eq!(*seen.borrow(), vec![false]);

        broadcaster.toggle();
        assert_eq!(*seen.borrow(), vec![false, true]);
    }

    #[test]
    fn toggle_twice_restores_and_notifies_each_time() {
        let broadcaster = VisibilityBroadcaster::default();
        let (a, obs_a) = recorder();
        let (b, obs_b) = recorder();
        let _sa = broadcaster.subscribe(obs_a);
        let _sb = broadcaster.subscribe(obs_b);

        broadcaster.toggle();
        broadcaster.toggle();
        assert!(!broadcaster.get());
        assert_eq!(*a.borrow(), vec![false, true, false]);
        assert_eq!(*b.borrow(), vec![false, true, false]);
    }

    #[test]
    fn reset_notifies_even_when_already_false() {
        let broadcaster = VisibilityBroadcaster::default();
        let (seen, observer) = recorder();
        let _sub = broadcaster.subscribe(observer);
        broadcaster.reset();
        assert_eq!(*seen.borrow(), vec![false, false]);

        broadcaster.toggle();
        broadcaster.reset();
        assert_eq!(*seen.borrow(), vec![false, false, true, false]);
    }

    #[test]
    fn notifies_in_registration_order() {
        let broadcaster = VisibilityBroadcaster::default();
        let order = Rc::new(RefCell::new(Vec::new()));
        let subs: Vec<Subscription> = (0..3)
            .map(|n| {
                let order = order.clone();
                broadcaster.subscribe(move |_| order.borrow_mut().push(n))
            })
            .collect();
        order.borrow_mut().clear();

        broadcaster.toggle();
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
        drop(subs);
    }

    #[test]
    fn dropped_subscription_stops_notifications() {
        let broadcaster = VisibilityBroadcaster::default();
        let (seen, observer) = recorder();
        let sub = broadcaster.subscribe(observer);
        assert_eq!(broadcaster.subscriber_count(), 1);

        drop(sub);
        assert_eq!(broadcaster.subscriber_count(), 0);
        broadcaster.toggle();
        assert_eq!(*seen.borrow(), vec![false]);
    }

    #[test]
    fn clones_share_the_flag() {
        let header = VisibilityBroadcaster::default();
        let list = header.clone();
        let (seen, observer) = recorder();
        let _sub = list.subscribe(observer);

        header.toggle();
        assert!(list.get());
        assert_eq!(*seen.borrow(), vec![false, true]);
    }

    #[test]
    fn reset_from_observer_reaches_later_subscribers_in_order() {
        let broadcaster = VisibilityBroadcaster::default();
        let handle = broadcaster.clone();
        let _closer = broadcaster.subscribe(move |visible| {
            if visible {
                handle.reset();
            }
        });
        let (seen, observer) = recorder();
        let _later = broadcaster.subscribe(observer);

        broadcaster.toggle();
        assert!(!broadcaster.get());
        assert_eq!(*seen.borrow(), vec![false, true, false]);
        assert_eq!(seen.borrow().last().copied(), Some(broadcaster.get()));
    }

    #[test]
    fn header_mirror_matches_flag_after_nested_reset() {
        let broadcaster = VisibilityBroadcaster::default();
        let handle = broadcaster.clone();
        let _closer = broadcaster.subscribe(move |visible| {
            if visible {
                handle.reset();
            }
        });
        let header = crate::controller::HeaderBar::new(broadcaster.clone());

        broadcaster.toggle();
        assert_eq!(header.is_add_form_visible(), broadcaster.get());
    }

    #[test]
    fn observer_dropped_mid_round_still_sees_that_round() {
        let broadcaster = VisibilityBroadcaster::default();
        let victim_sub: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let holder = victim_sub.clone();
        let _dropper = broadcaster.subscribe(move |visible| {
            if visible {
                holder.borrow_mut().take();
            }
        });
        let (seen, observer) = recorder();
        *victim_sub.borrow_mut() = Some(broadcaster.subscribe(observer));

        broadcaster.toggle();
        assert_eq!(*seen.borrow(), vec![false, true]);
        assert_eq!(broadcaster.subscriber_count(), 1);

        broadcaster.toggle();
        assert_eq!(*seen.borrow(), vec![false, true]);
    }

    #[test]
    fn observer_added_mid_round_only_gets_replay() {
        let broadcaster = VisibilityBroadcaster::default();
        let added: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let (seen, observer) = recorder();
        let observer = Rc::new(observer);

        let handle = broadcaster.clone();
        let slot = added.clone();
        let _adder = broadcaster.subscribe(move |visible| {
            if visible && slot.borrow().is_none() {
                let observer = observer.clone();
                *slot.borrow_mut() = Some(handle.subscribe(move |value| observer(value)));
            }
        });

        broadcaster.toggle();
        assert_eq!(*seen.borrow(), vec![true]);

        broadcaster.toggle();
        assert_eq!(*seen.borrow(), vec![true, false]);
    }
}
