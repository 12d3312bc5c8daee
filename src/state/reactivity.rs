// ============================================================================
// REACTIVITY - Subscribers notified after state changes
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Raw id for callers that cannot hold the Rust type (the JS side)
impl From<SubscriptionId> for u64 {
    fn from(id: SubscriptionId) -> Self {
        id.0
    }
}

impl From<u64> for SubscriptionId {
    fn from(raw: u64) -> Self {
        SubscriptionId(raw)
    }
}

/// List of change callbacks. Clones share the same list.
#[derive(Clone, Default)]
pub struct ChangeNotifier {
    subscribers: Rc<RefCell<Vec<(SubscriptionId, Callback)>>>,
    next_id: Rc<Cell<u64>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback; the id removes it again
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    /// Returns false if the id was not subscribed
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(sub_id, _)| *sub_id != id);
        subscribers.len() != before
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Run every callback once
    pub fn notify(&self) {
        // Callbacks may subscribe or unsubscribe, so run them outside the borrow
        let callbacks: Vec<Callback> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();

        for callback in callbacks {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifies_every_subscriber_until_unsubscribed() {
        let notifier = ChangeNotifier::new();
        let hits = Rc::new(Cell::new(0));

        let first = {
            let hits = Rc::clone(&hits);
            notifier.subscribe(move || hits.set(hits.get() + 1))
        };
        {
            let hits = Rc::clone(&hits);
            notifier.subscribe(move || hits.set(hits.get() + 10));
        }

        notifier.notify();
        assert_eq!(hits.get(), 11);

        assert!(notifier.unsubscribe(first));
        assert!(!notifier.unsubscribe(first));
        notifier.notify();
        assert_eq!(hits.get(), 21);
    }

    #[test]
    fn raw_id_unsubscribes_the_same_callback() {
        let notifier = ChangeNotifier::new();
        notifier.subscribe(|| {});
        let raw: u64 = notifier.subscribe(|| {}).into();
        assert_eq!(raw, 1);

        assert!(notifier.unsubscribe(SubscriptionId::from(raw)));
        assert_eq!(notifier.subscriber_count(), 1);
        assert!(!notifier.unsubscribe(SubscriptionId::from(raw)));
    }

    #[test]
    fn callback_may_subscribe_during_notify() {
        let notifier = ChangeNotifier::new();
        let inner = notifier.clone();
        notifier.subscribe(move || {
            inner.subscribe(|| {});
        });

        notifier.notify();
        assert_eq!(notifier.subscriber_count(), 2);
    }
}
