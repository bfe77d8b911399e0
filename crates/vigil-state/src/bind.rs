//! Listener bindings: subscriptions with guaranteed release
//!
//! All host-event wiring is isolated here so every tracker stays a pure
//! derivation from the events it is fed. A [`Subscription`] releases
//! its handler exactly once - on drop or on explicit unsubscribe - and
//! a handler removed during a dispatch pass is not invoked later in
//! that pass, so no tracker is ever touched after teardown.

use std::collections::BTreeMap;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use vigil_core::{EventKind, UiEvent};

type Handler = Box<dyn FnMut(&UiEvent) + Send>;

/// Registry identifier for one subscription
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Entry {
    kinds: Vec<EventKind>,
    handler: Arc<Mutex<Handler>>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    // BTreeMap keeps dispatch in registration order
    entries: BTreeMap<u64, Entry>,
}

/// Dispatches host events to subscribed handlers
#[derive(Clone, Default)]
pub struct EventHub {
    registry: Arc<Mutex<Registry>>,
}

impl EventHub {
    pub fn new() -> Self {
        EventHub::default()
    }

    /// Register a handler for the given event kinds
    pub fn subscribe(
        &self,
        kinds: &[EventKind],
        handler: impl FnMut(&UiEvent) + Send + 'static,
    ) -> Subscription {
        let mut registry = self.registry.lock();
        registry.next_id += 1;
        let id = registry.next_id;

        registry.entries.insert(
            id,
            Entry {
                kinds: kinds.to_vec(),
                handler: Arc::new(Mutex::new(Box::new(handler))),
            },
        );
        tracing::debug!(id, "subscription registered");

        Subscription {
            id: SubscriptionId(id),
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Deliver one event to every live subscriber of its kind, in
    /// registration order
    pub fn emit(&self, event: &UiEvent) {
        let kind = event.kind();
        let matched: Vec<(u64, Arc<Mutex<Handler>>)> = {
            let registry = self.registry.lock();
            registry
                .entries
                .iter()
                .filter(|(_, entry)| entry.kinds.contains(&kind))
                .map(|(&id, entry)| (id, Arc::clone(&entry.handler)))
                .collect()
        };

        for (id, handler) in matched {
            // A handler unsubscribed earlier in this pass must not fire.
            if !self.registry.lock().entries.contains_key(&id) {
                continue;
            }
            (handler.lock())(event);
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.registry.lock().entries.len()
    }
}

/// Scoped handle to one registered handler. Dropping it releases the
/// handler; release happens exactly once on every exit path.
pub struct Subscription {
    id: SubscriptionId,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Release explicitly; equivalent to dropping the handle
    pub fn unsubscribe(self) {}

    fn release(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if registry.lock().entries.remove(&self.id.0).is_some() {
                tracing::debug!(id = self.id.0, "subscription released");
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

/// One tracker bound to the hub, its snapshot shared between the
/// routing handler and the consumer
pub struct Binding<T> {
    state: Arc<Mutex<T>>,
    subscription: Subscription,
}

impl<T: Send + 'static> Binding<T> {
    /// Bind a tracker: `route` folds each delivered event into it
    pub fn bind(
        hub: &EventHub,
        tracker: T,
        kinds: &[EventKind],
        mut route: impl FnMut(&mut T, &UiEvent) + Send + 'static,
    ) -> Self {
        let state = Arc::new(Mutex::new(tracker));
        let shared = Arc::clone(&state);
        let subscription = hub.subscribe(kinds, move |event| {
            route(&mut *shared.lock(), event);
        });

        Binding {
            state,
            subscription,
        }
    }

    /// Read the current snapshot
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&*self.state.lock())
    }

    /// Apply a consumer-driven transition outside the event path
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut *self.state.lock())
    }

    pub fn subscription_id(&self) -> SubscriptionId {
        self.subscription.id()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_subscribe_filters_by_kind() {
        let hub = EventHub::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let _sub = hub.subscribe(&[EventKind::Scroll], move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        hub.emit(&UiEvent::Scroll { y: 1.0 });
        hub.emit(&UiEvent::Tick);
        hub.emit(&UiEvent::Scroll { y: 2.0 });

        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_drop_releases_exactly_once() {
        let hub = EventHub::new();
        let sub = hub.subscribe(&[EventKind::Tick], |_| {});
        assert_eq!(hub.subscriber_count(), 1);

        drop(sub);
        assert_eq!(hub.subscriber_count(), 0);

        // A second release attempt has nothing left to remove.
        hub.emit(&UiEvent::Tick);
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[test]
    fn test_no_delivery_after_unsubscribe() {
        let hub = EventHub::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let sub = hub.subscribe(&[EventKind::Tick], move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        hub.emit(&UiEvent::Tick);
        sub.unsubscribe();
        hub.emit(&UiEvent::Tick);
        hub.emit(&UiEvent::Tick);

        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handler_removed_mid_pass_does_not_fire() {
        let hub = EventHub::new();
        let hits = Arc::new(AtomicUsize::new(0));

        // The second handler tears the first one down mid-pass.
        let victim = hub.subscribe(&[EventKind::Tick], {
            let counter = Arc::clone(&hits);
            move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });
        let victim_slot = Arc::new(Mutex::new(Some(victim)));

        let assassin_slot = Arc::clone(&victim_slot);
        let _assassin = hub.subscribe(&[EventKind::Tick], move |_| {
            assassin_slot.lock().take();
        });

        hub.emit(&UiEvent::Tick);

        // The victim fired once (it dispatched before the assassin).
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        hub.emit(&UiEvent::Tick);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(hub.subscriber_count(), 1);
    }

    #[test]
    fn test_victim_after_assassin_never_fires() {
        let hub = EventHub::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let victim_slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

        let assassin_slot = Arc::clone(&victim_slot);
        let _assassin = hub.subscribe(&[EventKind::Tick], move |_| {
            assassin_slot.lock().take();
        });

        let counter = Arc::clone(&hits);
        let victim = hub.subscribe(&[EventKind::Tick], move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        *victim_slot.lock() = Some(victim);

        hub.emit(&UiEvent::Tick);

        // Removed by the assassin before its turn in the same pass.
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_release_after_hub_dropped_is_noop() {
        let hub = EventHub::new();
        let sub = hub.subscribe(&[EventKind::Tick], |_| {});
        drop(hub);
        drop(sub);
    }

    #[test]
    fn test_binding_reads_routed_state() {
        let hub = EventHub::new();
        let binding = Binding::bind(&hub, 0u64, &[EventKind::Tick], |count, _| *count += 1);

        hub.emit(&UiEvent::Tick);
        hub.emit(&UiEvent::Tick);

        assert_eq!(binding.read(|count| *count), 2);
    }

    #[test]
    fn test_binding_drop_stops_routing() {
        let hub = EventHub::new();
        let binding = Binding::bind(&hub, 0u64, &[EventKind::Tick], |count, _| *count += 1);

        hub.emit(&UiEvent::Tick);
        drop(binding);
        hub.emit(&UiEvent::Tick);

        assert_eq!(hub.subscriber_count(), 0);
    }
}
