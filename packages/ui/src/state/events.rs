//! Identity-change notification bus.
//!
//! Anything that changes who is signed in (login, registration, logout, the
//! initial session fetch on another tab of the flow) publishes a
//! [`SessionEvent`] here; the auth provider holds a subscription and commits
//! every event to the session store. Subscribers hold a
//! [`SessionSubscription`] handle — dropping it deregisters the sender, so a
//! torn-down view can never receive another notification.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use api::UserInfo;
use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures::StreamExt;

/// One identity-change notification. Carries the full new identity (or its
/// absence), not a delta.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionEvent {
    pub identity: Option<UserInfo>,
}

type Registry = Arc<Mutex<Vec<(u64, UnboundedSender<SessionEvent>)>>>;

/// Cloneable fan-out bus for [`SessionEvent`]s.
#[derive(Clone, Default)]
pub struct SessionEvents {
    subscribers: Registry,
    next_id: Arc<AtomicU64>,
}

impl SessionEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber. The returned handle must be kept alive for as
    /// long as notifications are wanted; dropping it releases the slot.
    pub fn subscribe(&self) -> SessionSubscription {
        let (tx, rx) = unbounded();
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.subscribers.lock().unwrap().push((id, tx));
        SessionSubscription {
            id,
            rx,
            registry: self.subscribers.clone(),
        }
    }

    /// Deliver an event to every live subscriber, pruning any whose receiver
    /// is already gone.
    pub fn publish(&self, identity: Option<UserInfo>) {
        let event = SessionEvent { identity };
        self.subscribers
            .lock()
            .unwrap()
            .retain(|(_, tx)| tx.unbounded_send(event.clone()).is_ok());
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.subscribers.lock().unwrap().len()
    }
}

/// A live subscription to the bus. Deregisters itself on drop.
pub struct SessionSubscription {
    id: u64,
    rx: UnboundedReceiver<SessionEvent>,
    registry: Registry,
}

impl SessionSubscription {
    /// Wait for the next notification. Returns `None` once the bus side of
    /// this subscription is gone.
    pub async fn recv(&mut self) -> Option<SessionEvent> {
        self.rx.next().await
    }

    /// Non-blocking poll, for synchronous consumers and tests.
    pub fn try_recv(&mut self) -> Option<SessionEvent> {
        self.rx.try_next().ok().flatten()
    }
}

impl Drop for SessionSubscription {
    fn drop(&mut self) {
        self.registry.lock().unwrap().retain(|(id, _)| *id != self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn someone() -> UserInfo {
        UserInfo {
            id: "u-1".into(),
            email: "editor@archive.com".into(),
        }
    }

    #[test]
    fn publish_reaches_every_subscriber() {
        let bus = SessionEvents::new();
        let mut a = bus.subscribe();
        let mut b = bus.subscribe();

        bus.publish(Some(someone()));

        assert_eq!(a.try_recv().unwrap().identity, Some(someone()));
        assert_eq!(b.try_recv().unwrap().identity, Some(someone()));
        assert!(a.try_recv().is_none());
    }

    #[test]
    fn sign_out_events_carry_absent_identity() {
        let bus = SessionEvents::new();
        let mut sub = bus.subscribe();

        bus.publish(None);

        let event = sub.try_recv().unwrap();
        assert!(event.identity.is_none());
    }

    #[test]
    fn dropping_the_handle_releases_the_slot() {
        let bus = SessionEvents::new();
        let sub = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 1);

        drop(sub);
        assert_eq!(bus.subscriber_count(), 0);

        // Publishing after teardown delivers to nobody and does not panic.
        bus.publish(Some(someone()));
    }

    #[test]
    fn events_queue_until_received() {
        let bus = SessionEvents::new();
        let mut sub = bus.subscribe();

        bus.publish(Some(someone()));
        bus.publish(None);

        assert_eq!(sub.try_recv().unwrap().identity, Some(someone()));
        assert_eq!(sub.try_recv().unwrap().identity, None);
        assert!(sub.try_recv().is_none());
    }

    #[test]
    fn recv_is_awaitable() {
        futures::executor::block_on(async {
            let bus = SessionEvents::new();
            let mut sub = bus.subscribe();
            bus.publish(Some(someone()));
            let event = sub.recv().await.unwrap();
            assert_eq!(event.identity, Some(someone()));
        });
    }
}
