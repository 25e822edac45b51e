//! Event bus routing helpers.

use crate::error::{EventBusError, EventBusResult};
use crate::payloads::{AppEvent, DEFAULT_REPLAY_CAPACITY, EventEnvelope, EventId};
use chrono::Utc;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::broadcast::{self, Sender};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;

/// Shared event bus built on top of `tokio::broadcast`.
///
/// Every published event receives a sequential id and is kept in a bounded
/// replay ring so late subscribers can catch up from a known id.
#[derive(Clone)]
pub struct EventBus {
    sender: Sender<EventEnvelope>,
    replay: Arc<Mutex<VecDeque<EventEnvelope>>>,
    replay_capacity: usize,
    next_id: Arc<Mutex<EventId>>,
}

impl EventBus {
    /// Construct a bus with a custom replay capacity.
    ///
    /// # Panics
    ///
    /// Panics if `replay_capacity` is zero.
    #[must_use]
    pub fn with_capacity(replay_capacity: usize) -> Self {
        assert!(replay_capacity > 0, "event bus capacity must be positive");
        let (sender, _) = broadcast::channel(replay_capacity);
        Self {
            sender,
            replay: Arc::new(Mutex::new(VecDeque::with_capacity(replay_capacity))),
            replay_capacity,
            next_id: Arc::new(Mutex::new(1)),
        }
    }

    /// Construct a bus with the default replay capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_REPLAY_CAPACITY)
    }

    /// Subscribe to the bus, replaying buffered events newer than `last_event_id`.
    #[must_use]
    pub fn subscribe(&self, last_event_id: Option<EventId>) -> Subscription {
        let receiver = self.sender.subscribe();
        let backlog = last_event_id
            .map(|last| self.backlog_since(last).into_iter().collect())
            .unwrap_or_default();
        Subscription {
            backlog,
            stream: BroadcastStream::new(receiver),
        }
    }

    /// Publish an event to all subscribers and return its id.
    ///
    /// Delivery is fire-and-forget: the event is recorded in the replay ring
    /// even when nobody is listening.
    pub fn publish(&self, event: AppEvent) -> EventId {
        let envelope = self.record(event);
        let id = envelope.id;
        let _ = self.sender.send(envelope);
        id
    }

    /// Publish an event, reporting when no subscriber received it.
    ///
    /// # Errors
    ///
    /// Returns [`EventBusError::NoSubscribers`] when the broadcast channel has
    /// no live receivers. The event is still kept for replay.
    pub fn try_publish(&self, event: AppEvent) -> EventBusResult<EventId> {
        let envelope = self.record(event);
        let id = envelope.id;
        let kind = envelope.event.kind();
        self.sender
            .send(envelope)
            .map(|_| id)
            .map_err(|_| EventBusError::NoSubscribers {
                event_id: id,
                event_kind: kind,
            })
    }

    /// Last event id observed in the replay buffer.
    #[must_use]
    pub fn last_event_id(&self) -> Option<EventId> {
        self.lock_replay().back().map(|env| env.id)
    }

    /// Collect a backlog of events emitted after the specified id.
    #[must_use]
    pub fn backlog_since(&self, id: EventId) -> Vec<EventEnvelope> {
        let replay = self.lock_replay();
        replay.iter().filter(|env| env.id > id).cloned().collect()
    }

    fn record(&self, event: AppEvent) -> EventEnvelope {
        let mut next = self
            .next_id
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let id = *next;
        *next = next.saturating_add(1);
        drop(next);

        let envelope = EventEnvelope {
            id,
            timestamp: Utc::now(),
            event,
        };
        let mut replay = self.lock_replay();
        if replay.len() == self.replay_capacity {
            let _ = replay.pop_front();
        }
        replay.push_back(envelope.clone());
        envelope
    }

    fn lock_replay(&self) -> MutexGuard<'_, VecDeque<EventEnvelope>> {
        self.replay
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for EventBus {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.replay, &other.replay)
    }
}

/// Subscriber handle that yields the replay backlog before live events.
pub struct Subscription {
    backlog: VecDeque<EventEnvelope>,
    stream: BroadcastStream<EventEnvelope>,
}

impl Subscription {
    /// Receive the next event, or `None` once the bus has been dropped.
    ///
    /// Lagged receivers skip the overwritten events and keep going.
    pub async fn next(&mut self) -> Option<EventEnvelope> {
        if let Some(envelope) = self.backlog.pop_front() {
            return Some(envelope);
        }
        while let Some(item) = self.stream.next().await {
            if let Ok(envelope) = item {
                return Some(envelope);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payloads::ModalRequest;

    #[tokio::test]
    async fn publish_and_replay_from_id() {
        let bus = EventBus::with_capacity(4);
        let first = bus.publish(AppEvent::ShowDashSearch);
        let second = bus.publish(AppEvent::ToggleKioskMode);

        assert_eq!(bus.last_event_id(), Some(second));
        let backlog = bus.backlog_since(first);
        assert_eq!(backlog.len(), 1);
        assert_eq!(backlog[0].id, second);
    }

    #[tokio::test]
    async fn subscribe_streams_live_events() {
        let bus = EventBus::new();
        let mut subscription = bus.subscribe(None);
        let id = bus.publish(AppEvent::ShowModal {
            modal: ModalRequest::ShareDashboard {
                dashboard_uid: "abc".into(),
                tab_index: 0,
            },
        });
        let envelope = subscription.next().await.expect("event");
        assert_eq!(envelope.id, id);
        assert!(matches!(envelope.event, AppEvent::ShowModal { .. }));
    }

    #[tokio::test]
    async fn subscribe_replays_backlog_before_live_events() {
        let bus = EventBus::with_capacity(8);
        let first = bus.publish(AppEvent::ShowDashSearch);
        let second = bus.publish(AppEvent::ToggleKioskMode);

        let mut subscription = bus.subscribe(Some(first));
        let third = bus.publish(AppEvent::HideModal);

        assert_eq!(subscription.next().await.map(|env| env.id), Some(second));
        assert_eq!(subscription.next().await.map(|env| env.id), Some(third));
    }

    #[test]
    fn replay_ring_drops_oldest_when_full() {
        let bus = EventBus::with_capacity(2);
        let _ = bus.publish(AppEvent::ShowDashSearch);
        let second = bus.publish(AppEvent::ToggleKioskMode);
        let third = bus.publish(AppEvent::HideModal);

        let ids: Vec<_> = bus.backlog_since(0).iter().map(|env| env.id).collect();
        assert_eq!(ids, vec![second, third]);
    }

    #[test]
    fn try_publish_reports_missing_subscribers() {
        let bus = EventBus::new();
        let err = bus
            .try_publish(AppEvent::ToggleKioskMode)
            .expect_err("no subscribers");
        assert_eq!(err.event_kind(), "toggle_kiosk_mode");
        assert_eq!(bus.last_event_id(), Some(err.event_id()));

        let _subscription = bus.subscribe(None);
        assert!(bus.try_publish(AppEvent::ShowDashSearch).is_ok());
    }

    #[test]
    fn clones_share_identity() {
        let bus = EventBus::new();
        let clone = bus.clone();
        assert!(bus == clone);
        assert!(bus != EventBus::new());
    }
}
