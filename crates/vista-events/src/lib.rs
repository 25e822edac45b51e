//! Typed UI event bus for the Vista front-end.
//!
//! Surfaces publish [`AppEvent`] values instead of stringly-named global
//! events, so the set of events a component can raise is statically known.
//! Internally the bus uses `tokio::broadcast` with a bounded replay ring;
//! when the ring overflows the oldest events are dropped.

pub mod error;
pub mod payloads;
pub mod routing;
pub mod topics;

pub use error::{EventBusError, EventBusResult};
pub use payloads::{AppEvent, DEFAULT_REPLAY_CAPACITY, EventEnvelope, EventId, ModalRequest};
pub use routing::{EventBus, Subscription};
pub use topics::{event_kind, is_overlay_event};
