//! Kazoo Playback
//!
//! The queue and playback coordinator. The coordinator owns the decision
//! of what plays next: chat commands and the HTTP facade only mutate the
//! persisted queue and ask the coordinator to act, while a fixed-interval
//! poll loop advances the queue whenever the head changes underneath it.
//!
//! Voice I/O sits behind the [`Transport`] trait so the coordinator can be
//! tested without a Discord connection.

mod coordinator;
mod transport;

pub use coordinator::{Coordinator, SkipOutcome};
pub use transport::{PlaybackSource, Transport, TransportEvent};
