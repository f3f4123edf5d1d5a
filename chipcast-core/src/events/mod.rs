//! Claim events and the channels that carry them.
//!
//! # Event Flow
//!
//! 1. `ClaimWatcher` polls the chain and emits `ClaimEvent`
//! 2. `ClaimAnnouncer` receives `ClaimEvent` and publishes a status update
//!
//! Events are ephemeral: nothing is stored and nothing is deduplicated.

pub mod channels;
pub mod types;

pub use channels::{
    ClaimEventReceiver, ClaimEventSender, DEFAULT_CHANNEL_BUFFER, claim_event_channel,
};

pub use types::{ClaimEvent, NetworkTarget};
