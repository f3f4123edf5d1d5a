//! Event channel factories and handles.

use super::types::ClaimEvent;
use tokio::sync::mpsc;

/// Default buffer size for event channels.
///
/// This provides enough buffer to handle bursts while keeping memory bounded.
pub const DEFAULT_CHANNEL_BUFFER: usize = 256;

/// Sender handle for ClaimEvent events.
pub type ClaimEventSender = mpsc::Sender<ClaimEvent>;
/// Receiver handle for ClaimEvent events.
pub type ClaimEventReceiver = mpsc::Receiver<ClaimEvent>;

/// Create a new ClaimEvent channel.
///
/// Each network pipeline owns exactly one channel.
pub fn claim_event_channel() -> (ClaimEventSender, ClaimEventReceiver) {
    mpsc::channel(DEFAULT_CHANNEL_BUFFER)
}
