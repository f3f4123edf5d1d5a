//! ClaimWatcher processor.
//!
//! The ClaimWatcher is responsible for:
//! - Polling the chain head of one network on a fixed interval
//! - Logging the current block whenever the head advances
//! - Fetching `ChipClaimSuccess` logs for the new blocks
//! - Emitting one `ClaimEvent` per log, in log order
//!
//! It starts at the head observed on its first poll: claims mined while the
//! process was down are not replayed.
//!
//! Shutdown is checked between polls only. A poll already in flight runs to
//! completion first, bounded by the HTTP client timeout.

use super::chain_reader::{ChainError, ChainReader};
use crate::events::{ClaimEventSender, NetworkTarget};
use crate::utils::block_range::block_ranges;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info};

/// Errors that can occur during one poll.
#[derive(Debug, Error)]
pub enum WatchError {
    /// Chain read error; the poll is retried from the same cursor
    #[error("chain error: {0}")]
    Chain(#[from] ChainError),

    /// The announcer side of the channel is gone
    #[error("claim event channel closed")]
    ChannelClosed,
}

/// Polls one network for claim events.
pub struct ClaimWatcher<C: ChainReader> {
    reader: C,
    network: NetworkTarget,
    poll_interval: Duration,
    max_block_range: u64,
    event_tx: ClaimEventSender,
    /// Last block whose logs have been fetched. `None` until the first poll.
    cursor: Option<u64>,
}

impl<C: ChainReader> ClaimWatcher<C> {
    /// Create a new ClaimWatcher.
    pub fn new(
        reader: C,
        network: NetworkTarget,
        poll_interval: Duration,
        max_block_range: u64,
        event_tx: ClaimEventSender,
    ) -> Self {
        Self {
            reader,
            network,
            poll_interval,
            max_block_range,
            event_tx,
            cursor: None,
        }
    }

    /// Run the ClaimWatcher until shutdown is signaled or the channel closes.
    pub async fn run(mut self, mut shutdown_rx: watch::Receiver<bool>) {
        info!(network = %self.network, "ClaimWatcher started");

        let mut ticker = tokio::time::interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;

                // Check for shutdown
                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        info!(network = %self.network, "ClaimWatcher shutting down");
                        break;
                    }
                }

                _ = ticker.tick() => {
                    match self.poll().await {
                        Ok(emitted) => {
                            if emitted > 0 {
                                debug!(network = %self.network, emitted, "Emitted claim events");
                            }
                        }
                        Err(WatchError::ChannelClosed) => {
                            info!(network = %self.network, "ClaimEvent channel closed");
                            break;
                        }
                        Err(e) => {
                            error!(network = %self.network, error = %e, "Poll failed");
                        }
                    }
                }
            }
        }

        info!(network = %self.network, "ClaimWatcher shutdown complete");
    }

    /// Poll once: read the head and emit claims mined since the cursor.
    ///
    /// Returns the number of events emitted. The cursor advances chunk by
    /// chunk, so a failure part-way resumes at the failed chunk.
    pub async fn poll(&mut self) -> Result<usize, WatchError> {
        let head = self.reader.latest_block().await?;

        let Some(last) = self.cursor else {
            info!(network = %self.network, block_number = head, "Current block");
            self.cursor = Some(head);
            return Ok(0);
        };
        if head <= last {
            return Ok(0);
        }

        info!(network = %self.network, block_number = head, "Current block");

        let mut emitted = 0;
        for (from_block, to_block) in block_ranges(last + 1, head, self.max_block_range) {
            let events = self.reader.claim_events(from_block, to_block).await?;
            for event in events {
                debug!(
                    network = %self.network,
                    chip_id = event.chip_id,
                    transaction_hash = %event.transaction_hash,
                    "Claim observed"
                );
                self.event_tx
                    .send(event)
                    .await
                    .map_err(|_| WatchError::ChannelClosed)?;
                emitted += 1;
            }
            self.cursor = Some(to_block);
        }

        Ok(emitted)
    }

    /// Last block whose logs have been fetched.
    pub fn cursor(&self) -> Option<u64> {
        self.cursor
    }
}
