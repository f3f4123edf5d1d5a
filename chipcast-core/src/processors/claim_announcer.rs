//! ClaimAnnouncer processor.
//!
//! The ClaimAnnouncer is responsible for:
//! - Receiving `ClaimEvent` events of one network
//! - Reading `numChipsMinted` and `numChipsClaimed` from the contract
//! - Composing the status text
//! - Publishing it and logging the outcome
//!
//! Every failure is scoped to its event: it is logged and the next event is
//! handled as usual. Nothing is retried.
//!
//! Events are handled one at a time, but counters are read at the latest
//! block rather than at the event's block. Two claims mined close together
//! can therefore both be announced with the later counters.

use super::chain_reader::{ChainError, ChainReader};
use super::status_publisher::{PublishError, PublishedStatus, StatusPublisher};
use crate::composer::{StatusComposer, SymbolSource};
use crate::entities::{SupplyCounters, SupplyError};
use crate::events::{ClaimEvent, ClaimEventReceiver, NetworkTarget};
use kanau::processor::Processor;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, error, info};

/// Errors that can occur while announcing one claim.
#[derive(Debug, Error)]
pub enum AnnounceError {
    /// Counter read failed
    #[error("failed to read supply counters: {0}")]
    Chain(#[from] ChainError),

    /// Counters violate `claimed <= minted`
    #[error("inconsistent supply counters: {0}")]
    Supply(#[from] SupplyError),

    /// Posting failed; the composed text is dropped
    #[error("failed to publish status: {0}")]
    Publish(#[from] PublishError),
}

/// Turns claim events of one network into published status updates.
pub struct ClaimAnnouncer<C, P, S> {
    reader: C,
    publisher: P,
    composer: StatusComposer,
    symbols: S,
    network: NetworkTarget,
}

impl<C, P, S> ClaimAnnouncer<C, P, S>
where
    C: ChainReader,
    P: StatusPublisher,
    S: SymbolSource + Clone + Send + Sync,
{
    /// Create a new ClaimAnnouncer.
    ///
    /// # Arguments
    ///
    /// * `reader` - Source of the supply counters
    /// * `publisher` - Where composed statuses go
    /// * `composer` - Per-network static message inputs
    /// * `symbols` - Symbol source for the default commentary, cloned per event
    /// * `network` - Network label for logs
    pub fn new(
        reader: C,
        publisher: P,
        composer: StatusComposer,
        symbols: S,
        network: NetworkTarget,
    ) -> Self {
        Self {
            reader,
            publisher,
            composer,
            symbols,
            network,
        }
    }

    /// Run the ClaimAnnouncer until shutdown is signaled or the channel closes.
    pub async fn run(self, mut event_rx: ClaimEventReceiver, mut shutdown_rx: watch::Receiver<bool>) {
        info!(network = %self.network, "ClaimAnnouncer started");

        loop {
            tokio::select! {
                biased;

                // Check for shutdown
                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        info!(network = %self.network, "ClaimAnnouncer shutting down");
                        break;
                    }
                }

                event = event_rx.recv() => {
                    let Some(event) = event else {
                        info!(network = %self.network, "ClaimEvent channel closed");
                        break;
                    };
                    self.handle(event).await;
                }
            }
        }

        info!(network = %self.network, "ClaimAnnouncer shutdown complete");
    }

    /// Process one event and log the outcome. Never fails.
    pub async fn handle(&self, event: ClaimEvent) {
        let chip_id = event.chip_id;
        let transaction_hash = event.transaction_hash.clone();

        match self.process(event).await {
            Ok(status) => {
                info!(
                    network = %self.network,
                    chip_id,
                    status_id = %status.id,
                    "Published status: {}",
                    status.text
                );
            }
            Err(e) => {
                error!(
                    network = %self.network,
                    chip_id,
                    transaction_hash = %transaction_hash,
                    error = %e,
                    "Failed to announce claim"
                );
            }
        }
    }
}

impl<C, P, S> Processor<ClaimEvent> for ClaimAnnouncer<C, P, S>
where
    C: ChainReader,
    P: StatusPublisher,
    S: SymbolSource + Clone + Send + Sync,
{
    type Output = PublishedStatus;
    type Error = AnnounceError;

    async fn process(&self, event: ClaimEvent) -> Result<PublishedStatus, AnnounceError> {
        let (issued, claimed) = self.reader.supply_counters().await?;
        let counters = SupplyCounters::new(issued, claimed)?;

        let text = {
            let mut symbols = self.symbols.clone();
            self.composer.compose(&event, &counters, &mut symbols)
        };

        debug!(
            network = %self.network,
            chip_id = event.chip_id,
            issued,
            claimed,
            text = %text,
            "Composed status"
        );

        Ok(self.publisher.publish(&text).await?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::events::claim_event_channel;
    use crate::processors::testing::{FakeChain, FakePublisher, claim, rpc_failure};
    use std::sync::Arc;
    use std::time::Duration;

    type TestAnnouncer = ClaimAnnouncer<Arc<FakeChain>, Arc<FakePublisher>, fn(&[&'static str]) -> &'static str>;

    fn last_symbol(choices: &[&'static str]) -> &'static str {
        choices[choices.len() - 1]
    }

    fn announcer(chain: Arc<FakeChain>, publisher: Arc<FakePublisher>) -> TestAnnouncer {
        ClaimAnnouncer::new(
            chain,
            publisher,
            StatusComposer::default(),
            last_symbol as fn(&[&'static str]) -> &'static str,
            NetworkTarget::primary("Mainnet"),
        )
    }

    #[tokio::test]
    async fn test_publishes_composed_status() {
        let chain = Arc::new(FakeChain::default());
        chain.push_counters(Ok((12, 6)));
        let publisher = Arc::new(FakePublisher::default());
        let announcer = announcer(chain, publisher.clone());

        let mut event = claim(7, 1);
        event.claimant = "0xABC".to_string();
        event.transaction_hash = "0xfeed".to_string();
        let status = announcer.process(event).await.unwrap();

        let expected = "Chip #007 has been claimed by 0xABC. Half way there! 12 left! 🤘 \
                        #nashcash #ethereal https://etherscan.io/tx/0xfeed";
        assert_eq!(status.text, expected);
        assert_eq!(*publisher.published.lock().unwrap(), vec![expected.to_string()]);
    }

    #[tokio::test]
    async fn test_default_commentary_uses_injected_symbols() {
        let chain = Arc::new(FakeChain::default());
        chain.push_counters(Ok((100, 40)));
        let publisher = Arc::new(FakePublisher::default());
        let announcer = announcer(chain, publisher);

        let status = announcer.process(claim(41, 1)).await.unwrap();
        assert!(status.text.contains("There are 60 left to claim! 😬 "));
    }

    #[tokio::test]
    async fn test_counter_read_failure_publishes_nothing() {
        let chain = Arc::new(FakeChain::default());
        chain.push_counters(Err(rpc_failure()));
        let publisher = Arc::new(FakePublisher::default());
        let announcer = announcer(chain, publisher.clone());

        let result = announcer.process(claim(1, 1)).await;
        assert!(matches!(result, Err(AnnounceError::Chain(_))));
        assert!(publisher.published.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_inconsistent_counters_publish_nothing() {
        let chain = Arc::new(FakeChain::default());
        chain.push_counters(Ok((5, 6)));
        let publisher = Arc::new(FakePublisher::default());
        let announcer = announcer(chain, publisher.clone());

        let result = announcer.process(claim(1, 1)).await;
        assert!(matches!(
            result,
            Err(AnnounceError::Supply(SupplyError::ClaimedExceedsIssued {
                issued: 5,
                claimed: 6
            }))
        ));
        assert!(publisher.published.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_publish_failure_is_not_retried() {
        let chain = Arc::new(FakeChain::default());
        let publisher = Arc::new(FakePublisher::default());
        *publisher.failures.lock().unwrap() = 1;
        let announcer = announcer(chain, publisher.clone());

        let result = announcer.process(claim(1, 1)).await;
        assert!(matches!(result, Err(AnnounceError::Publish(_))));
        assert!(publisher.published.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_run_continues_after_failures() {
        let chain = Arc::new(FakeChain::default());
        chain.push_counters(Err(rpc_failure()));
        chain.push_counters(Ok((5, 5)));
        chain.push_counters(Ok((5, 6)));
        chain.push_counters(Ok((20, 10)));
        let publisher = Arc::new(FakePublisher::default());
        let announcer = announcer(chain, publisher.clone());

        let (tx, rx) = claim_event_channel();
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);
        for chip_id in 1..=4 {
            tx.send(claim(chip_id, chip_id)).await.unwrap();
        }
        drop(tx);

        tokio::time::timeout(Duration::from_secs(5), announcer.run(rx, shutdown_rx))
            .await
            .unwrap();

        let published = publisher.published.lock().unwrap();
        assert_eq!(published.len(), 2);
        assert!(published[0].starts_with("Chip #002 has been claimed by "));
        assert!(published[0].contains("Aaaaand they're gone, every chip has been claimed! ✨"));
        assert!(published[1].starts_with("Chip #004 has been claimed by "));
        assert!(published[1].contains("The first 10 chips are gone! 💫"));
    }
}
