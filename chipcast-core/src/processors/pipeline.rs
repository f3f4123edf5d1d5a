//! Wiring of one watcher and one announcer per network.

use super::chain_reader::{ChainReader, EvmChainReader};
use super::claim_announcer::ClaimAnnouncer;
use super::claim_watcher::ClaimWatcher;
use super::status_publisher::StatusPublisher;
use crate::composer::{RandomSymbols, StatusComposer, SymbolSource};
use crate::config::{NetworkConfig, StatusConfig};
use crate::events::{ClaimEventReceiver, NetworkTarget, claim_event_channel};
use chipcast_sdk::client::RpcClient;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Watcher and announcer of one network, connected by a claim event channel.
///
/// Pipelines share nothing but the publisher, so a stalled network never
/// delays another one.
pub struct NetworkPipeline<C: ChainReader, P, S> {
    network: NetworkTarget,
    watcher: ClaimWatcher<C>,
    announcer: ClaimAnnouncer<C, P, S>,
    event_rx: ClaimEventReceiver,
}

impl<C, P, S> NetworkPipeline<C, P, S>
where
    C: ChainReader + Clone + 'static,
    P: StatusPublisher + 'static,
    S: SymbolSource + Clone + Send + Sync + 'static,
{
    /// Build a pipeline from an already constructed chain reader.
    pub fn new(
        reader: C,
        publisher: P,
        symbols: S,
        network: &NetworkConfig,
        status: &StatusConfig,
    ) -> Self {
        let (event_tx, event_rx) = claim_event_channel();

        let watcher = ClaimWatcher::new(
            reader.clone(),
            network.target.clone(),
            network.poll_interval,
            network.max_block_range,
            event_tx,
        );

        let composer = StatusComposer::new(
            status.hashtags.clone(),
            network.explorer_tx_url.clone(),
            network.target.is_secondary,
        );
        let announcer = ClaimAnnouncer::new(
            reader,
            publisher,
            composer,
            symbols,
            network.target.clone(),
        );

        Self {
            network: network.target.clone(),
            watcher,
            announcer,
            event_rx,
        }
    }

    /// Spawn both halves onto the runtime.
    pub fn spawn(self, shutdown_rx: watch::Receiver<bool>) -> PipelineHandle {
        info!(network = %self.network, "Spawning network pipeline");

        let watcher = tokio::spawn(self.watcher.run(shutdown_rx.clone()));
        let announcer = tokio::spawn(self.announcer.run(self.event_rx, shutdown_rx));

        PipelineHandle {
            network: self.network,
            watcher,
            announcer,
        }
    }
}

impl<P> NetworkPipeline<EvmChainReader, P, RandomSymbols>
where
    P: StatusPublisher + 'static,
{
    /// Build a pipeline reading from an EVM node over JSON-RPC.
    ///
    /// `http` is shared with the other pipelines and should carry the
    /// request timeout.
    pub fn evm(
        network: &NetworkConfig,
        status: &StatusConfig,
        http: reqwest::Client,
        publisher: P,
    ) -> Self {
        let rpc = RpcClient::new(network.rpc_url.clone()).with_http_client(http);
        let reader = EvmChainReader::new(rpc, network.contract_address, network.target.clone());
        Self::new(reader, publisher, RandomSymbols, network, status)
    }
}

/// Join handles of a spawned pipeline.
pub struct PipelineHandle {
    network: NetworkTarget,
    watcher: JoinHandle<()>,
    announcer: JoinHandle<()>,
}

impl PipelineHandle {
    pub fn network(&self) -> &NetworkTarget {
        &self.network
    }

    /// Wait for both halves to stop.
    pub async fn join(self) {
        if let Err(e) = self.watcher.await {
            error!(network = %self.network, error = %e, "ClaimWatcher task failed");
        }
        if let Err(e) = self.announcer.await {
            error!(network = %self.network, error = %e, "ClaimAnnouncer task failed");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::processors::testing::{FakeChain, FakePublisher, claim};
    use alloy_primitives::Address;
    use std::sync::Arc;
    use std::time::Duration;

    fn network_config() -> NetworkConfig {
        NetworkConfig {
            target: NetworkTarget::secondary("Sepolia"),
            rpc_url: "http://127.0.0.1:8545".parse().unwrap(),
            contract_address: Address::ZERO,
            explorer_tx_url: "https://sepolia.etherscan.io/tx".to_string(),
            poll_interval: Duration::from_millis(10),
            max_block_range: 1000,
        }
    }

    fn first_symbol(choices: &[&'static str]) -> &'static str {
        choices[0]
    }

    #[tokio::test]
    async fn test_claim_flows_to_publisher() {
        let chain = Arc::new(FakeChain::with_heads([10, 12]));
        let mut event = claim(3, 11);
        event.claimant = "0xABC".to_string();
        event.transaction_hash = "0xfeed".to_string();
        chain.claims.lock().unwrap().push(event);
        chain.push_counters(Ok((12, 6)));
        let publisher = Arc::new(FakePublisher::default());

        let pipeline = NetworkPipeline::new(
            chain,
            publisher.clone(),
            first_symbol as fn(&[&'static str]) -> &'static str,
            &network_config(),
            &StatusConfig::default(),
        );
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = pipeline.spawn(shutdown_rx);
        assert_eq!(handle.network().label, "Sepolia");

        tokio::time::timeout(Duration::from_secs(5), async {
            while publisher.published.lock().unwrap().is_empty() {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .unwrap();

        shutdown_tx.send(true).unwrap();
        tokio::time::timeout(Duration::from_secs(5), handle.join())
            .await
            .unwrap();

        assert_eq!(
            *publisher.published.lock().unwrap(),
            vec![
                "[Testnet] Chip #003 has been claimed by 0xABC. Half way there! 12 left! 🤘 \
                 #nashcash #ethereal https://sepolia.etherscan.io/tx/0xfeed"
                    .to_string()
            ]
        );
    }
}
