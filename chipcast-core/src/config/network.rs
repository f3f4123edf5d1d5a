use crate::events::NetworkTarget;
use alloy_primitives::Address;
use std::time::Duration;
use url::Url;

/// Everything one network pipeline needs to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Label and primary/secondary flag.
    pub target: NetworkTarget,
    /// JSON-RPC endpoint of a node on this network.
    pub rpc_url: Url,
    /// Address of the ChipTreasury contract.
    pub contract_address: Address,
    /// Transaction page prefix of the block explorer.
    pub explorer_tx_url: String,
    /// How often the chain head is polled.
    pub poll_interval: Duration,
    /// Largest block span requested in one `eth_getLogs` call.
    pub max_block_range: u64,
}
