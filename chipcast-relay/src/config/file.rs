//! TOML file configuration structures.
//!
//! These structs directly map to the `chipcast.toml` file format.

use chipcast_core::composer::{DEFAULT_EXPLORER_TX_URL, DEFAULT_HASHTAGS};
use serde::{Deserialize, Serialize};

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub status: StatusSection,
    #[serde(default)]
    pub networks: Vec<NetworkSection>,
}

/// Status text configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusSection {
    /// Hashtag segment appended to every status.
    #[serde(default = "default_hashtags")]
    pub hashtags: String,
}

impl Default for StatusSection {
    fn default() -> Self {
        Self {
            hashtags: default_hashtags(),
        }
    }
}

fn default_hashtags() -> String {
    DEFAULT_HASHTAGS.to_string()
}

/// One watched network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSection {
    /// Label used in logs, unique across networks.
    pub label: String,
    /// JSON-RPC endpoint of a node on this network.
    pub rpc_url: String,
    /// Address of the ChipTreasury contract.
    pub contract_address: String,
    /// Transaction page prefix of the block explorer.
    #[serde(default = "default_explorer_tx_url")]
    pub explorer_tx_url: String,
    /// Whether status updates carry the secondary-network prefix.
    #[serde(default)]
    pub secondary: bool,
    /// Seconds between two polls of the chain head.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Largest block span requested in one `eth_getLogs` call.
    #[serde(default = "default_max_block_range")]
    pub max_block_range: u64,
}

fn default_explorer_tx_url() -> String {
    DEFAULT_EXPLORER_TX_URL.to_string()
}

fn default_poll_interval_secs() -> u64 {
    4
}

fn default_max_block_range() -> u64 {
    1000
}
