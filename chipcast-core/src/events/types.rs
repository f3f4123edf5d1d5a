//! Event type definitions.

use std::fmt;

/// Static identity of the network a pipeline watches.
///
/// Configured per pipeline, never derived from event data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NetworkTarget {
    /// Human-readable label used in logs (e.g. `Mainnet`).
    pub label: String,
    /// Whether status updates carry the secondary-network prefix.
    pub is_secondary: bool,
}

impl NetworkTarget {
    pub fn primary(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            is_secondary: false,
        }
    }

    pub fn secondary(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            is_secondary: true,
        }
    }
}

impl fmt::Display for NetworkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// A chip was claimed on-chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimEvent {
    /// Id of the claimed chip, starting at 1.
    pub chip_id: u64,
    /// Checksummed address of the claimant.
    pub claimant: String,
    /// Hash of the claiming transaction, `0x`-prefixed.
    pub transaction_hash: String,
    /// Block the claim was mined in.
    pub block_number: u64,
    /// Network the claim happened on.
    pub network: NetworkTarget,
}
