//! Read access to the chip treasury on one network.
//!
//! The processors only see the [`ChainReader`] trait; [`EvmChainReader`] is
//! the JSON-RPC backed implementation used in production.

use crate::events::{ClaimEvent, NetworkTarget};
use alloy_primitives::Address;
use async_trait::async_trait;
use chipcast_sdk::client::{ClientError, RpcClient};
use chipcast_sdk::contract::{self, ChipClaim, ContractError};
use chipcast_sdk::objects::{BlockTag, CallRequest, LogFilter};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while reading from the chain.
#[derive(Debug, Error)]
pub enum ChainError {
    /// Transport or JSON-RPC error
    #[error("rpc error: {0}")]
    Client(#[from] ClientError),

    /// Log or return data did not match the contract ABI
    #[error("contract decoding error: {0}")]
    Contract(#[from] ContractError),
}

/// Trait for reading claim events and supply counters of one network.
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// Current head block number.
    async fn latest_block(&self) -> Result<u64, ChainError>;

    /// Claim events mined in `[from_block, to_block]`, in log order.
    async fn claim_events(&self, from_block: u64, to_block: u64) -> Result<Vec<ClaimEvent>, ChainError>;

    /// `(numChipsMinted, numChipsClaimed)` at the latest block, read in that
    /// order. Not validated.
    async fn supply_counters(&self) -> Result<(u64, u64), ChainError>;
}

#[async_trait]
impl<T: ChainReader + ?Sized> ChainReader for Arc<T> {
    async fn latest_block(&self) -> Result<u64, ChainError> {
        (**self).latest_block().await
    }

    async fn claim_events(&self, from_block: u64, to_block: u64) -> Result<Vec<ClaimEvent>, ChainError> {
        (**self).claim_events(from_block, to_block).await
    }

    async fn supply_counters(&self) -> Result<(u64, u64), ChainError> {
        (**self).supply_counters().await
    }
}

/// JSON-RPC implementation of [`ChainReader`] for an EVM network.
#[derive(Debug, Clone)]
pub struct EvmChainReader {
    rpc: RpcClient,
    contract_address: Address,
    network: NetworkTarget,
}

impl EvmChainReader {
    /// Create a new EvmChainReader.
    ///
    /// # Arguments
    ///
    /// * `rpc` - Client for a node on the network
    /// * `contract_address` - Address of the ChipTreasury contract
    /// * `network` - Network identity stamped on every emitted event
    pub fn new(rpc: RpcClient, contract_address: Address, network: NetworkTarget) -> Self {
        Self {
            rpc,
            contract_address,
            network,
        }
    }

    fn contract_hex(&self) -> String {
        self.contract_address.to_string()
    }

    async fn call_counter(&self, calldata: String) -> Result<Vec<u8>, ChainError> {
        let call = CallRequest {
            to: self.contract_hex(),
            data: calldata,
        };
        Ok(self.rpc.call(&call, BlockTag::Latest).await?)
    }

    fn to_event(&self, claim: ChipClaim) -> ClaimEvent {
        ClaimEvent {
            chip_id: claim.chip_id,
            claimant: claim.claimant.to_checksum(None),
            transaction_hash: claim.transaction_hash,
            block_number: claim.block_number,
            network: self.network.clone(),
        }
    }
}

#[async_trait]
impl ChainReader for EvmChainReader {
    async fn latest_block(&self) -> Result<u64, ChainError> {
        Ok(self.rpc.block_number().await?)
    }

    async fn claim_events(&self, from_block: u64, to_block: u64) -> Result<Vec<ClaimEvent>, ChainError> {
        let filter = LogFilter::new(
            self.contract_hex(),
            contract::claim_success_topic(),
            from_block,
            to_block,
        );
        let logs = self.rpc.get_logs(&filter).await?;

        debug!(
            network = %self.network,
            from_block,
            to_block,
            logs = logs.len(),
            "Fetched ChipClaimSuccess logs"
        );

        let mut events = Vec::with_capacity(logs.len());
        for log in logs {
            // Reorged-out logs are not claims anymore
            if log.removed {
                warn!(
                    network = %self.network,
                    transaction_hash = ?log.transaction_hash,
                    "Skipping removed log"
                );
                continue;
            }
            events.push(self.to_event(contract::decode_claim_log(&log)?));
        }
        Ok(events)
    }

    async fn supply_counters(&self) -> Result<(u64, u64), ChainError> {
        let minted = self.call_counter(contract::num_chips_minted_calldata()).await?;
        let minted = contract::decode_num_chips_minted(&minted)?;
        let claimed = self.call_counter(contract::num_chips_claimed_calldata()).await?;
        let claimed = contract::decode_num_chips_claimed(&claimed)?;
        Ok((minted, claimed))
    }
}
