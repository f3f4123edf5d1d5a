//! ChipTreasury contract binding.
//!
//! Only the surface chipcast touches is declared: the claim event and the two
//! supply counters.

// The sol! macro generates code that we can't document
#![allow(missing_docs)]

use alloy_primitives::{Address, B256, U256, hex};
use alloy_sol_types::{SolCall, SolEvent, sol};

use crate::objects::rpc::{LogEntry, QuantityError, parse_quantity};

sol! {
    /// Treasury that mints chips and lets holders claim them.
    #[derive(Debug)]
    interface ChipTreasury {
        /// Emitted when a chip has been claimed.
        event ChipClaimSuccess(uint256 chipId, address sender);

        /// Total number of chips ever minted.
        function numChipsMinted() external view returns (uint256);

        /// Total number of chips claimed so far.
        function numChipsClaimed() external view returns (uint256);
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    #[error("abi error: {0}")]
    Abi(#[from] alloy_sol_types::Error),

    #[error("invalid hex data: {0}")]
    Hex(String),

    #[error("{0}")]
    Quantity(#[from] QuantityError),

    #[error("log is missing {0}")]
    MissingField(&'static str),

    #[error("log topic0 is not ChipClaimSuccess: {0:?}")]
    UnexpectedTopic(Option<B256>),

    #[error("{field} does not fit in 64 bits: {value}")]
    Overflow { field: &'static str, value: U256 },
}

/// A decoded `ChipClaimSuccess` log together with its chain position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipClaim {
    pub chip_id: u64,
    pub claimant: Address,
    pub transaction_hash: String,
    pub block_number: u64,
}

/// `topic0` of `ChipClaimSuccess`, `0x`-prefixed.
pub fn claim_success_topic() -> String {
    hex::encode_prefixed(ChipTreasury::ChipClaimSuccess::SIGNATURE_HASH)
}

/// Decode a `ChipClaimSuccess` log returned by `eth_getLogs`.
pub fn decode_claim_log(log: &LogEntry) -> Result<ChipClaim, ContractError> {
    let topics = log
        .topics
        .iter()
        .map(|t| t.parse::<B256>().map_err(|e| ContractError::Hex(e.to_string())))
        .collect::<Result<Vec<_>, _>>()?;
    // decode_raw_log does not check topic0 itself
    match topics.first() {
        Some(topic) if *topic == ChipTreasury::ChipClaimSuccess::SIGNATURE_HASH => {}
        other => return Err(ContractError::UnexpectedTopic(other.copied())),
    }
    let data = decode_hex(&log.data)?;
    let event = ChipTreasury::ChipClaimSuccess::decode_raw_log(topics, &data, true)?;

    let transaction_hash = log
        .transaction_hash
        .clone()
        .ok_or(ContractError::MissingField("transactionHash"))?;
    let block_number = log
        .block_number
        .as_deref()
        .ok_or(ContractError::MissingField("blockNumber"))
        .and_then(|n| Ok(parse_quantity(n)?))?;

    Ok(ChipClaim {
        chip_id: to_u64("chipId", event.chipId)?,
        claimant: event.sender,
        transaction_hash,
        block_number,
    })
}

/// Calldata for `numChipsMinted()`, `0x`-prefixed.
pub fn num_chips_minted_calldata() -> String {
    hex::encode_prefixed(ChipTreasury::numChipsMintedCall {}.abi_encode())
}

/// Calldata for `numChipsClaimed()`, `0x`-prefixed.
pub fn num_chips_claimed_calldata() -> String {
    hex::encode_prefixed(ChipTreasury::numChipsClaimedCall {}.abi_encode())
}

/// Decode the return data of `numChipsMinted()`.
pub fn decode_num_chips_minted(data: &[u8]) -> Result<u64, ContractError> {
    let ret = ChipTreasury::numChipsMintedCall::abi_decode_returns(data, true)?;
    to_u64("numChipsMinted", ret._0)
}

/// Decode the return data of `numChipsClaimed()`.
pub fn decode_num_chips_claimed(data: &[u8]) -> Result<u64, ContractError> {
    let ret = ChipTreasury::numChipsClaimedCall::abi_decode_returns(data, true)?;
    to_u64("numChipsClaimed", ret._0)
}

/// Decode `0x`-prefixed hex bytes as returned by the node.
pub fn decode_hex(value: &str) -> Result<Vec<u8>, ContractError> {
    hex::decode(value).map_err(|e| ContractError::Hex(e.to_string()))
}

fn to_u64(field: &'static str, value: U256) -> Result<u64, ContractError> {
    u64::try_from(value).map_err(|_| ContractError::Overflow { field, value })
}
