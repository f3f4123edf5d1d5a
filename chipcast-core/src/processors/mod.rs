//! Processors of the claim pipeline.
//!
//! Each configured network gets its own pair:
//!
//! - `ClaimWatcher`: Polls the chain, emits `ClaimEvent`
//! - `ClaimAnnouncer`: Receives `ClaimEvent`, publishes a status update
//!
//! `NetworkPipeline` wires one pair together. The chain and the posting API
//! are reached through the `ChainReader` and `StatusPublisher` traits.

pub mod chain_reader;
pub mod claim_announcer;
pub mod claim_watcher;
pub mod pipeline;
pub mod status_publisher;

#[cfg(test)]
mod testing;

pub use chain_reader::{ChainError, ChainReader, EvmChainReader};
pub use claim_announcer::{AnnounceError, ClaimAnnouncer};
pub use claim_watcher::{ClaimWatcher, WatchError};
pub use pipeline::{NetworkPipeline, PipelineHandle};
pub use status_publisher::{
    DryRunPublisher, PublishError, PublishedStatus, StatusPublisher, TwitterPublisher,
};
