//! In-memory fakes of the chain and the posting API.

#![allow(clippy::unwrap_used)]

use super::chain_reader::{ChainError, ChainReader};
use super::status_publisher::{PublishError, PublishedStatus, StatusPublisher};
use crate::events::{ClaimEvent, NetworkTarget};
use async_trait::async_trait;
use chipcast_sdk::client::ClientError;
use std::collections::VecDeque;
use std::sync::Mutex;

pub fn rpc_failure() -> ChainError {
    ChainError::Client(ClientError::Rpc {
        code: -32000,
        message: "header not found".to_string(),
    })
}

pub fn claim(chip_id: u64, block_number: u64) -> ClaimEvent {
    ClaimEvent {
        chip_id,
        claimant: "0x00000000000000000000000000000000000000Aa".to_string(),
        transaction_hash: format!("0x{chip_id:064x}"),
        block_number,
        network: NetworkTarget::primary("Mainnet"),
    }
}

/// Scripted chain: heads are served in order (the last one repeats), claims
/// are filtered by block range, counters pop from a queue.
#[derive(Default)]
pub struct FakeChain {
    pub heads: Mutex<VecDeque<Result<u64, ChainError>>>,
    pub last_head: Mutex<u64>,
    pub claims: Mutex<Vec<ClaimEvent>>,
    pub counters: Mutex<VecDeque<Result<(u64, u64), ChainError>>>,
    pub log_queries: Mutex<Vec<(u64, u64)>>,
    pub fail_log_queries: Mutex<usize>,
}

impl FakeChain {
    pub fn with_heads(heads: impl IntoIterator<Item = u64>) -> Self {
        let chain = Self::default();
        *chain.heads.lock().unwrap() = heads.into_iter().map(Ok).collect();
        chain
    }

    pub fn push_head(&self, head: Result<u64, ChainError>) {
        self.heads.lock().unwrap().push_back(head);
    }

    pub fn push_counters(&self, counters: Result<(u64, u64), ChainError>) {
        self.counters.lock().unwrap().push_back(counters);
    }
}

#[async_trait]
impl ChainReader for FakeChain {
    async fn latest_block(&self) -> Result<u64, ChainError> {
        let next = self.heads.lock().unwrap().pop_front();
        match next {
            Some(Ok(head)) => {
                *self.last_head.lock().unwrap() = head;
                Ok(head)
            }
            Some(Err(e)) => Err(e),
            None => Ok(*self.last_head.lock().unwrap()),
        }
    }

    async fn claim_events(&self, from_block: u64, to_block: u64) -> Result<Vec<ClaimEvent>, ChainError> {
        {
            let mut failures = self.fail_log_queries.lock().unwrap();
            if *failures > 0 {
                *failures -= 1;
                return Err(rpc_failure());
            }
        }
        self.log_queries.lock().unwrap().push((from_block, to_block));
        Ok(self
            .claims
            .lock()
            .unwrap()
            .iter()
            .filter(|c| (from_block..=to_block).contains(&c.block_number))
            .cloned()
            .collect())
    }

    async fn supply_counters(&self) -> Result<(u64, u64), ChainError> {
        self.counters
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok((100, 40)))
    }
}

/// Records every published text; fails the first `failures` calls.
#[derive(Default)]
pub struct FakePublisher {
    pub published: Mutex<Vec<String>>,
    pub failures: Mutex<usize>,
}

#[async_trait]
impl StatusPublisher for FakePublisher {
    async fn publish(&self, text: &str) -> Result<PublishedStatus, PublishError> {
        {
            let mut failures = self.failures.lock().unwrap();
            if *failures > 0 {
                *failures -= 1;
                return Err(PublishError::Client(ClientError::Api {
                    status: reqwest::StatusCode::FORBIDDEN,
                    body: "duplicate content".to_string(),
                }));
            }
        }
        let mut published = self.published.lock().unwrap();
        published.push(text.to_string());
        Ok(PublishedStatus {
            id: published.len().to_string(),
            text: text.to_string(),
        })
    }
}
