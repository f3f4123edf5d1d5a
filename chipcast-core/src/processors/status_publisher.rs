//! Publishing of composed status updates.

use async_trait::async_trait;
use chipcast_sdk::client::{ClientError, TwitterClient};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while publishing a status.
#[derive(Debug, Error)]
pub enum PublishError {
    /// Posting API error
    #[error("posting API error: {0}")]
    Client(#[from] ClientError),
}

/// Acknowledgment of a published status, only used for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedStatus {
    pub id: String,
    pub text: String,
}

/// Trait for social-media publishing backends.
#[async_trait]
pub trait StatusPublisher: Send + Sync {
    /// Publish `text` as-is. Never retried by callers.
    async fn publish(&self, text: &str) -> Result<PublishedStatus, PublishError>;
}

#[async_trait]
impl<T: StatusPublisher + ?Sized> StatusPublisher for Arc<T> {
    async fn publish(&self, text: &str) -> Result<PublishedStatus, PublishError> {
        (**self).publish(text).await
    }
}

/// Publishes to X through the v2 tweet endpoint.
#[derive(Debug, Clone)]
pub struct TwitterPublisher {
    client: TwitterClient,
}

impl TwitterPublisher {
    pub fn new(client: TwitterClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StatusPublisher for TwitterPublisher {
    async fn publish(&self, text: &str) -> Result<PublishedStatus, PublishError> {
        let tweet = self.client.create_tweet(text).await?;
        Ok(PublishedStatus {
            id: tweet.id,
            text: tweet.text,
        })
    }
}

/// Logs the status instead of publishing it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunPublisher;

impl DryRunPublisher {
    pub const STATUS_ID: &str = "dry-run";
}

#[async_trait]
impl StatusPublisher for DryRunPublisher {
    async fn publish(&self, text: &str) -> Result<PublishedStatus, PublishError> {
        info!(text, "Dry run, status not published");
        Ok(PublishedStatus {
            id: Self::STATUS_ID.to_string(),
            text: text.to_string(),
        })
    }
}
