//! X (Twitter) API v2 client.
//!
//! Only tweet creation is supported. Requests are signed per user context
//! with OAuth 1.0a via [`OAuthCredentials`].

use reqwest::Client;
use url::Url;

use super::{ClientError, parse_response};
use crate::oauth::OAuthCredentials;
use crate::objects::tweet::{CreateTweetRequest, CreateTweetResponse, TweetData};

/// Typed HTTP client for posting status updates.
#[derive(Debug, Clone)]
pub struct TwitterClient {
    http: Client,
    base_url: Url,
    credentials: OAuthCredentials,
}

impl TwitterClient {
    pub const DEFAULT_BASE_URL: &str = "https://api.twitter.com/";

    /// Create a new `TwitterClient` against the public API.
    pub fn new(credentials: OAuthCredentials) -> Result<Self, ClientError> {
        Ok(Self::with_base_url(Url::parse(Self::DEFAULT_BASE_URL)?, credentials))
    }

    /// Create a new `TwitterClient` against a custom API root.
    pub fn with_base_url(base_url: Url, credentials: OAuthCredentials) -> Self {
        Self {
            http: Client::new(),
            base_url,
            credentials,
        }
    }

    /// Replace the default `reqwest::Client` with a custom one.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// `POST /2/tweets` – publish `text` as a new tweet.
    pub async fn create_tweet(&self, text: &str) -> Result<TweetData, ClientError> {
        let url = self.base_url.join("2/tweets")?;
        // JSON bodies are not covered by the OAuth 1.0a signature.
        let authorization = self.credentials.authorization_header("POST", url.as_str(), &[]);

        let resp = self
            .http
            .post(url)
            .header(reqwest::header::AUTHORIZATION, authorization)
            .json(&CreateTweetRequest {
                text: text.to_string(),
            })
            .send()
            .await?;

        let response: CreateTweetResponse = parse_response(resp).await?;
        Ok(response.data)
    }
}
