//! Ethereum JSON-RPC client over HTTP.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::{ClientError, parse_response};
use crate::contract::decode_hex;
use crate::objects::rpc::{
    BlockTag, CallRequest, JsonRpcRequest, JsonRpcResponse, LogEntry, LogFilter, parse_quantity,
};

/// Typed client for the subset of the Ethereum JSON-RPC API chipcast needs.
///
/// Cloning is cheap; clones share the request id counter.
#[derive(Debug, Clone)]
pub struct RpcClient {
    http: Client,
    endpoint: Url,
    next_id: Arc<AtomicU64>,
}

impl RpcClient {
    /// Create a new `RpcClient` for the node at `endpoint`.
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure timeouts or a proxy).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Send one JSON-RPC call and return its `result`.
    pub async fn request<P, R>(&self, method: &str, params: P) -> Result<R, ClientError>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = JsonRpcRequest::new(id, method, params);

        let resp = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?;

        let response: JsonRpcResponse<R> = parse_response(resp).await?;
        if let Some(error) = response.error {
            return Err(ClientError::Rpc {
                code: error.code,
                message: error.message,
            });
        }
        response.result.ok_or_else(|| ClientError::MissingResult {
            method: method.to_string(),
        })
    }

    /// `eth_blockNumber` – the current head of the chain.
    pub async fn block_number(&self) -> Result<u64, ClientError> {
        let number: String = self.request("eth_blockNumber", Vec::<String>::new()).await?;
        Ok(parse_quantity(&number)?)
    }

    /// `eth_getLogs` – logs matching `filter`.
    pub async fn get_logs(&self, filter: &LogFilter) -> Result<Vec<LogEntry>, ClientError> {
        self.request("eth_getLogs", [filter]).await
    }

    /// `eth_call` – execute a read-only call and return the raw return data.
    pub async fn call(&self, call: &CallRequest, block: BlockTag) -> Result<Vec<u8>, ClientError> {
        let data: String = self.request("eth_call", (call, block)).await?;
        Ok(decode_hex(&data)?)
    }
}
