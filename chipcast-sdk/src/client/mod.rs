//! HTTP clients for the Ethereum JSON-RPC endpoint and the X API.
//!
//! Gated behind the `client` cargo feature so downstream crates that only
//! need the shared types do not pull in `reqwest`.

mod rpc;
mod twitter;

pub use rpc::RpcClient;
pub use twitter::TwitterClient;

use reqwest::StatusCode;

use crate::contract::ContractError;
use crate::objects::QuantityError;

/// Errors produced by the SDK HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (DNS, TLS, connection reset, …).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("api error: status {status}, body: {body}")]
    Api { status: StatusCode, body: String },

    /// The JSON-RPC endpoint answered with an error object.
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The JSON-RPC response carried neither `result` nor `error`.
    #[error("rpc response for {method} has no result")]
    MissingResult { method: String },

    /// Response body could not be deserialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A hex quantity in the response was malformed.
    #[error("{0}")]
    Quantity(#[from] QuantityError),

    /// Hex payload in the response was malformed.
    #[error("{0}")]
    Contract(#[from] ContractError),

    /// The base URL could not be joined with the endpoint path.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

async fn parse_response<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::Api { status, body });
    }
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(ClientError::Json)
}
