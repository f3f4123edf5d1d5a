//! Ethereum JSON-RPC 2.0 envelope and the handful of payloads chipcast uses.
//!
//! Hex quantities (`"0x1b4"`) stay as strings on the wire and are converted
//! with [`parse_quantity`] / [`format_quantity`].

use serde::{Deserialize, Serialize};

/// A JSON-RPC 2.0 request.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest<'a, P> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: P,
}

impl<'a, P: Serialize> JsonRpcRequest<'a, P> {
    pub fn new(id: u64, method: &'a str, params: P) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            method,
            params,
        }
    }
}

/// A JSON-RPC 2.0 response. Exactly one of `result` / `error` is expected.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcResponse<T> {
    #[serde(default)]
    pub id: Option<u64>,
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<JsonRpcError>,
}

/// The `error` member of a JSON-RPC response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

/// Block selector for `eth_call`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockTag {
    Latest,
    Number(u64),
}

impl Serialize for BlockTag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BlockTag::Latest => serializer.serialize_str("latest"),
            BlockTag::Number(n) => serializer.serialize_str(&format_quantity(*n)),
        }
    }
}

/// Filter object for `eth_getLogs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogFilter {
    pub address: String,
    pub topics: Vec<Option<String>>,
    pub from_block: String,
    pub to_block: String,
}

impl LogFilter {
    /// Logs of `address` whose first topic is `topic0`, in `[from_block, to_block]`.
    pub fn new(address: impl Into<String>, topic0: impl Into<String>, from_block: u64, to_block: u64) -> Self {
        Self {
            address: address.into(),
            topics: vec![Some(topic0.into())],
            from_block: format_quantity(from_block),
            to_block: format_quantity(to_block),
        }
    }
}

/// A log entry returned by `eth_getLogs`.
///
/// Pending logs may lack the block and transaction fields, hence the options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub address: String,
    pub topics: Vec<String>,
    pub data: String,
    #[serde(default)]
    pub block_number: Option<String>,
    #[serde(default)]
    pub transaction_hash: Option<String>,
    #[serde(default)]
    pub log_index: Option<String>,
    #[serde(default)]
    pub removed: bool,
}

/// Transaction object for `eth_call`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallRequest {
    pub to: String,
    pub data: String,
}

#[derive(Debug, thiserror::Error)]
#[error("invalid hex quantity: {0:?}")]
pub struct QuantityError(pub String);

/// Parse a `0x`-prefixed hex quantity.
pub fn parse_quantity(value: &str) -> Result<u64, QuantityError> {
    let digits = value
        .strip_prefix("0x")
        .ok_or_else(|| QuantityError(value.to_string()))?;
    if digits.is_empty() {
        return Err(QuantityError(value.to_string()));
    }
    u64::from_str_radix(digits, 16).map_err(|_| QuantityError(value.to_string()))
}

/// Format a number as a `0x`-prefixed hex quantity without leading zeros.
pub fn format_quantity(value: u64) -> String {
    format!("{value:#x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_parsing() {
        assert_eq!(parse_quantity("0x0").unwrap(), 0);
        assert_eq!(parse_quantity("0x1b4").unwrap(), 436);
        assert!(parse_quantity("1b4").is_err());
        assert!(parse_quantity("0x").is_err());
        assert!(parse_quantity("0xzz").is_err());
    }

    #[test]
    fn test_quantity_formatting() {
        assert_eq!(format_quantity(0), "0x0");
        assert_eq!(format_quantity(436), "0x1b4");
    }

    #[test]
    fn test_request_serialization() {
        let request = JsonRpcRequest::new(
            7,
            "eth_call",
            (
                CallRequest {
                    to: "0x00000000000000000000000000000000000000aa".to_string(),
                    data: "0x12345678".to_string(),
                },
                BlockTag::Latest,
            ),
        );
        let json: serde_json::Value = serde_json::to_value(&request).unwrap();
        assert_eq!(json["jsonrpc"], "2.0");
        assert_eq!(json["id"], 7);
        assert_eq!(json["method"], "eth_call");
        assert_eq!(json["params"][0]["data"], "0x12345678");
        assert_eq!(json["params"][1], "latest");
    }

    #[test]
    fn test_log_filter_serialization() {
        let filter = LogFilter::new("0xabc", "0xtopic", 16, 255);
        let json: serde_json::Value = serde_json::to_value(&filter).unwrap();
        assert_eq!(json["fromBlock"], "0x10");
        assert_eq!(json["toBlock"], "0xff");
        assert_eq!(json["topics"][0], "0xtopic");
    }

    #[test]
    fn test_error_response_parsing() {
        let json = r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32000,"message":"header not found"}}"#;
        let response: JsonRpcResponse<String> = serde_json::from_str(json).unwrap();
        assert!(response.result.is_none());
        assert_eq!(
            response.error,
            Some(JsonRpcError {
                code: -32000,
                message: "header not found".to_string()
            })
        );
    }

    // Generic over `T` like `RpcClient::request`, so `T: Default` is never required.
    fn parse<T: serde::de::DeserializeOwned>(json: &str) -> JsonRpcResponse<T> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_result_response_parsing() {
        let response: JsonRpcResponse<String> = parse(r#"{"jsonrpc":"2.0","id":3,"result":"0x1b4"}"#);
        assert_eq!(response.id, Some(3));
        assert_eq!(response.result.as_deref(), Some("0x1b4"));
        assert!(response.error.is_none());

        let response: JsonRpcResponse<Vec<LogEntry>> = parse(r#"{"jsonrpc":"2.0","id":4,"result":[]}"#);
        assert_eq!(response.result.map(|logs| logs.len()), Some(0));
    }

    #[test]
    fn test_response_without_result() {
        let response: JsonRpcResponse<String> = parse(r#"{"jsonrpc":"2.0","id":5}"#);
        assert!(response.result.is_none());
        assert!(response.error.is_none());
    }

    #[test]
    fn test_log_entry_parsing() {
        let json = r#"{
            "address": "0x00000000000000000000000000000000000000aa",
            "topics": ["0x01"],
            "data": "0x",
            "blockNumber": "0x10",
            "transactionHash": "0xfeed",
            "logIndex": "0x0",
            "removed": false
        }"#;
        let log: LogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(log.block_number.as_deref(), Some("0x10"));
        assert_eq!(log.transaction_hash.as_deref(), Some("0xfeed"));
        assert!(!log.removed);
    }
}
