pub mod rpc;
pub mod tweet;

pub use rpc::{
    BlockTag, CallRequest, JsonRpcError, JsonRpcRequest, JsonRpcResponse, LogEntry, LogFilter,
    QuantityError, format_quantity, parse_quantity,
};
pub use tweet::{CreateTweetRequest, CreateTweetResponse, TweetData};
