//! Shared wire types and HTTP clients for chipcast.
//!
//! - [`objects`]: JSON-RPC and X API request/response bodies
//! - [`contract`]: the `ChipTreasury` ABI binding and log decoding
//! - [`oauth`]: OAuth 1.0a request signing for the X API
//! - [`client`]: `reqwest` clients, behind the `client` feature

pub mod contract;
pub mod oauth;
pub mod objects;

#[cfg(feature = "client")]
pub mod client;
