//! Configuration types for chipcast.
//!
//! These types represent the validated runtime configuration handed to each
//! pipeline. The actual config loading/parsing is handled by the relay crate.

mod network;
mod status;

pub use network::NetworkConfig;
pub use status::StatusConfig;
