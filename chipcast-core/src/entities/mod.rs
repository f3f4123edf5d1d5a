pub mod supply;

pub use supply::{SupplyCounters, SupplyError};
