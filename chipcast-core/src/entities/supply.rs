//! On-chain supply counters of the chip treasury.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SupplyError {
    /// The contract reported more claimed chips than minted ones.
    #[error("claimed count {claimed} exceeds minted count {issued}")]
    ClaimedExceedsIssued { issued: u64, claimed: u64 },
}

/// A snapshot of `numChipsMinted` / `numChipsClaimed`.
///
/// Always satisfies `total_claimed <= total_issued`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupplyCounters {
    total_issued: u64,
    total_claimed: u64,
}

impl SupplyCounters {
    pub fn new(total_issued: u64, total_claimed: u64) -> Result<Self, SupplyError> {
        if total_claimed > total_issued {
            return Err(SupplyError::ClaimedExceedsIssued {
                issued: total_issued,
                claimed: total_claimed,
            });
        }
        Ok(Self {
            total_issued,
            total_claimed,
        })
    }

    pub fn total_issued(&self) -> u64 {
        self.total_issued
    }

    pub fn total_claimed(&self) -> u64 {
        self.total_claimed
    }

    pub fn unclaimed(&self) -> u64 {
        self.total_issued - self.total_claimed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consistent_counters() {
        let counters = SupplyCounters::new(5, 5).unwrap();
        assert_eq!(counters.unclaimed(), 0);

        let counters = SupplyCounters::new(40, 39).unwrap();
        assert_eq!(counters.total_issued(), 40);
        assert_eq!(counters.total_claimed(), 39);
        assert_eq!(counters.unclaimed(), 1);
    }

    #[test]
    fn test_claimed_exceeding_issued_is_rejected() {
        assert_eq!(
            SupplyCounters::new(5, 6),
            Err(SupplyError::ClaimedExceedsIssued {
                issued: 5,
                claimed: 6
            })
        );
    }
}
