//! Status message composition.
//!
//! Turns a claim event and the current supply counters into the text of a
//! status update:
//!
//! ```text
//! <announcement> <supply commentary> <hashtags> <transaction link>
//! ```
//!
//! Everything here is pure. The only nondeterminism, the symbol appended to
//! the default commentary, comes from an injected [`SymbolSource`].

mod symbols;

pub use symbols::{RandomSymbols, SymbolSource};

use crate::entities::SupplyCounters;
use crate::events::ClaimEvent;

/// Prefix of announcements for claims on a secondary network.
pub const SECONDARY_NETWORK_PREFIX: &str = "[Testnet]";

/// Hashtag segment used when none is configured.
pub const DEFAULT_HASHTAGS: &str = "#nashcash #ethereal";

/// Transaction page prefix used when no explorer is configured.
pub const DEFAULT_EXPLORER_TX_URL: &str = "https://etherscan.io/tx";

/// Symbols used in the supply commentary.
pub mod emoji {
    pub const THIRD: &str = "🥉";
    pub const DIZZY: &str = "💫";
    pub const HORNS: &str = "🤘";
    pub const DEVIL: &str = "😈";
    pub const MONEY: &str = "💸";
    pub const FUEGO: &str = "🔥";
    pub const SPARKLE: &str = "✨";
    pub const NERVOUS: &str = "😬";
    pub const ANXIOUS: &str = "😰";
}

/// Symbols the default commentary picks from.
pub const RANDOM_SYMBOLS: [&str; 4] = [emoji::DEVIL, emoji::MONEY, emoji::FUEGO, emoji::NERVOUS];

/// Claimed count that triggers the first-milestone commentary.
const FIRST_MILESTONE: u64 = 10;

/// Zero-pad a chip id to three digits. Ids of 100 and above are left as is.
pub fn pad_chip_id(chip_id: u64) -> String {
    match chip_id {
        0..=9 => format!("00{chip_id}"),
        10..=99 => format!("0{chip_id}"),
        _ => chip_id.to_string(),
    }
}

/// `"[Testnet] Chip #007 has been claimed by 0xABC."`, prefix only on
/// secondary networks.
pub fn render_claim_announcement(chip_id: u64, claimant: &str, network_is_secondary: bool) -> String {
    let announcement = format!("Chip #{} has been claimed by {claimant}.", pad_chip_id(chip_id));
    if network_is_secondary {
        format!("{SECONDARY_NETWORK_PREFIX} {announcement}")
    } else {
        announcement
    }
}

/// Which commentary variant a supply snapshot falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplyMilestone {
    /// Exactly ten chips claimed.
    FirstTenClaimed,
    /// Exactly `ceil(2/3 * issued)` chips left.
    OneThirdClaimed,
    /// Exactly `ceil(1/2 * issued)` chips left.
    HalfClaimed,
    /// Nothing left.
    SoldOut,
    /// At most `floor(1/4 * issued)` chips left.
    Scarce { unclaimed: u64 },
    /// None of the above.
    Remaining { unclaimed: u64 },
}

impl SupplyMilestone {
    /// Classify a snapshot. The first matching rule wins.
    pub fn classify(counters: &SupplyCounters) -> Self {
        let issued = counters.total_issued();
        let unclaimed = counters.unclaimed();

        if counters.total_claimed() == FIRST_MILESTONE {
            Self::FirstTenClaimed
        } else if unclaimed == ceil_two_thirds(issued) {
            Self::OneThirdClaimed
        } else if unclaimed == ceil_half(issued) {
            Self::HalfClaimed
        } else if unclaimed == 0 {
            // Ahead of the scarcity rule, which every sold-out snapshot also
            // satisfies. The first-ten, one-third and half rules still win
            // over everything below them.
            Self::SoldOut
        } else if unclaimed <= issued / 4 {
            Self::Scarce { unclaimed }
        } else {
            Self::Remaining { unclaimed }
        }
    }
}

fn ceil_two_thirds(n: u64) -> u64 {
    n / 3 * 2 + n % 3
}

fn ceil_half(n: u64) -> u64 {
    n.div_ceil(2)
}

/// Comment on the remaining supply.
pub fn render_supply_commentary(counters: &SupplyCounters, symbols: &mut impl SymbolSource) -> String {
    match SupplyMilestone::classify(counters) {
        SupplyMilestone::FirstTenClaimed => {
            format!("The first 10 chips are gone! {}", emoji::DIZZY)
        }
        SupplyMilestone::OneThirdClaimed => {
            format!("A third of the way there! {}", emoji::THIRD)
        }
        SupplyMilestone::HalfClaimed => format!(
            "Half way there! {} left! {}",
            counters.total_issued(),
            emoji::HORNS
        ),
        SupplyMilestone::SoldOut => format!(
            "Aaaaand they're gone, every chip has been claimed! {}",
            emoji::SPARKLE
        ),
        SupplyMilestone::Scarce { unclaimed } => {
            format!("Only {unclaimed} left! {}", emoji::ANXIOUS)
        }
        SupplyMilestone::Remaining { unclaimed } => format!(
            "There are {unclaimed} left to claim! {}",
            symbols.pick(&RANDOM_SYMBOLS)
        ),
    }
}

/// Join the four segments with single spaces, in order.
pub fn compose_status_message(
    claim_announcement: &str,
    supply_commentary: &str,
    hashtags: &str,
    reference_url: &str,
) -> String {
    [claim_announcement, supply_commentary, hashtags, reference_url].join(" ")
}

/// Link to a transaction on a block explorer.
pub fn transaction_url(explorer_tx_url: &str, transaction_hash: &str) -> String {
    format!("{}/{transaction_hash}", explorer_tx_url.trim_end_matches('/'))
}

/// Per-network static inputs of a status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusComposer {
    hashtags: String,
    explorer_tx_url: String,
    network_is_secondary: bool,
}

impl StatusComposer {
    pub fn new(
        hashtags: impl Into<String>,
        explorer_tx_url: impl Into<String>,
        network_is_secondary: bool,
    ) -> Self {
        Self {
            hashtags: hashtags.into(),
            explorer_tx_url: explorer_tx_url.into(),
            network_is_secondary,
        }
    }

    /// Full status text for one claim.
    pub fn compose(
        &self,
        event: &ClaimEvent,
        counters: &SupplyCounters,
        symbols: &mut impl SymbolSource,
    ) -> String {
        compose_status_message(
            &render_claim_announcement(event.chip_id, &event.claimant, self.network_is_secondary),
            &render_supply_commentary(counters, symbols),
            &self.hashtags,
            &transaction_url(&self.explorer_tx_url, &event.transaction_hash),
        )
    }
}

impl Default for StatusComposer {
    fn default() -> Self {
        Self::new(DEFAULT_HASHTAGS, DEFAULT_EXPLORER_TX_URL, false)
    }
}
