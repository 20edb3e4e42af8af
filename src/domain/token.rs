//! Shared app vocabulary: tokens, status modes, direction.
//!
//! These types are the common language between the configuration layer
//! and everything that consumes it (chain interaction, UI hosting).
//! No business logic lives here; parsing and display only.

use serde::{Deserialize, Serialize};

/// Token symbols recognized by the app.
///
/// This is a closed set: the native currency symbol supplied through
/// the environment must be one of these, and consumers match on it
/// exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenSymbol {
    /// Bold, the protocol's debt token
    BOLD,
    /// Ether, the chain's native currency
    ETH,
    /// Liquity governance token
    LQTY,
    /// Rocket Pool staked ETH
    RETH,
    /// Liquity USD (v1 stablecoin)
    LUSD,
    /// Lido staked ETH
    STETH,
}

impl TokenSymbol {
    /// All recognized symbols, in display order.
    pub const ALL: [Self; 6] = [
        Self::BOLD,
        Self::ETH,
        Self::LQTY,
        Self::RETH,
        Self::LUSD,
        Self::STETH,
    ];

    /// Parse an exact uppercase ticker, e.g. `"ETH"`.
    ///
    /// Returns `None` for anything outside the recognized set,
    /// including lowercase or mixed-case spellings.
    pub fn from_ticker(ticker: &str) -> Option<Self> {
        match ticker {
            "BOLD" => Some(Self::BOLD),
            "ETH" => Some(Self::ETH),
            "LQTY" => Some(Self::LQTY),
            "RETH" => Some(Self::RETH),
            "LUSD" => Some(Self::LUSD),
            "STETH" => Some(Self::STETH),
            _ => None,
        }
    }

    /// Canonical display name for the token.
    pub fn name(self) -> &'static str {
        match self {
            Self::BOLD => "Bold",
            Self::ETH => "Ether",
            Self::LQTY => "LQTY",
            Self::RETH => "Rocket Pool ETH",
            Self::LUSD => "LUSD",
            Self::STETH => "Lido Staked ETH",
        }
    }
}

impl std::fmt::Display for TokenSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BOLD => write!(f, "BOLD"),
            Self::ETH => write!(f, "ETH"),
            Self::LQTY => write!(f, "LQTY"),
            Self::RETH => write!(f, "RETH"),
            Self::LUSD => write!(f, "LUSD"),
            Self::STETH => write!(f, "STETH"),
        }
    }
}

/// Visual status classification used by UI-facing consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusMode {
    Positive,
    Warning,
    Negative,
    Neutral,
}

impl std::fmt::Display for StatusMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Warning => write!(f, "warning"),
            Self::Negative => write!(f, "negative"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// Signed direction for deltas and sort orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i8)]
pub enum Direction {
    Down = -1,
    Up = 1,
}

impl Direction {
    /// Numeric sign: `-1` for `Down`, `1` for `Up`.
    pub fn sign(self) -> i8 {
        self as i8
    }
}
