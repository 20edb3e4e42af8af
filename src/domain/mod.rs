//! Domain layer - shared vocabulary for the Bold app.
//!
//! Pure types with no behavior beyond parsing and display. The
//! configuration layer produces them; everything else consumes them.

pub mod token;

// Re-export core types for convenience
pub use token::{Direction, StatusMode, TokenSymbol};

/// 20-byte identifier for an on-chain account or contract.
pub use alloy::primitives::Address;
