//! Error types for environment validation.
//!
//! Distinguishes a variable that is absent from one that is present
//! but malformed. Malformed-value variants carry the variable name
//! and the raw value that failed, so startup failures name exactly
//! what to fix.

use thiserror::Error;

/// Errors raised while constructing the typed environment record.
///
/// Construction is all-or-nothing: the first error aborts the whole
/// record. There is no per-field recovery or default substitution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
  /// A required variable is absent from the input mapping.
  #[error("missing required environment variable {0}")]
  Missing(&'static str),

  /// A required plain-string variable is present but empty.
  #[error("environment variable {0} must not be empty")]
  Empty(&'static str),

  /// An address is not `0x` followed by 40 hex digits.
  #[error("invalid address in {var}: {value}")]
  InvalidAddress {
    /// The environment variable that carried the value.
    var: &'static str,
    /// The raw value that failed validation.
    value: String,
  },

  /// The chain id is not a base-10 integer.
  #[error("invalid chain id: {0}")]
  InvalidChainId(String),

  /// A URL field is not a syntactically valid absolute URL.
  #[error("invalid URL in {var}: {value}")]
  InvalidUrl {
    /// The environment variable that carried the value.
    var: &'static str,
    /// The raw value that failed validation.
    value: String,
  },

  /// A currency descriptor is not `Name|SYMBOL|decimals` with a
  /// recognized symbol.
  #[error("invalid currency descriptor in {var}: {value}")]
  InvalidCurrency {
    /// The environment variable that carried the value.
    var: &'static str,
    /// The raw value that failed validation.
    value: String,
  },

  /// A labelled link is not `Label|url` with a valid URL.
  #[error("invalid link in {var}: {value}")]
  InvalidLink {
    /// The environment variable that carried the value.
    var: &'static str,
    /// The raw value that failed validation.
    value: String,
  },

  /// An address + block pair is not `address|block` with both halves
  /// valid. A half-populated pair is invalid, never silently dropped.
  #[error("invalid contract reference in {var}: {value}")]
  InvalidContractRef {
    /// The environment variable that carried the value.
    var: &'static str,
    /// The raw value that failed validation.
    value: String,
  },
}
