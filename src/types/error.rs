//! Error types for the hedging library.
//!
//! The calculation core is total and never fails. Errors only arise at the
//! edges: converting results to [`Decimal`](crate::Decimal) and loading
//! configuration documents.

use thiserror::Error;

/// Errors produced outside the calculation core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FxError {
    /// A NaN or infinite value cannot be represented as a decimal.
    #[error("non-finite value: {0}")]
    NonFiniteValue(String),

    /// A finite value lies outside the range a decimal can represent.
    #[error("value out of decimal range: {0}")]
    OutOfRange(String),

    /// A configuration document is structurally invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result alias for fallible operations in this crate.
pub type FxResult<T> = Result<T, FxError>;

#[cfg(feature = "serde")]
impl From<serde_json::Error> for FxError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Data => FxError::InvalidConfiguration(err.to_string()),
            _ => FxError::Serialization(err.to_string()),
        }
    }
}
