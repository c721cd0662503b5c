//! Shared types used across the crate.

/// Error types.
pub mod error;
