//! Error types for search construction.
//!
//! The taxonomy is deliberately narrow: the engine is a pure computational
//! core, so the only recoverable failure is a malformed search setup. End-of
//! -query and end-of-database conditions are ordinary control outcomes
//! carried by [`Verdict`](crate::traits::Verdict), and capacity faults inside
//! a running search are programming errors that assert rather than propagate.

use thiserror::Error;

/// Errors raised while building a search.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// Malformed or missing construction parameters (empty query,
    /// non-positive match reward, non-negative penalties).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SearchError>;
