//! Errors raised by the ranking engine.

use thiserror::Error;

/// Ranking is pure computation, so the only failure is a bad request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankingError {
    /// The caller left out something the requested ranking needs
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RankingError>;
