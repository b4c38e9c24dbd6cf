//! Errors that can occur while importing a production.

use cast_model::CastModelError;
use ranking::RankingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    /// The metadata provider could not deliver a payload
    #[error("Provider {provider} failed: {reason}")]
    Provider { provider: String, reason: String },

    /// A payload arrived but could not be read as the expected shape
    #[error(transparent)]
    Model(#[from] CastModelError),

    /// The production is missing something the documents need
    #[error("Missing required field {field} for {production_id}")]
    MissingField {
        production_id: String,
        field: &'static str,
    },

    #[error(transparent)]
    Ranking(#[from] RankingError),

    /// The persistence layer rejected a write
    #[error("Store write failed for {key}: {reason}")]
    Store { key: String, reason: String },

    /// A background task panicked or was cancelled
    #[error("Import task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ImportError>;
