//! Error types for the player widget

use thiserror::Error;

/// Player errors
#[derive(Debug, Error)]
pub enum PlayerError {
    /// A catalog must hold at least one track
    #[error("Catalog has no tracks")]
    EmptyCatalog,

    /// Catalog document could not be parsed
    #[error("Invalid catalog document: {0}")]
    InvalidCatalog(#[from] serde_json::Error),

    /// The platform refused a play request (autoplay policy, missing source)
    #[error("Play request rejected: {0}")]
    PlayRejected(String),

    /// Media element could not be created
    #[error("Audio engine error: {0}")]
    Engine(String),

    /// Capability missing on this target
    #[error("{0} is not available on this target")]
    Unsupported(&'static str),

    /// Preference store failure
    #[error("Preference storage failed: {0}")]
    Storage(String),
}

/// Result type for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;
