//! Acquisition error types

use thiserror::Error;

/// Errors raised while acquiring a band pair for a scene request.
#[derive(Error, Debug)]
pub enum AcquireError {
    /// The transport failed (network, catalog, decoding). The message
    /// comes from the caller-supplied fetch layer.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// No scene is available for the requested date/location.
    #[error("no scene available: {0}")]
    Unavailable(String),

    /// A fetched pair does not match the dimensions the request implies.
    #[error("fetched pair is ({ar}, {ac}), request expects ({er}, {ec})")]
    WrongShape {
        er: usize,
        ec: usize,
        ar: usize,
        ac: usize,
    },

    #[error(transparent)]
    Core(#[from] verdant_core::Error),
}

/// Result type alias for acquisition operations
pub type Result<T> = std::result::Result<T, AcquireError>;
