//! Error types shared between the engine and the feed driver.
//!
//! The `MarketError` enum unifies the engine's argument validation failures with
//! the I/O, JSON and channel failures the driver can run into, allowing crates to
//! propagate a single error type.
use std::io;

use thiserror::Error;

/// Unified error type shared by the engine and the feed.
#[derive(Error, Debug)]
pub enum MarketError {
    /// An argument fell outside the documented input domain of an operation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O error originating from the standard library (config files, stdout).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/setup error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// A timer channel disconnected; contains a short context string.
    #[error("Channel receive failed: {0}")]
    ChannelRecv(String),
}

impl MarketError {
    /// Shorthand for building an [`MarketError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        MarketError::InvalidArgument(message.into())
    }
}
