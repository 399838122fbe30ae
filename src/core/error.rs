//! Error types and handling for the server.
//!
//! This module defines the crate-wide error type. Path policy failures keep
//! their own [`PathSecurityError`] and convert into [`Error::Security`].

use thiserror::Error;

use super::security::PathSecurityError;

/// A specialized Result type for server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the server.
#[derive(Debug, Error)]
pub enum Error {
    /// Path canonicalization or access policy failure.
    #[error("Path security error: {0}")]
    Security(#[from] PathSecurityError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
