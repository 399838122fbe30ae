use std::io;
use std::path::PathBuf;

/// Errors that can occur during path canonicalization and validation.
#[derive(Debug, thiserror::Error)]
pub enum PathSecurityError {
    #[error("Access denied: '{path}' is not inside any allowed root directory")]
    AccessDenied { path: PathBuf },

    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("Cannot resolve relative path against the current directory: {error}")]
    CurrentDirUnavailable { error: io::Error },
}

impl PathSecurityError {
    /// Create an invalid path error.
    pub fn invalid(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error is a policy denial rather than a malformed input.
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Self::AccessDenied { .. })
    }
}
