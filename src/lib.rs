//! Path allowlist MCP server library.
//!
//! This crate decides whether filesystem paths supplied by clients may be
//! used. A [`PathAllowlist`] holds a set of canonical root directories,
//! seeded from configuration and extensible at runtime, and exposes
//! `is_allowed` / `validate_path` for every component about to touch the
//! filesystem. Enforcement can be switched off (permissive mode) while the
//! root bookkeeping keeps running.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the path allowlist
//!   (`core::security`), the MCP server and its transports
//! - **domains**: MCP tools built on top of the allowlist
//!
//! # Example
//!
//! ```rust,no_run
//! use pathguard_mcp_server::core::{EnforcementMode, PathAllowlist};
//!
//! fn main() -> anyhow::Result<()> {
//!     let allowlist = PathAllowlist::new(EnforcementMode::Enforcing);
//!     allowlist.initialize("/srv/projects, /srv/shared", Some("/var/lib/app"))?;
//!
//!     let path = allowlist.validate_path("/srv/projects/app/../app/src")?;
//!     assert_eq!(path, std::path::Path::new("/srv/projects/app/src"));
//!     assert!(allowlist.validate_path("/etc/passwd").is_err());
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{
    Config, EnforcementMode, Error, McpServer, PathAllowlist, PathSecurityError, Result,
};
