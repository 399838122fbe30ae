//! Core module containing shared infrastructure components.
//!
//! This module provides the path allowlist and the building blocks around
//! it: configuration, error handling, server lifecycle and transports.

pub mod config;
pub mod error;
pub mod security;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use security::{EnforcementMode, PathAllowlist, PathSecurityError};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
