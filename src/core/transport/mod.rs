//! Transport layer for the server.
//!
//! - **STDIO**: standard input/output, the default MCP mode - feature: `stdio`
//! - **TCP**: line-delimited JSON-RPC over TCP sockets - feature: `tcp`
//!
//! Every transport serves the same [`McpServer`](crate::core::McpServer), so
//! all sessions share one path allowlist.

mod config;
mod error;
mod service;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;
