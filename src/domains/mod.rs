//! Domains module containing the server's business logic.
//!
//! The path allowlist itself lives in `core::security`; this module holds
//! the MCP-facing tools built on top of it.

pub mod tools;
