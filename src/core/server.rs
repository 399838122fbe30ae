//! MCP server implementation and lifecycle management.
//!
//! The server owns the process-wide [`PathAllowlist`] and hands an `Arc` of
//! it to every tool route. Tools are defined in `domains/tools/definitions/`
//! and the router is built in `domains/tools/router.rs`.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;
use tracing::{info, warn};

use super::config::Config;
use super::error::Result as CoreResult;
use super::security::{EnforcementMode, PathAllowlist};
use crate::domains::tools::build_tool_router;

/// The main MCP server handler.
///
/// Cloning is cheap; clones share the configuration and the allowlist.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Allowed root directories and enforcement policy.
    allowlist: Arc<PathAllowlist>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new server, seeding the allowlist from `config.security`.
    pub fn new(config: Config) -> CoreResult<Self> {
        let allowlist = PathAllowlist::from_config(&config.security)?;
        Ok(Self::with_allowlist(config, Arc::new(allowlist)))
    }

    /// Create a server around an already initialized allowlist.
    pub fn with_allowlist(config: Config, allowlist: Arc<PathAllowlist>) -> Self {
        match allowlist.mode() {
            EnforcementMode::Enforcing => info!(
                "Path enforcement active: {} allowed root(s)",
                allowlist.len()
            ),
            EnforcementMode::Permissive => warn!(
                "Path enforcement disabled (permissive mode) - all filesystem paths \
                 will be allowed. Set MCP_PATH_POLICY=enforcing to restrict access \
                 to the {} configured root(s).",
                allowlist.len()
            ),
        }

        Self {
            tool_router: build_tool_router::<Self>(allowlist.clone()),
            config: Arc::new(config),
            allowlist,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the shared path allowlist.
    pub fn allowlist(&self) -> &Arc<PathAllowlist> {
        &self.allowlist
    }

    /// Names of all registered tools.
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect()
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(format!(
                "Path access control server ({} mode). Use allowlist_roots to inspect \
                 the allowed root directories, allowlist_add_root to register one, \
                 path_check or path_validate to resolve a path before using it, and \
                 fs_list_dir to list a validated directory.",
                self.allowlist.mode()
            )),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}
