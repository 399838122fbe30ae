//! List allowed roots tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

use super::super::common::structured_result;
use crate::core::security::{EnforcementMode, PathAllowlist};

/// Parameters for the list roots tool (none).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct AllowlistRootsParams {}

/// Snapshot of the allowlist.
#[derive(Debug, Serialize, JsonSchema)]
struct RootsResult {
    /// Enforcement mode ("enforcing" or "permissive")
    mode: EnforcementMode,
    /// Canonical root directories, sorted
    roots: Vec<String>,
}

/// List roots tool - reports the allowed root directories and the policy.
pub struct AllowlistRootsTool;

impl AllowlistRootsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "allowlist_roots";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List the root directories that filesystem access is allowed under, and whether the allowlist is enforced.";

    #[instrument(skip_all)]
    pub fn execute(allowlist: &PathAllowlist) -> CallToolResult {
        let roots: Vec<String> = allowlist
            .roots()
            .iter()
            .map(|root| root.display().to_string())
            .collect();

        info!("Listing {} allowed root(s)", roots.len());

        let mut summary = format!(
            "Allowed roots ({} mode): {}\n",
            allowlist.mode(),
            roots.len()
        );
        for root in &roots {
            summary.push_str(&format!("  {}\n", root));
        }

        let result = RootsResult {
            mode: allowlist.mode(),
            roots,
        };
        structured_result(summary, &result)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<AllowlistRootsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the router.
    pub fn create_route<S>(allowlist: Arc<PathAllowlist>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |_ctx: ToolCallContext<'_, S>| {
            let allowlist = allowlist.clone();
            async move { Ok::<_, McpError>(Self::execute(&allowlist)) }.boxed()
        })
    }
}
