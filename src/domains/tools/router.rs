//! Tool Router - builds the rmcp ToolRouter from the tool definitions.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::security::PathAllowlist;

use super::definitions::{
    AllowlistAddRootTool, AllowlistRootsTool, FsListDirTool, PathCheckTool, PathValidateTool,
};

/// Build the tool router with all registered tools.
///
/// Every route holds a clone of the same allowlist.
pub fn build_tool_router<S>(allowlist: Arc<PathAllowlist>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(AllowlistAddRootTool::create_route(allowlist.clone()))
        .with_route(AllowlistRootsTool::create_route(allowlist.clone()))
        .with_route(FsListDirTool::create_route(allowlist.clone()))
        .with_route(PathCheckTool::create_route(allowlist.clone()))
        .with_route(PathValidateTool::create_route(allowlist))
}
