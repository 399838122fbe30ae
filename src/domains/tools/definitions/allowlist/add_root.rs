//! Add allowed root tool definition.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

use super::super::common::{error_result, parse_arguments, structured_result};
use crate::core::security::PathAllowlist;

/// Parameters for the add root tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AllowlistAddRootParams {
    /// Directory to allow. Relative paths resolve against the server's
    /// working directory.
    pub path: String,
}

/// Result of adding a root.
#[derive(Debug, Serialize, JsonSchema)]
struct AddRootResult {
    /// Canonical form of the root
    root: String,
    /// False when the root was already allowed
    added: bool,
    /// Number of roots after the call
    total: usize,
}

/// Add root tool - registers an additional allowed root directory.
pub struct AllowlistAddRootTool;

impl AllowlistAddRootTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "allowlist_add_root";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Allow filesystem access under an additional root directory. The path is canonicalized first; adding an existing root is a no-op.";

    #[instrument(skip_all, fields(path = %params.path))]
    pub fn execute(params: &AllowlistAddRootParams, allowlist: &PathAllowlist) -> CallToolResult {
        let added = match allowlist.add_root(&params.path) {
            Ok(added) => added,
            Err(e) => return error_result(format!("Cannot add root: {}", e)),
        };

        let root = added.path.display().to_string();
        let summary = if added.inserted {
            info!("Added allowed root {}", root);
            format!("Added allowed root: {}", root)
        } else {
            format!("Root already allowed: {}", root)
        };

        let result = AddRootResult {
            root,
            added: added.inserted,
            total: allowlist.len(),
        };
        structured_result(summary, &result)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<AllowlistAddRootParams>(),
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
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            let allowlist = allowlist.clone();
            async move {
                let params: AllowlistAddRootParams = parse_arguments(args)?;
                Ok(Self::execute(&params, &allowlist))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::security::{EnforcementMode, canonicalize};

    fn params(path: &str) -> AllowlistAddRootParams {
        AllowlistAddRootParams {
            path: path.to_string(),
        }
    }

    #[test]
    fn test_add_root_then_allowed() {
        let allowlist = PathAllowlist::new(EnforcementMode::Enforcing);
        assert!(!allowlist.is_allowed("/projects/app/src"));

        let result = AllowlistAddRootTool::execute(&params("/projects/app/"), &allowlist);
        assert_eq!(result.is_error, Some(false));

        let data = result.structured_content.unwrap();
        assert_eq!(data["added"], true);
        assert_eq!(data["total"], 1);
        assert_eq!(
            data["root"].as_str().unwrap(),
            canonicalize("/projects/app").unwrap().display().to_string()
        );
        assert!(allowlist.is_allowed("/projects/app/src"));
    }

    #[test]
    fn test_add_existing_root() {
        let allowlist = PathAllowlist::default();
        allowlist.initialize("/projects", None).unwrap();

        let result = AllowlistAddRootTool::execute(&params("/projects/./"), &allowlist);
        let data = result.structured_content.unwrap();
        assert_eq!(data["added"], false);
        assert_eq!(data["total"], 1);
    }

    #[test]
    fn test_add_blank_root_is_error() {
        let allowlist = PathAllowlist::default();
        let result = AllowlistAddRootTool::execute(&params(""), &allowlist);
        assert_eq!(result.is_error, Some(true));
        assert!(allowlist.is_empty());
    }

    #[test]
    fn test_add_root_rejects_missing_path() {
        let err = parse_arguments::<AllowlistAddRootParams>(None).unwrap_err();
        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
    }
}
