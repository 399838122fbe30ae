//! Path check tool definition.
//!
//! Reports whether a path would be allowed without failing the call.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

use super::super::common::{parse_arguments, structured_result};
use crate::core::security::{EnforcementMode, PathAllowlist, canonicalize};

/// Parameters for the path check tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PathCheckParams {
    /// Path to check, absolute or relative to the server's working directory.
    pub path: String,
}

/// Result of a path check.
#[derive(Debug, Serialize, JsonSchema)]
struct CheckResult {
    /// Path as given
    input: String,
    /// Canonical absolute form, when the path is well formed
    #[serde(skip_serializing_if = "Option::is_none")]
    canonical: Option<String>,
    /// Whether the path is allowed under the current policy
    allowed: bool,
    /// Enforcement mode ("enforcing" or "permissive")
    mode: EnforcementMode,
    /// Why the path could not be canonicalized
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Path check tool - answers the allowlist membership query.
pub struct PathCheckTool;

impl PathCheckTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "path_check";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Check whether a path is allowed by the allowlist. Returns the canonical path and the verdict without failing.";

    #[instrument(skip_all, fields(path = %params.path))]
    pub fn execute(params: &PathCheckParams, allowlist: &PathAllowlist) -> CallToolResult {
        let allowed = allowlist.is_allowed(&params.path);
        let (canonical, error) = match canonicalize(&params.path) {
            Ok(path) => (Some(path.display().to_string()), None),
            Err(e) => (None, Some(e.to_string())),
        };

        info!("Path '{}' allowed: {}", params.path, allowed);

        let summary = format!(
            "{} is {} ({} mode)",
            canonical.as_deref().unwrap_or(&params.path),
            if allowed { "allowed" } else { "not allowed" },
            allowlist.mode()
        );

        let result = CheckResult {
            input: params.path.clone(),
            canonical,
            allowed,
            mode: allowlist.mode(),
            error,
        };
        structured_result(summary, &result)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<PathCheckParams>(),
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
                let params: PathCheckParams = parse_arguments(args)?;
                Ok(Self::execute(&params, &allowlist))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::result_text;

    fn check(allowlist: &PathAllowlist, path: &str) -> serde_json::Value {
        let params = PathCheckParams {
            path: path.to_string(),
        };
        let result = PathCheckTool::execute(&params, allowlist);
        assert_eq!(result.is_error, Some(false));
        result.structured_content.unwrap()
    }

    #[test]
    fn test_check_permissive_allows_outside() {
        let allowlist = PathAllowlist::new(EnforcementMode::Permissive);
        allowlist.initialize("/allowed", None).unwrap();

        let data = check(&allowlist, "/etc/passwd");
        assert_eq!(data["allowed"], true);
        assert_eq!(data["mode"], "permissive");
    }

    #[test]
    fn test_check_enforcing() {
        let allowlist = PathAllowlist::new(EnforcementMode::Enforcing);
        allowlist.initialize("/allowed", None).unwrap();

        assert_eq!(check(&allowlist, "/allowed/a/../b")["allowed"], true);

        let data = check(&allowlist, "/allowed/../etc");
        assert_eq!(data["allowed"], false);
        assert_eq!(
            data["canonical"].as_str().unwrap(),
            canonicalize("/etc").unwrap().display().to_string()
        );
    }

    #[test]
    fn test_check_malformed_path_does_not_fail() {
        let allowlist = PathAllowlist::new(EnforcementMode::Enforcing);
        let params = PathCheckParams {
            path: "/bad\0path".to_string(),
        };
        let result = PathCheckTool::execute(&params, &allowlist);
        assert!(result_text(&result).contains("not allowed"));

        let data = result.structured_content.unwrap();
        assert_eq!(data["allowed"], false);
        assert!(data.get("canonical").is_none());
        assert!(data["error"].as_str().unwrap().contains("NUL"));
    }

    #[test]
    fn test_check_rejects_numeric_path() {
        let args = serde_json::json!({ "path": 42 });
        let err = parse_arguments::<PathCheckParams>(args.as_object().cloned()).unwrap_err();
        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
    }
}
