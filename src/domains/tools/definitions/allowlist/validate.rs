//! Path validation tool definition.
//!
//! Resolves a path the way every filesystem tool does before touching it.

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

/// Parameters for the path validation tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PathValidateParams {
    /// Path to validate, absolute or relative to the server's working directory.
    pub path: String,
}

/// Result of a successful validation.
#[derive(Debug, Serialize, JsonSchema)]
struct ValidateResult {
    /// Path as given
    input: String,
    /// Canonical absolute path to use for filesystem access
    path: String,
}

/// Path validation tool - canonicalizes a path or reports access denied.
pub struct PathValidateTool;

impl PathValidateTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "path_validate";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Validate a path against the allowlist and return its canonical absolute form. Fails with 'access denied' when enforcement is on and the path is outside every allowed root.";

    #[instrument(skip_all, fields(path = %params.path))]
    pub fn execute(params: &PathValidateParams, allowlist: &PathAllowlist) -> CallToolResult {
        let path = match allowlist.validate_path(&params.path) {
            Ok(path) => path.display().to_string(),
            Err(e) => return error_result(format!("Path validation failed: {}", e)),
        };

        info!("Validated '{}' as {}", params.path, path);

        let result = ValidateResult {
            input: params.path.clone(),
            path: path.clone(),
        };
        structured_result(path, &result)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<PathValidateParams>(),
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
                let params: PathValidateParams = parse_arguments(args)?;
                Ok(Self::execute(&params, &allowlist))
            }
            .boxed()
        })
    }
}
