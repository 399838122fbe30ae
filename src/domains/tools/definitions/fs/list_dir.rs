//! List directory tool definition.
//!
//! Lists a directory after the path has been validated by the allowlist.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::super::common::{error_result, parse_arguments, structured_result};
use crate::core::security::PathAllowlist;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the list directory tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FsListDirParams {
    /// Path to the directory to list.
    pub path: String,

    /// Include hidden files (starting with '.')
    #[serde(default)]
    pub include_hidden: bool,
}

// ============================================================================
// Output Structure
// ============================================================================

/// One directory entry.
#[derive(Debug, Serialize, JsonSchema)]
struct DirEntryInfo {
    /// File name
    name: String,
    /// "directory", "file" or "symlink"
    kind: &'static str,
}

/// Directory listing.
#[derive(Debug, Serialize, JsonSchema)]
struct ListDirResult {
    /// Canonical path of the listed directory
    path: String,
    /// Entries sorted by name
    entries: Vec<DirEntryInfo>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// List directory tool - lists files and directories in a validated path.
pub struct FsListDirTool;

impl FsListDirTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "fs_list_dir";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List files and directories in a given path. The path is validated against the allowlist before it is read.";

    #[instrument(skip_all, fields(path = %params.path))]
    pub fn execute(params: &FsListDirParams, allowlist: &PathAllowlist) -> CallToolResult {
        info!("List directory tool called for path: {}", params.path);

        let path = match allowlist.validate_path(&params.path) {
            Ok(p) => p,
            Err(e) => return error_result(format!("Path validation failed: {}", e)),
        };

        if !path.is_dir() {
            return error_result(format!("Path is not a directory: {}", path.display()));
        }

        let read_dir = match fs::read_dir(&path) {
            Ok(entries) => entries,
            Err(e) => return error_result(format!("Failed to read directory: {}", e)),
        };

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!("Error reading entry: {}", e);
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy().into_owned();
            if !params.include_hidden && name.starts_with('.') {
                continue;
            }

            let kind = match entry.file_type() {
                Ok(t) if t.is_symlink() => "symlink",
                Ok(t) if t.is_dir() => "directory",
                Ok(_) => "file",
                Err(e) => {
                    warn!("Failed to get file type for {}: {}", name, e);
                    continue;
                }
            };

            entries.push(DirEntryInfo { name, kind });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        let dir_count = entries.iter().filter(|e| e.kind == "directory").count();
        let mut summary = format!("Directory: {}\n", path.display());
        for entry in &entries {
            if entry.kind == "directory" {
                summary.push_str(&format!("{}/\n", entry.name));
            } else {
                summary.push_str(&format!("{}\n", entry.name));
            }
        }
        summary.push_str(&format!(
            "\nTotal: {} directories, {} other entries",
            dir_count,
            entries.len() - dir_count
        ));

        info!("Listed {} entries in {}", entries.len(), path.display());

        let result = ListDirResult {
            path: path.display().to_string(),
            entries,
        };
        structured_result(summary, &result)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<FsListDirParams>(),
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
                let params: FsListDirParams = parse_arguments(args)?;
                Ok(Self::execute(&params, &allowlist))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::security::EnforcementMode;
    use crate::domains::tools::definitions::common::result_text;
    use tempfile::TempDir;

    fn params(path: &std::path::Path) -> FsListDirParams {
        FsListDirParams {
            path: path.to_string_lossy().to_string(),
            include_hidden: false,
        }
    }

    fn populated_dir() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("file1.txt"), "content").unwrap();
        fs::write(temp_dir.path().join(".hidden"), "content").unwrap();
        fs::create_dir(temp_dir.path().join("subdir")).unwrap();
        temp_dir
    }

    fn enforcing_under(root: &std::path::Path) -> PathAllowlist {
        let allowlist = PathAllowlist::new(EnforcementMode::Enforcing);
        allowlist.add_root(root.to_str().unwrap()).unwrap();
        allowlist
    }

    #[test]
    fn test_list_dir_inside_root() {
        let temp_dir = populated_dir();
        let allowlist = enforcing_under(temp_dir.path());

        let result = FsListDirTool::execute(&params(temp_dir.path()), &allowlist);
        assert_eq!(result.is_error, Some(false));

        let text = result_text(&result);
        assert!(text.contains("file1.txt"));
        assert!(text.contains("subdir/"));
        assert!(!text.contains(".hidden"));

        let data = result.structured_content.unwrap();
        assert_eq!(data["entries"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_list_dir_include_hidden() {
        let temp_dir = populated_dir();
        let allowlist = PathAllowlist::default();

        let mut p = params(temp_dir.path());
        p.include_hidden = true;
        let result = FsListDirTool::execute(&p, &allowlist);

        assert!(result_text(&result).contains(".hidden"));
    }

    #[test]
    fn test_list_dir_outside_root_denied() {
        let root = TempDir::new().unwrap();
        let outside = populated_dir();
        let allowlist = enforcing_under(root.path());

        let result = FsListDirTool::execute(&params(outside.path()), &allowlist);
        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).contains("Access denied"));
    }

    #[test]
    fn test_list_dir_traversal_denied() {
        let temp_dir = populated_dir();
        let subdir = temp_dir.path().join("subdir");
        let allowlist = enforcing_under(&subdir);

        let result = FsListDirTool::execute(&params(&subdir.join("..")), &allowlist);
        assert_eq!(result.is_error, Some(true));
    }

    #[test]
    fn test_list_dir_permissive_outside_root() {
        let root = TempDir::new().unwrap();
        let outside = populated_dir();
        let allowlist = PathAllowlist::new(EnforcementMode::Permissive);
        allowlist.add_root(root.path().to_str().unwrap()).unwrap();

        let result = FsListDirTool::execute(&params(outside.path()), &allowlist);
        assert_eq!(result.is_error, Some(false));
    }

    #[test]
    fn test_list_dir_nonexistent() {
        let allowlist = PathAllowlist::default();
        let result = FsListDirTool::execute(
            &params(std::path::Path::new("/nonexistent/path/12345")),
            &allowlist,
        );
        assert_eq!(result.is_error, Some(true));
    }

    #[test]
    fn test_list_dir_rejects_ill_typed_flag() {
        let args = serde_json::json!({ "path": "/tmp", "include_hidden": "yes" });
        let err = parse_arguments::<FsListDirParams>(args.as_object().cloned()).unwrap_err();
        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
    }
}
