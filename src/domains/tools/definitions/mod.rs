//! Tool definitions module.
//!
//! Each tool is defined in its own file: a params struct, `execute()`,
//! `to_tool()` and `create_route()`.

mod common;
pub mod allowlist;
pub mod fs;

pub use allowlist::{AllowlistAddRootTool, AllowlistRootsTool, PathCheckTool, PathValidateTool};
pub use fs::FsListDirTool;
