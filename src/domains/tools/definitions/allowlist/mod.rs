//! Tools that expose the path allowlist itself.

pub mod add_root;
pub mod check;
pub mod roots;
pub mod validate;

pub use add_root::AllowlistAddRootTool;
pub use check::PathCheckTool;
pub use roots::AllowlistRootsTool;
pub use validate::PathValidateTool;
