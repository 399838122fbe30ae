pub mod list_dir;

pub use list_dir::FsListDirTool;
