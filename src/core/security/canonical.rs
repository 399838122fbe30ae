//! Lexical path canonicalization.
//!
//! Paths are made absolute and stripped of `.`, `..`, repeated and trailing
//! separators without touching the filesystem. Symlinks are not resolved and
//! the path does not need to exist.

use std::path::{Component, Path, PathBuf};

use super::error::PathSecurityError;

/// Canonicalize `input`, resolving relative paths against the process's
/// current working directory.
///
/// # Examples
///
/// ```rust,ignore
/// let path = canonicalize("/srv/projects/../data/./file.txt")?;
/// assert_eq!(path, PathBuf::from("/srv/data/file.txt"));
/// ```
pub fn canonicalize(input: &str) -> Result<PathBuf, PathSecurityError> {
    check_well_formed(input)?;

    if Path::new(input).is_absolute() {
        return Ok(normalize_lexically(Path::new(input)));
    }

    let cwd = std::env::current_dir()
        .map_err(|error| PathSecurityError::CurrentDirUnavailable { error })?;
    canonicalize_against(input, &cwd)
}

/// Canonicalize `input`, resolving relative paths against `base`.
///
/// `base` is expected to be absolute; an empty `input` yields `base` itself.
pub fn canonicalize_against(input: &str, base: &Path) -> Result<PathBuf, PathSecurityError> {
    check_well_formed(input)?;
    Ok(normalize_lexically(&base.join(input)))
}

fn check_well_formed(input: &str) -> Result<(), PathSecurityError> {
    if input.contains('\0') {
        return Err(PathSecurityError::invalid(
            input.replace('\0', "\\0"),
            "path contains a NUL byte",
        ));
    }
    Ok(())
}

/// `..` never climbs above the root: `/../etc` becomes `/etc`.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(segment) => out.push(segment),
        }
    }
    out
}
