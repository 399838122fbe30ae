//! The allowlist of root directories that filesystem access may target.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use super::canonical::canonicalize;
use super::error::PathSecurityError;
use super::policy::EnforcementMode;
use crate::core::config::SecurityConfig;

/// Separator used in the raw root list (e.g. `ALLOWED_PROJECT_DIRS`).
pub const ROOT_LIST_DELIMITER: char = ',';

/// Outcome of [`PathAllowlist::add_root`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedRoot {
    /// Canonical form of the root, now a member of the allowlist.
    pub path: PathBuf,

    /// False when the root was already present.
    pub inserted: bool,
}

/// A set of canonical root directories plus the policy used to enforce it.
///
/// One instance is built at startup and shared behind an `Arc` by every
/// component that resolves client-supplied paths. The set only grows after
/// [`initialize`](Self::initialize); calling `initialize` again replaces it.
#[derive(Debug)]
pub struct PathAllowlist {
    mode: EnforcementMode,
    roots: RwLock<BTreeSet<PathBuf>>,
}

impl Default for PathAllowlist {
    fn default() -> Self {
        Self::new(EnforcementMode::default())
    }
}

impl PathAllowlist {
    /// Create an empty allowlist with the given enforcement mode.
    pub fn new(mode: EnforcementMode) -> Self {
        Self {
            mode,
            roots: RwLock::new(BTreeSet::new()),
        }
    }

    /// Create an allowlist from the security section of the configuration.
    pub fn from_config(config: &SecurityConfig) -> Result<Self, PathSecurityError> {
        let allowlist = Self::new(config.mode);
        allowlist.initialize(&config.allowed_dirs, config.data_dir.as_deref())?;
        Ok(allowlist)
    }

    pub fn mode(&self) -> EnforcementMode {
        self.mode
    }

    /// Replace the root set with the roots in `raw_list` plus `extra_root`.
    ///
    /// `raw_list` is split on commas; segments are trimmed and empty ones
    /// skipped. `extra_root` is included whenever it is non-blank. On error
    /// the previous root set is kept.
    pub fn initialize(
        &self,
        raw_list: &str,
        extra_root: Option<&str>,
    ) -> Result<(), PathSecurityError> {
        let mut fresh = BTreeSet::new();

        let segments = raw_list
            .split(ROOT_LIST_DELIMITER)
            .map(str::trim)
            .filter(|segment| !segment.is_empty());
        for segment in segments {
            fresh.insert(canonicalize(segment)?);
        }

        if let Some(extra) = extra_root.map(str::trim).filter(|s| !s.is_empty()) {
            fresh.insert(canonicalize(extra)?);
        }

        debug!(roots = fresh.len(), mode = %self.mode, "Path allowlist initialized");
        *self.write() = fresh;
        Ok(())
    }

    /// Add a root directory. Relative paths resolve against the current
    /// working directory.
    pub fn add_root(&self, path: &str) -> Result<AddedRoot, PathSecurityError> {
        if path.trim().is_empty() {
            return Err(PathSecurityError::invalid(path, "root path is empty"));
        }

        let canonical = canonicalize(path)?;
        let inserted = self.write().insert(canonical.clone());
        if inserted {
            debug!(root = %canonical.display(), "Allowed root added");
        }

        Ok(AddedRoot {
            path: canonical,
            inserted,
        })
    }

    /// Whether `path` may be accessed under the current policy.
    ///
    /// Always true in permissive mode. In enforcing mode the canonical path
    /// must equal a root or lie below one; paths that cannot be canonicalized
    /// are not allowed.
    pub fn is_allowed(&self, path: &str) -> bool {
        match self.mode {
            EnforcementMode::Permissive => true,
            EnforcementMode::Enforcing => canonicalize(path)
                .map(|canonical| self.covers(&canonical))
                .unwrap_or(false),
        }
    }

    /// Canonicalize `path` and check it against the policy.
    ///
    /// Returns the canonical absolute path to use for the actual I/O.
    /// Fails with [`PathSecurityError::AccessDenied`] only in enforcing mode.
    pub fn validate_path(&self, path: &str) -> Result<PathBuf, PathSecurityError> {
        let canonical = canonicalize(path)?;

        if self.mode.is_enforcing() && !self.covers(&canonical) {
            return Err(PathSecurityError::AccessDenied { path: canonical });
        }

        Ok(canonical)
    }

    /// Snapshot of the current roots, sorted.
    pub fn roots(&self) -> Vec<PathBuf> {
        self.read().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Component-wise ancestor match: `/data2` is not covered by `/data`.
    fn covers(&self, canonical: &Path) -> bool {
        let roots = self.read();
        canonical.ancestors().any(|ancestor| roots.contains(ancestor))
    }

    // Every write leaves the set valid, so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, BTreeSet<PathBuf>> {
        self.roots.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeSet<PathBuf>> {
        self.roots.write().unwrap_or_else(PoisonError::into_inner)
    }
}
