//! Enforcement policy for the path allowlist.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the allowlist treats paths outside its roots.
///
/// The mode is fixed when a [`PathAllowlist`](super::PathAllowlist) is built.
/// Both modes keep the root bookkeeping up to date; only `Enforcing`
/// consults it to deny access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EnforcementMode {
    /// Paths must be equal to or below an allowed root.
    Enforcing,

    /// Every path is allowed. Canonicalization still runs.
    #[default]
    Permissive,
}

impl EnforcementMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enforcing => "enforcing",
            Self::Permissive => "permissive",
        }
    }

    pub fn is_enforcing(&self) -> bool {
        matches!(self, Self::Enforcing)
    }
}

impl fmt::Display for EnforcementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnforcementMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "enforcing" => Ok(Self::Enforcing),
            "permissive" => Ok(Self::Permissive),
            other => Err(format!(
                "unknown path policy '{}', expected 'enforcing' or 'permissive'",
                other
            )),
        }
    }
}
