// Security module for path access control
//
// Client-supplied paths are canonicalized and checked against an allowlist
// of root directories before any filesystem operation uses them. Whether a
// miss is denied depends on the allowlist's enforcement mode.

pub mod allowlist;
pub mod canonical;
pub mod error;
pub mod policy;

pub use allowlist::{AddedRoot, PathAllowlist};
pub use canonical::{canonicalize, canonicalize_against};
pub use error::PathSecurityError;
pub use policy::EnforcementMode;
