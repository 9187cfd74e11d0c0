//! Version identifier value object
//!
//! Versions are issued by the provider on every publish. The identifier is an
//! opaque token: it is compared for equality and used as a set key, but never
//! parsed or compared numerically.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, provider-assigned version identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionId(String);

impl VersionId {
    /// Qualifier of the unpublished, mutable head of a function
    pub const LATEST: &'static str = "$LATEST";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The unpublished head (`$LATEST`)
    pub fn latest() -> Self {
        Self(Self::LATEST.to_string())
    }

    /// Returns true for the unpublished head.
    ///
    /// The head is never the result of a publish and is never eligible for
    /// garbage collection.
    pub fn is_latest(&self) -> bool {
        self.0 == Self::LATEST
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VersionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for VersionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for VersionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
