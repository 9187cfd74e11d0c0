//! Alias entity - a named, mutable pointer to exactly one version

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::VersionId;

/// Named pointer from an environment to a published version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    pub name: String,
    pub version: VersionId,
    pub description: String,
}

impl Alias {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<VersionId>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            description: description.into(),
        }
    }

    pub fn points_at(&self, version: &VersionId) -> bool {
        &self.version == version
    }
}
