//! Unreferenced version detection
//!
//! Pure set arithmetic over opaque version tokens. A version pointed at by
//! any alias is never returned as a deletion candidate, and neither is the
//! unpublished `$LATEST` head.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::domain::entities::Alias;
use crate::domain::value_objects::VersionId;

/// Versions pointed at by at least one alias
pub fn referenced_versions(aliases: &[Alias]) -> BTreeSet<VersionId> {
    aliases.iter().map(|alias| alias.version.clone()).collect()
}

/// Published versions that no alias points at (`all - referenced`).
///
/// Keeps the listing order of `all` and drops duplicates.
pub fn unreferenced_versions(
    all: &[VersionId],
    referenced: &BTreeSet<VersionId>,
) -> Vec<VersionId> {
    let mut seen = HashSet::new();
    all.iter()
        .filter(|version| !version.is_latest())
        .filter(|version| !referenced.contains(*version))
        .filter(|version| seen.insert((*version).clone()))
        .cloned()
        .collect()
}

/// A published version and the aliases that point at it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionUsage {
    pub version: VersionId,
    pub aliases: Vec<String>,
}

impl VersionUsage {
    pub fn is_referenced(&self) -> bool {
        !self.aliases.is_empty()
    }
}

/// Pair every published version with the aliases pointing at it.
pub fn version_usage(versions: &[VersionId], aliases: &[Alias]) -> Vec<VersionUsage> {
    let mut by_version: BTreeMap<&VersionId, Vec<String>> = BTreeMap::new();
    for alias in aliases {
        by_version
            .entry(&alias.version)
            .or_default()
            .push(alias.name.clone());
    }

    versions
        .iter()
        .filter(|version| !version.is_latest())
        .map(|version| {
            let mut names = by_version.get(version).cloned().unwrap_or_default();
            names.sort();
            VersionUsage {
                version: version.clone(),
                aliases: names,
            }
        })
        .collect()
}
