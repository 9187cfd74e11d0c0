//! Alias management
//!
//! Idempotent upsert and removal of the environment-named pointer to a
//! published version.

use crate::domain::entities::Alias;
use crate::domain::ports::{FunctionProvider, ProviderError, ProviderResult};
use crate::domain::services::collect_pages;
use crate::domain::value_objects::VersionId;

/// What an upsert did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasOutcome {
    Created(Alias),
    /// Existing alias repointed (possibly to the same version)
    Updated { previous: VersionId, alias: Alias },
}

impl AliasOutcome {
    pub fn alias(&self) -> &Alias {
        match self {
            AliasOutcome::Created(alias) => alias,
            AliasOutcome::Updated { alias, .. } => alias,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, AliasOutcome::Created(_))
    }
}

/// What a removal did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalOutcome {
    Removed,
    AlreadyAbsent,
}

/// Creates, repoints and removes aliases of one provider
pub struct AliasManager<P: FunctionProvider> {
    provider: P,
}

impl<P: FunctionProvider> AliasManager<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Every alias of `function`, across all pages
    pub fn list(&self, function: &str) -> ProviderResult<Vec<Alias>> {
        collect_pages(|marker| self.provider.list_aliases(function, marker))
    }

    pub fn find(&self, function: &str, alias: &str) -> ProviderResult<Option<Alias>> {
        Ok(self
            .list(function)?
            .into_iter()
            .find(|existing| existing.name == alias))
    }

    /// Point `alias` at `version`, creating the alias if needed.
    pub fn upsert(
        &self,
        function: &str,
        version: &VersionId,
        alias: &str,
        description: &str,
    ) -> ProviderResult<AliasOutcome> {
        match self.find(function, alias)? {
            None => {
                let created = self
                    .provider
                    .create_alias(function, alias, version, description)?;
                Ok(AliasOutcome::Created(created))
            }
            Some(existing) => {
                let updated = self
                    .provider
                    .update_alias(function, alias, version, description)?;
                Ok(AliasOutcome::Updated {
                    previous: existing.version,
                    alias: updated,
                })
            }
        }
    }

    /// Delete `alias`. A missing alias is a no-op; a missing function is an error.
    pub fn remove(&self, function: &str, alias: &str) -> ProviderResult<RemovalOutcome> {
        match self.provider.delete_alias(function, alias) {
            Ok(()) => Ok(RemovalOutcome::Removed),
            Err(ProviderError::AliasNotFound { .. }) => Ok(RemovalOutcome::AlreadyAbsent),
            Err(err) => Err(err),
        }
    }
}
