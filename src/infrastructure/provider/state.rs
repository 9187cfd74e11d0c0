//! Provider State Model
//!
//! The function/version/alias bookkeeping shared by the in-memory provider
//! and the on-disk TOML store. Both adapters delegate every port operation
//! here so they agree on error cases and paging.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Alias, FunctionConfiguration, FunctionDetails, FunctionVersion};
use crate::domain::ports::{ProviderError, ProviderResult};
use crate::domain::services::Page;
use crate::domain::value_objects::{CodeDigest, NetworkPlacement, Runtime, VersionId};

/// Current on-disk format version
pub const STATE_FORMAT_VERSION: u32 = 1;

/// Default number of entries per listing page
pub const DEFAULT_PAGE_SIZE: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderState {
    pub version: u32,
    #[serde(default)]
    pub functions: BTreeMap<String, StoredFunction>,
}

/// A function's unpublished (`$LATEST`) state plus its history
///
/// Plain values precede tables so the struct serializes to TOML as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFunction {
    pub runtime: Runtime,
    pub role: String,
    pub handler: String,
    pub description: String,
    pub timeout: u32,
    pub memory_size: u32,
    pub code_sha256: String,
    pub code_size: u64,
    pub last_modified: DateTime<Utc>,
    /// Number the next published version receives
    pub next_version: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<NetworkPlacement>,
    #[serde(default)]
    pub versions: Vec<StoredVersion>,
    #[serde(default)]
    pub aliases: BTreeMap<String, StoredAlias>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredVersion {
    pub version: VersionId,
    pub description: String,
    pub runtime: Runtime,
    pub handler: String,
    pub timeout: u32,
    pub memory_size: u32,
    pub code_sha256: String,
    pub last_modified: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredAlias {
    pub version: VersionId,
    #[serde(default)]
    pub description: String,
}

impl Default for ProviderState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderState {
    pub fn new() -> Self {
        Self {
            version: STATE_FORMAT_VERSION,
            functions: BTreeMap::new(),
        }
    }

    fn function(&self, name: &str) -> ProviderResult<&StoredFunction> {
        self.functions
            .get(name)
            .ok_or_else(|| ProviderError::FunctionNotFound {
                function: name.to_string(),
            })
    }

    fn function_mut(&mut self, name: &str) -> ProviderResult<&mut StoredFunction> {
        self.functions
            .get_mut(name)
            .ok_or_else(|| ProviderError::FunctionNotFound {
                function: name.to_string(),
            })
    }

    pub fn get_function(&self, name: &str) -> ProviderResult<FunctionDetails> {
        let function = self.function(name)?;
        Ok(FunctionDetails {
            name: name.to_string(),
            runtime: function.runtime.to_string(),
            role: function.role.clone(),
            handler: function.handler.clone(),
            description: function.description.clone(),
            timeout: function.timeout,
            memory_size: function.memory_size,
            network: function.network.clone(),
            code_sha256: function.code_sha256.clone(),
            code_size: function.code_size,
            last_modified: function.last_modified,
        })
    }

    pub fn create_function(
        &mut self,
        configuration: &FunctionConfiguration,
        code: &[u8],
        publish: bool,
        now: DateTime<Utc>,
    ) -> ProviderResult<VersionId> {
        if self.functions.contains_key(&configuration.name) {
            return Err(ProviderError::Conflict {
                message: format!("function '{}' already exists", configuration.name),
            });
        }

        let mut function = StoredFunction {
            runtime: configuration.runtime,
            role: configuration.role.clone(),
            handler: configuration.handler.clone(),
            description: configuration.description.clone(),
            timeout: configuration.timeout,
            memory_size: configuration.memory_size,
            code_sha256: CodeDigest::of(code).into(),
            code_size: code.len() as u64,
            last_modified: now,
            next_version: 1,
            network: configuration.network.clone(),
            versions: Vec::new(),
            aliases: BTreeMap::new(),
        };
        let version = if publish {
            function.publish(now)
        } else {
            VersionId::latest()
        };
        self.functions.insert(configuration.name.clone(), function);
        Ok(version)
    }

    pub fn update_configuration(
        &mut self,
        configuration: &FunctionConfiguration,
        now: DateTime<Utc>,
    ) -> ProviderResult<()> {
        let function = self.function_mut(&configuration.name)?;
        function.runtime = configuration.runtime;
        function.role = configuration.role.clone();
        function.handler = configuration.handler.clone();
        function.description = configuration.description.clone();
        function.timeout = configuration.timeout;
        function.memory_size = configuration.memory_size;
        function.network = configuration.network.clone();
        function.last_modified = now;
        Ok(())
    }

    pub fn update_code(
        &mut self,
        name: &str,
        code: &[u8],
        publish: bool,
        now: DateTime<Utc>,
    ) -> ProviderResult<VersionId> {
        let function = self.function_mut(name)?;
        function.code_sha256 = CodeDigest::of(code).into();
        function.code_size = code.len() as u64;
        function.last_modified = now;
        Ok(if publish {
            function.publish(now)
        } else {
            VersionId::latest()
        })
    }

    /// Delete the whole function, or a single published version of it.
    pub fn delete_function(
        &mut self,
        name: &str,
        qualifier: Option<&VersionId>,
    ) -> ProviderResult<()> {
        let Some(version) = qualifier else {
            return self
                .functions
                .remove(name)
                .map(|_| ())
                .ok_or_else(|| ProviderError::FunctionNotFound {
                    function: name.to_string(),
                });
        };

        if version.is_latest() {
            return Err(ProviderError::InvalidRequest {
                message: format!(
                    "cannot delete {} of '{name}'; delete the function instead",
                    VersionId::LATEST
                ),
            });
        }

        let function = self.function_mut(name)?;
        let position = function
            .versions
            .iter()
            .position(|v| &v.version == version)
            .ok_or_else(|| ProviderError::VersionNotFound {
                function: name.to_string(),
                version: version.clone(),
            })?;

        if let Some((alias, _)) = function
            .aliases
            .iter()
            .find(|(_, alias)| &alias.version == version)
        {
            return Err(ProviderError::Conflict {
                message: format!("version {version} of '{name}' is referenced by alias '{alias}'"),
            });
        }

        function.versions.remove(position);
        Ok(())
    }

    /// `$LATEST` first, then published versions in ascending order
    pub fn list_versions(
        &self,
        name: &str,
        marker: Option<&str>,
        page_size: usize,
    ) -> ProviderResult<Page<FunctionVersion>> {
        let function = self.function(name)?;
        let latest = FunctionVersion {
            version: VersionId::latest(),
            description: function.description.clone(),
            runtime: function.runtime.to_string(),
            handler: function.handler.clone(),
            timeout: function.timeout,
            memory_size: function.memory_size,
            code_sha256: function.code_sha256.clone(),
            last_modified: function.last_modified,
        };
        let all = std::iter::once(latest)
            .chain(function.versions.iter().map(StoredVersion::to_listing))
            .collect();
        paginate(all, marker, page_size)
    }

    /// Aliases ordered by name
    pub fn list_aliases(
        &self,
        name: &str,
        marker: Option<&str>,
        page_size: usize,
    ) -> ProviderResult<Page<Alias>> {
        let function = self.function(name)?;
        let all = function
            .aliases
            .iter()
            .map(|(alias, stored)| {
                Alias::new(alias.clone(), stored.version.clone(), stored.description.clone())
            })
            .collect();
        paginate(all, marker, page_size)
    }

    pub fn create_alias(
        &mut self,
        name: &str,
        alias: &str,
        version: &VersionId,
        description: &str,
    ) -> ProviderResult<Alias> {
        let function = self.function_mut(name)?;
        if function.aliases.contains_key(alias) {
            return Err(ProviderError::Conflict {
                message: format!("alias '{alias}' of '{name}' already exists"),
            });
        }
        function.require_version(name, version)?;
        function.aliases.insert(
            alias.to_string(),
            StoredAlias {
                version: version.clone(),
                description: description.to_string(),
            },
        );
        Ok(Alias::new(alias, version.clone(), description))
    }

    pub fn update_alias(
        &mut self,
        name: &str,
        alias: &str,
        version: &VersionId,
        description: &str,
    ) -> ProviderResult<Alias> {
        let function = self.function_mut(name)?;
        if !function.aliases.contains_key(alias) {
            return Err(ProviderError::AliasNotFound {
                function: name.to_string(),
                alias: alias.to_string(),
            });
        }
        function.require_version(name, version)?;
        function.aliases.insert(
            alias.to_string(),
            StoredAlias {
                version: version.clone(),
                description: description.to_string(),
            },
        );
        Ok(Alias::new(alias, version.clone(), description))
    }

    pub fn delete_alias(&mut self, name: &str, alias: &str) -> ProviderResult<()> {
        let function = self.function_mut(name)?;
        function
            .aliases
            .remove(alias)
            .map(|_| ())
            .ok_or_else(|| ProviderError::AliasNotFound {
                function: name.to_string(),
                alias: alias.to_string(),
            })
    }
}

impl StoredFunction {
    /// Snapshot `$LATEST` as the next numbered version.
    fn publish(&mut self, now: DateTime<Utc>) -> VersionId {
        let version = VersionId::new(self.next_version.to_string());
        self.next_version += 1;
        self.versions.push(StoredVersion {
            version: version.clone(),
            description: self.description.clone(),
            runtime: self.runtime,
            handler: self.handler.clone(),
            timeout: self.timeout,
            memory_size: self.memory_size,
            code_sha256: self.code_sha256.clone(),
            last_modified: now,
        });
        version
    }

    fn require_version(&self, name: &str, version: &VersionId) -> ProviderResult<()> {
        if version.is_latest() || self.versions.iter().any(|v| &v.version == version) {
            Ok(())
        } else {
            Err(ProviderError::VersionNotFound {
                function: name.to_string(),
                version: version.clone(),
            })
        }
    }
}

impl StoredVersion {
    fn to_listing(&self) -> FunctionVersion {
        FunctionVersion {
            version: self.version.clone(),
            description: self.description.clone(),
            runtime: self.runtime.to_string(),
            handler: self.handler.clone(),
            timeout: self.timeout,
            memory_size: self.memory_size,
            code_sha256: self.code_sha256.clone(),
            last_modified: self.last_modified,
        }
    }
}

/// Slice `items` at an offset marker. The last page carries no marker.
fn paginate<T>(items: Vec<T>, marker: Option<&str>, page_size: usize) -> ProviderResult<Page<T>> {
    let start = match marker {
        None => 0,
        Some(raw) => raw
            .parse::<usize>()
            .ok()
            .filter(|offset| *offset <= items.len())
            .ok_or_else(|| ProviderError::InvalidRequest {
                message: format!("invalid pagination marker '{raw}'"),
            })?,
    };
    let total = items.len();
    let end = start.saturating_add(page_size.max(1)).min(total);
    let page: Vec<T> = items.into_iter().skip(start).take(end - start).collect();

    if end < total {
        Ok(Page::with_marker(page, end.to_string()))
    } else {
        Ok(Page::last(page))
    }
}
