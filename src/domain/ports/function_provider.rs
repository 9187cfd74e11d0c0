//! FunctionProvider port - abstraction over the function hosting platform
//!
//! Each method maps to one call of a cloud function-hosting API. Use cases
//! orchestrate these calls; implementations live in the infrastructure layer.

use thiserror::Error;

use crate::domain::entities::{Alias, FunctionConfiguration, FunctionDetails, FunctionVersion};
use crate::domain::services::Page;
use crate::domain::value_objects::VersionId;

/// Result type for provider calls
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Provider call failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("function '{function}' not found")]
    FunctionNotFound { function: String },

    #[error("alias '{alias}' not found on function '{function}'")]
    AliasNotFound { function: String, alias: String },

    #[error("version {version} not found on function '{function}'")]
    VersionNotFound { function: String, version: VersionId },

    #[error("conflict: {message}")]
    Conflict { message: String },

    #[error("invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("request throttled by provider")]
    Throttled,

    #[error("provider unavailable: {message}")]
    Unavailable { message: String },

    #[error("provider storage error: {message}")]
    Storage { message: String },
}

impl ProviderError {
    /// True when the function itself does not exist
    pub fn is_function_not_found(&self) -> bool {
        matches!(self, ProviderError::FunctionNotFound { .. })
    }
}

/// Abstract function hosting platform
///
/// Implementations:
/// - `InMemoryProvider` - in-process emulation (tests, embedding)
/// - `TomlProviderStore` - local emulation persisted to a state directory
pub trait FunctionProvider {
    /// Probe that the provider can be talked to at all
    fn check_connection(&self) -> ProviderResult<()>;

    /// Current configuration of `name`, or `FunctionNotFound`
    fn get_function(&self, name: &str) -> ProviderResult<FunctionDetails>;

    /// Create the function; with `publish` an initial version is issued
    /// atomically and returned, otherwise `$LATEST` is returned.
    fn create_function(
        &self,
        configuration: &FunctionConfiguration,
        code: &[u8],
        publish: bool,
    ) -> ProviderResult<VersionId>;

    /// Replace configuration fields. Never publishes.
    fn update_function_configuration(
        &self,
        configuration: &FunctionConfiguration,
    ) -> ProviderResult<()>;

    /// Replace code; with `publish` a new version is issued and returned.
    fn update_function_code(
        &self,
        name: &str,
        code: &[u8],
        publish: bool,
    ) -> ProviderResult<VersionId>;

    /// Delete one version (`Some(qualifier)`) or the whole function (`None`)
    fn delete_function(&self, name: &str, qualifier: Option<&VersionId>) -> ProviderResult<()>;

    fn list_versions(
        &self,
        name: &str,
        marker: Option<&str>,
    ) -> ProviderResult<Page<FunctionVersion>>;

    fn list_aliases(&self, name: &str, marker: Option<&str>) -> ProviderResult<Page<Alias>>;

    fn create_alias(
        &self,
        name: &str,
        alias: &str,
        version: &VersionId,
        description: &str,
    ) -> ProviderResult<Alias>;

    fn update_alias(
        &self,
        name: &str,
        alias: &str,
        version: &VersionId,
        description: &str,
    ) -> ProviderResult<Alias>;

    fn delete_alias(&self, name: &str, alias: &str) -> ProviderResult<()>;
}

impl<P: FunctionProvider + ?Sized> FunctionProvider for &P {
    fn check_connection(&self) -> ProviderResult<()> {
        (**self).check_connection()
    }

    fn get_function(&self, name: &str) -> ProviderResult<FunctionDetails> {
        (**self).get_function(name)
    }

    fn create_function(
        &self,
        configuration: &FunctionConfiguration,
        code: &[u8],
        publish: bool,
    ) -> ProviderResult<VersionId> {
        (**self).create_function(configuration, code, publish)
    }

    fn update_function_configuration(
        &self,
        configuration: &FunctionConfiguration,
    ) -> ProviderResult<()> {
        (**self).update_function_configuration(configuration)
    }

    fn update_function_code(
        &self,
        name: &str,
        code: &[u8],
        publish: bool,
    ) -> ProviderResult<VersionId> {
        (**self).update_function_code(name, code, publish)
    }

    fn delete_function(&self, name: &str, qualifier: Option<&VersionId>) -> ProviderResult<()> {
        (**self).delete_function(name, qualifier)
    }

    fn list_versions(
        &self,
        name: &str,
        marker: Option<&str>,
    ) -> ProviderResult<Page<FunctionVersion>> {
        (**self).list_versions(name, marker)
    }

    fn list_aliases(&self, name: &str, marker: Option<&str>) -> ProviderResult<Page<Alias>> {
        (**self).list_aliases(name, marker)
    }

    fn create_alias(
        &self,
        name: &str,
        alias: &str,
        version: &VersionId,
        description: &str,
    ) -> ProviderResult<Alias> {
        (**self).create_alias(name, alias, version, description)
    }

    fn update_alias(
        &self,
        name: &str,
        alias: &str,
        version: &VersionId,
        description: &str,
    ) -> ProviderResult<Alias> {
        (**self).update_alias(name, alias, version, description)
    }

    fn delete_alias(&self, name: &str, alias: &str) -> ProviderResult<()> {
        (**self).delete_alias(name, alias)
    }
}
