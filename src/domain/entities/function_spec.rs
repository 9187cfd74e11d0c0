//! FunctionSpec entity - the desired state of the managed function
//!
//! A `FunctionSpec` is built once through [`FunctionSpecBuilder`], which
//! applies defaults field by field and validates eagerly. Once built it is
//! never mutated; every use case reads from it.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::function::FunctionConfiguration;
use crate::domain::value_objects::{MismatchedPlacement, NetworkPlacement, Runtime};

pub const DEFAULT_DESCRIPTION: &str = "Deployed with fnpilot";
pub const DEFAULT_TIMEOUT_SECS: u32 = 30;
pub const DEFAULT_MEMORY_SIZE_MB: u32 = 128;

pub const MIN_MEMORY_SIZE_MB: u32 = 128;
pub const MAX_MEMORY_SIZE_MB: u32 = 1536;
pub const MEMORY_SIZE_STEP_MB: u32 = 64;

pub const MIN_TIMEOUT_SECS: u32 = 1;
pub const MAX_TIMEOUT_SECS: u32 = 900;

pub const MAX_FUNCTION_NAME_LEN: usize = 64;

/// Validation failure while building a [`FunctionSpec`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("invalid function name '{name}': use 1-64 letters, digits, '-' or '_'")]
    InvalidName { name: String },

    #[error("unsupported runtime '{runtime}'")]
    UnsupportedRuntime { runtime: String },

    #[error(
        "memory size {memory_size} MB is outside {}..={} MB",
        MIN_MEMORY_SIZE_MB,
        MAX_MEMORY_SIZE_MB
    )]
    MemorySizeOutOfRange { memory_size: u32 },

    #[error(
        "memory size {memory_size} MB is not a multiple of {} MB",
        MEMORY_SIZE_STEP_MB
    )]
    MemorySizeNotAligned { memory_size: u32 },

    #[error(
        "timeout {timeout}s is outside {}..={} seconds",
        MIN_TIMEOUT_SECS,
        MAX_TIMEOUT_SECS
    )]
    TimeoutOutOfRange { timeout: u32 },

    #[error(transparent)]
    NetworkPlacement(#[from] MismatchedPlacement),
}

/// Immutable description of the function being managed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSpec {
    name: String,
    handler: String,
    role: String,
    package: PathBuf,
    runtime: Runtime,
    description: String,
    timeout: u32,
    memory_size: u32,
    network: Option<NetworkPlacement>,
    delete_unreferenced_versions: bool,
}

impl FunctionSpec {
    pub fn builder(name: impl Into<String>) -> FunctionSpecBuilder {
        FunctionSpecBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entry point invoked by the runtime (e.g. `index.handler`)
    pub fn handler(&self) -> &str {
        &self.handler
    }

    /// Execution role the function assumes
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Location of the deployment package
    pub fn package(&self) -> &Path {
        &self.package
    }

    pub fn runtime(&self) -> Runtime {
        self.runtime
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Timeout in seconds
    pub fn timeout(&self) -> u32 {
        self.timeout
    }

    /// Memory size in MB
    pub fn memory_size(&self) -> u32 {
        self.memory_size
    }

    pub fn network(&self) -> Option<&NetworkPlacement> {
        self.network.as_ref()
    }

    /// Whether unreferenced versions are collected after deploy and teardown
    pub fn delete_unreferenced_versions(&self) -> bool {
        self.delete_unreferenced_versions
    }

    /// Configuration pushed to the provider on create and update
    pub fn configuration(&self) -> FunctionConfiguration {
        FunctionConfiguration {
            name: self.name.clone(),
            runtime: self.runtime,
            role: self.role.clone(),
            handler: self.handler.clone(),
            description: self.description.clone(),
            timeout: self.timeout,
            memory_size: self.memory_size,
            network: self.network.clone(),
        }
    }
}

/// Collects raw fields for a [`FunctionSpec`]
///
/// Unset optional fields fall back to the `DEFAULT_*` constants in
/// [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct FunctionSpecBuilder {
    name: String,
    handler: Option<String>,
    role: Option<String>,
    package: Option<PathBuf>,
    runtime: Option<String>,
    description: Option<String>,
    timeout: Option<u32>,
    memory_size: Option<u32>,
    subnet_ids: Vec<String>,
    security_group_ids: Vec<String>,
    delete_unreferenced_versions: Option<bool>,
}

impl FunctionSpecBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_handler(mut self, handler: impl Into<String>) -> Self {
        self.handler = Some(handler.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_package(mut self, package: impl Into<PathBuf>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn with_runtime(mut self, runtime: impl Into<String>) -> Self {
        self.runtime = Some(runtime.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_timeout(mut self, timeout: u32) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_memory_size(mut self, memory_size: u32) -> Self {
        self.memory_size = Some(memory_size);
        self
    }

    pub fn with_subnet_ids(mut self, subnet_ids: Vec<String>) -> Self {
        self.subnet_ids = subnet_ids;
        self
    }

    pub fn with_security_group_ids(mut self, security_group_ids: Vec<String>) -> Self {
        self.security_group_ids = security_group_ids;
        self
    }

    pub fn with_delete_unreferenced_versions(mut self, enabled: bool) -> Self {
        self.delete_unreferenced_versions = Some(enabled);
        self
    }

    /// Apply defaults and validate every field
    pub fn build(self) -> Result<FunctionSpec, SpecError> {
        let name = self.name.trim().to_string();
        if !is_valid_function_name(&name) {
            return Err(SpecError::InvalidName { name: self.name });
        }

        let handler = required(self.handler, "handler")?;
        let role = required(self.role, "role")?;
        let package = self
            .package
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(SpecError::MissingField { field: "package" })?;

        let runtime_raw = required(self.runtime, "runtime")?;
        let runtime = runtime_raw
            .parse::<Runtime>()
            .map_err(|_| SpecError::UnsupportedRuntime {
                runtime: runtime_raw.clone(),
            })?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS);
        validate_timeout(timeout)?;

        let memory_size = self.memory_size.unwrap_or(DEFAULT_MEMORY_SIZE_MB);
        validate_memory_size(memory_size)?;

        let network = NetworkPlacement::from_lists(self.subnet_ids, self.security_group_ids)?;

        Ok(FunctionSpec {
            name,
            handler,
            role,
            package,
            runtime,
            description: self
                .description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            timeout,
            memory_size,
            network,
            delete_unreferenced_versions: self.delete_unreferenced_versions.unwrap_or(true),
        })
    }
}

/// Function names: 1-64 characters of `[A-Za-z0-9_-]`
pub fn is_valid_function_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_FUNCTION_NAME_LEN
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

pub fn validate_memory_size(memory_size: u32) -> Result<(), SpecError> {
    if !(MIN_MEMORY_SIZE_MB..=MAX_MEMORY_SIZE_MB).contains(&memory_size) {
        return Err(SpecError::MemorySizeOutOfRange { memory_size });
    }
    if memory_size % MEMORY_SIZE_STEP_MB != 0 {
        return Err(SpecError::MemorySizeNotAligned { memory_size });
    }
    Ok(())
}

pub fn validate_timeout(timeout: u32) -> Result<(), SpecError> {
    if (MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&timeout) {
        Ok(())
    } else {
        Err(SpecError::TimeoutOutOfRange { timeout })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, SpecError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(SpecError::MissingField { field })
}
