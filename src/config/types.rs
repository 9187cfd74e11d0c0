//! Configuration types

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Environment, FunctionSpec, SpecError};
use crate::error::{FnpilotError, FnpilotResult};
use crate::infrastructure::provider::DEFAULT_PAGE_SIZE;

use super::loader::{self, ConfigWarning};

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "fnpilot.toml";

/// `[function]` section
///
/// Every field is optional at the parse layer; [`Config::function_spec`]
/// applies defaults and validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub handler: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    /// Deployment package path, relative to the config file
    #[serde(default)]
    pub package: Option<PathBuf>,
    #[serde(default)]
    pub runtime: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub timeout: Option<u32>,
    #[serde(default)]
    pub memory_size: Option<u32>,
    #[serde(default)]
    pub delete_unreferenced_versions: Option<bool>,
    #[serde(default)]
    pub vpc: VpcConfig,
}

/// `[function.vpc]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VpcConfig {
    #[serde(default)]
    pub subnet_ids: Vec<String>,
    #[serde(default)]
    pub security_group_ids: Vec<String>,
}

/// `[provider]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Where the local provider keeps its state
    #[serde(default)]
    pub state_dir: Option<PathBuf>,
    #[serde(default)]
    pub page_size: Option<usize>,
}

/// `[environments.<name>]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    #[serde(default)]
    pub description: Option<String>,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub function: FunctionConfig,

    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub environments: BTreeMap<String, EnvironmentConfig>,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Relative paths inside the file are resolved against its directory.
    pub fn load(path: &Path) -> FnpilotResult<Self> {
        Self::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> FnpilotResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Parse TOML text without touching the file system
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply environment variable overrides (FNPILOT_* prefix)
    pub fn with_env_overrides(self) -> FnpilotResult<Self> {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// Make relative package and state paths absolute against `base`.
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        if let Some(package) = self.function.package.take() {
            self.function.package = Some(resolve(base, package));
        }
        if let Some(state_dir) = self.provider.state_dir.take() {
            self.provider.state_dir = Some(resolve(base, state_dir));
        }
        self
    }

    /// Validated function spec built from `[function]`
    pub fn function_spec(&self) -> FnpilotResult<FunctionSpec> {
        let function = &self.function;
        let name = function
            .name
            .clone()
            .ok_or(SpecError::MissingField { field: "name" })?;

        let mut builder = FunctionSpec::builder(name)
            .with_subnet_ids(function.vpc.subnet_ids.clone())
            .with_security_group_ids(function.vpc.security_group_ids.clone());
        if let Some(handler) = &function.handler {
            builder = builder.with_handler(handler.clone());
        }
        if let Some(role) = &function.role {
            builder = builder.with_role(role.clone());
        }
        if let Some(package) = &function.package {
            builder = builder.with_package(package.clone());
        }
        if let Some(runtime) = &function.runtime {
            builder = builder.with_runtime(runtime.clone());
        }
        if let Some(description) = &function.description {
            builder = builder.with_description(description.clone());
        }
        if let Some(timeout) = function.timeout {
            builder = builder.with_timeout(timeout);
        }
        if let Some(memory_size) = function.memory_size {
            builder = builder.with_memory_size(memory_size);
        }
        if let Some(enabled) = function.delete_unreferenced_versions {
            builder = builder.with_delete_unreferenced_versions(enabled);
        }

        Ok(builder.build()?)
    }

    /// Validated environment, with its configured description if any.
    ///
    /// Environments need not be declared in the file.
    pub fn environment(&self, name: &str) -> FnpilotResult<Environment> {
        let environment = Environment::new(name)?;
        Ok(
            match self
                .environments
                .get(name)
                .and_then(|env| env.description.clone())
            {
                Some(description) => environment.with_description(description),
                None => environment,
            },
        )
    }

    /// Provider state directory, falling back to the per-user data dir
    pub fn state_dir(&self) -> PathBuf {
        self.provider
            .state_dir
            .clone()
            .unwrap_or_else(loader::default_state_dir)
    }

    pub fn page_size(&self) -> usize {
        self.provider
            .page_size
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Check every declared environment name
    pub fn validate_environments(&self) -> FnpilotResult<()> {
        for name in self.environments.keys() {
            Environment::new(name.as_str()).map_err(FnpilotError::from)?;
        }
        Ok(())
    }
}

fn resolve(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
