//! Configuration module for fnpilot
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FNPILOT_*)
//! 3. Config file (`fnpilot.toml` by default)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{default_state_dir, parse_with_unknown_keys, with_env_overrides, ConfigWarning};
pub use types::{
    Config, EnvironmentConfig, FunctionConfig, ProviderConfig, VpcConfig, DEFAULT_CONFIG_FILE,
};
