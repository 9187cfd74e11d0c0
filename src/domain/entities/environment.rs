//! Environment entity - a deployment target such as `staging` or `production`
//!
//! The environment name doubles as the alias name on the provider.

use thiserror::Error;

pub const DEFAULT_ENVIRONMENT_DESCRIPTION: &str = "Managed by fnpilot";
pub const MAX_ENVIRONMENT_NAME_LEN: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvironmentError {
    #[error(
        "invalid environment name '{name}': use 1-128 letters, digits, '-' or '_' \
         (not digits only)"
    )]
    InvalidName { name: String },
}

/// Deployment target supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    name: String,
    description: Option<String>,
}

impl Environment {
    pub fn new(name: impl Into<String>) -> Result<Self, EnvironmentError> {
        let name = name.into();
        if !is_valid_environment_name(&name) {
            return Err(EnvironmentError::InvalidName { name });
        }
        Ok(Self {
            name,
            description: None,
        })
    }

    /// Blank descriptions are ignored so the default applies.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        if !description.trim().is_empty() {
            self.description = Some(description);
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alias description, falling back to [`DEFAULT_ENVIRONMENT_DESCRIPTION`]
    pub fn description(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or(DEFAULT_ENVIRONMENT_DESCRIPTION)
    }
}

/// Digits-only names are rejected.
pub fn is_valid_environment_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_ENVIRONMENT_NAME_LEN
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        && !name.chars().all(|c| c.is_ascii_digit())
}
