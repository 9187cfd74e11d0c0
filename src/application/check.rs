//! Check Use Case
//!
//! Validates a configuration file without talking to the provider: the
//! file parses, the function spec validates, the package exists, and every
//! declared environment name is usable as an alias.

use std::path::Path;

use crate::config::Config;
use crate::domain::entities::FunctionSpec;
use crate::domain::ports::ArtifactSource;
use crate::error::FnpilotResult;

/// Result of a single check
#[derive(Debug, Clone)]
pub struct CheckItem {
    /// Name of the check
    pub name: String,
    pub status: CheckStatus,
    /// Human-readable message
    pub message: String,
    /// Recommendation for fixing issues
    pub recommendation: Option<String>,
}

/// Status of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "pass",
            CheckStatus::Warning => "warning",
            CheckStatus::Error => "error",
        }
    }
}

/// Result of the check operation
#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    /// All check items
    pub items: Vec<CheckItem>,
    pub passed: usize,
    pub warnings: usize,
    pub errors: usize,
}

impl CheckResult {
    /// Check if all checks passed (no errors)
    pub fn is_success(&self) -> bool {
        self.errors == 0
    }

    /// Check if all checks passed with no warnings
    pub fn is_clean(&self) -> bool {
        self.errors == 0 && self.warnings == 0
    }

    fn push(&mut self, item: CheckItem) {
        match item.status {
            CheckStatus::Pass => self.passed += 1,
            CheckStatus::Warning => self.warnings += 1,
            CheckStatus::Error => self.errors += 1,
        }
        self.items.push(item);
    }
}

fn item(name: &str, status: CheckStatus, message: impl Into<String>) -> CheckItem {
    CheckItem {
        name: name.to_string(),
        status,
        message: message.into(),
        recommendation: None,
    }
}

/// Check Use Case
pub struct CheckUseCase<A: ArtifactSource> {
    artifacts: A,
}

impl<A: ArtifactSource> CheckUseCase<A> {
    pub fn new(artifacts: A) -> Self {
        Self { artifacts }
    }

    /// Load `config_path` and run every check.
    ///
    /// Only I/O failures other than a missing or unparsable file are errors;
    /// everything else is reported as a failed check item.
    pub fn execute(&self, config_path: &Path) -> FnpilotResult<CheckResult> {
        self.execute_with_callback(config_path, |_| {})
    }

    /// Execute with a callback for each check (for streaming UI)
    pub fn execute_with_callback<F>(
        &self,
        config_path: &Path,
        mut on_check: F,
    ) -> FnpilotResult<CheckResult>
    where
        F: FnMut(&CheckItem),
    {
        let mut result = CheckResult::default();
        let mut report = |result: &mut CheckResult, item: CheckItem| {
            on_check(&item);
            result.push(item);
        };

        let (config, warnings) = match Config::load_with_warnings(config_path) {
            Ok(loaded) => loaded,
            Err(err @ crate::error::FnpilotError::Io(_)) => return Err(err),
            Err(err) => {
                let mut failed = item("config", CheckStatus::Error, err.to_string());
                failed.recommendation =
                    Some("Create or fix the config file, then run `fnpilot check` again.".into());
                report(&mut result, failed);
                return Ok(result);
            }
        };
        let config = match config.with_env_overrides() {
            Ok(config) => config,
            Err(err) => {
                let mut failed = item("environment overrides", CheckStatus::Error, err.to_string());
                failed.recommendation =
                    Some("Fix or unset the variable, then run `fnpilot check` again.".into());
                report(&mut result, failed);
                return Ok(result);
            }
        };

        report(
            &mut result,
            item(
                "config",
                CheckStatus::Pass,
                format!("loaded {}", config_path.display()),
            ),
        );
        for warning in warnings {
            let mut unknown = item(
                "config",
                CheckStatus::Warning,
                format!("unknown key '{}'", warning.key),
            );
            unknown.recommendation = warning
                .suggestion
                .map(|s| format!("Did you mean '{s}'?"));
            report(&mut result, unknown);
        }

        match config.function_spec() {
            Ok(spec) => {
                report(
                    &mut result,
                    item(
                        "function",
                        CheckStatus::Pass,
                        format!("{} ({})", spec.name(), spec.runtime()),
                    ),
                );
                report(&mut result, self.check_package(&spec));
            }
            Err(err) => report(&mut result, item("function", CheckStatus::Error, err.to_string())),
        }

        if config.environments.is_empty() {
            report(
                &mut result,
                item(
                    "environments",
                    CheckStatus::Pass,
                    "no environments declared; any valid name may be deployed",
                ),
            );
        }
        for name in config.environments.keys() {
            let checked = match config.environment(name) {
                Ok(environment) => item(
                    "environment",
                    CheckStatus::Pass,
                    format!("{} ({})", environment.name(), environment.description()),
                ),
                Err(err) => item("environment", CheckStatus::Error, err.to_string()),
            };
            report(&mut result, checked);
        }

        Ok(result)
    }

    fn check_package(&self, spec: &FunctionSpec) -> CheckItem {
        match self.artifacts.read(spec.package()) {
            Ok(bytes) if bytes.is_empty() => {
                let mut empty = item(
                    "package",
                    CheckStatus::Warning,
                    format!("{} is empty", spec.package().display()),
                );
                empty.recommendation = Some("Build the deployment package first.".into());
                empty
            }
            Ok(bytes) => item(
                "package",
                CheckStatus::Pass,
                format!("{} ({} bytes)", spec.package().display(), bytes.len()),
            ),
            Err(err) => {
                let mut missing = item("package", CheckStatus::Error, err.to_string());
                missing.recommendation = Some("Build the deployment package first.".into());
                missing
            }
        }
    }
}
