//! Command handlers for the fnpilot binary
//!
//! Each handler returns `Ok(false)` when the command ran to the end but
//! reported failures (failed checks, versions cleanup could not delete), so
//! `main` can exit non-zero without printing an error.

pub mod check;
pub mod cleanup;
pub mod delete;
pub mod deploy;
pub mod status;
pub mod teardown;

use std::path::Path;

use anyhow::Result;

use fnpilot::config::Config;
use fnpilot::domain::entities::FunctionSpec;
use fnpilot::presentation::factory;

/// Outcome of a command handler; `false` means partial failure
pub type CommandResult = Result<bool>;

/// Config plus the validated function spec every provider command needs
pub(crate) fn load_project(config_path: &Path) -> Result<(Config, FunctionSpec)> {
    let config = factory::load_config(config_path)?;
    let spec = config.function_spec()?;
    Ok((config, spec))
}

/// Print rendered text on stdout, unless JSON mode owns stdout
pub(crate) fn print_text(json: bool, text: &str) {
    if !json {
        print!("{}", text);
    }
}
