//! Status command handler

use std::path::Path;

use fnpilot::presentation::factory;

use super::{load_project, CommandResult};
use crate::ui::context::UiContext;
use crate::ui::json;
use crate::ui::views::status::{render_status, status_json};

pub fn cmd_status(config_path: &Path, ui: &UiContext) -> CommandResult {
    let (config, spec) = load_project(config_path)?;

    let provider = factory::open_provider(&config)?;
    let report = factory::create_status_use_case(provider).execute(&spec)?;

    if ui.json {
        json::emit(status_json(&report))?;
    } else {
        print!("{}", render_status(&report, ui.color, ui.unicode));
    }
    Ok(true)
}
