//! Cleanup command handler
//!
//! Runs version garbage collection on its own, regardless of the
//! `delete_unreferenced_versions` setting.

use std::path::Path;

use fnpilot::domain::ports::Operation;
use fnpilot::presentation::factory;

use super::{load_project, print_text, CommandResult};
use crate::ui::context::UiContext;
use crate::ui::json;
use crate::ui::views::cleanup::{
    cleanup_summary_json, render_cleanup_header, render_cleanup_result,
};

pub fn cmd_cleanup(config_path: &Path, ui: &UiContext) -> CommandResult {
    let (config, spec) = load_project(config_path)?;

    print_text(
        ui.json,
        &render_cleanup_header(spec.name(), ui.color, ui.unicode),
    );

    let provider = factory::open_provider(&config)?;
    let events = factory::create_event_sink(ui.json, ui.verbose, ui.color, Operation::Cleanup);
    let result = factory::create_cleanup_use_case(provider).execute_with_events(&spec, events)?;

    if ui.json {
        json::emit(cleanup_summary_json(spec.name(), &result))?;
    } else {
        print!("{}", render_cleanup_result(&result, ui.color, ui.unicode));
    }
    Ok(result.is_success())
}
