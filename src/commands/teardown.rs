//! Teardown command handler

use std::path::Path;

use fnpilot::domain::ports::Operation;
use fnpilot::presentation::factory;

use super::{load_project, print_text, CommandResult};
use crate::ui::context::UiContext;
use crate::ui::json;
use crate::ui::views::teardown::{
    render_teardown_header, render_teardown_result, teardown_summary_json,
};

pub fn cmd_teardown(config_path: &Path, environment: &str, ui: &UiContext) -> CommandResult {
    let (config, spec) = load_project(config_path)?;
    let environment = config.environment(environment)?;

    print_text(
        ui.json,
        &render_teardown_header(spec.name(), environment.name(), ui.color, ui.unicode),
    );

    let provider = factory::open_provider(&config)?;
    let events = factory::create_event_sink(ui.json, ui.verbose, ui.color, Operation::Teardown);
    let result = factory::create_teardown_use_case(provider).execute_with_events(
        &spec,
        &environment,
        events,
    )?;

    if ui.json {
        json::emit(teardown_summary_json(&result))?;
    } else {
        print!("{}", render_teardown_result(&result, ui.color, ui.unicode));
    }
    Ok(result.is_success())
}
