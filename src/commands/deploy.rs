//! Deploy command handler

use std::path::Path;

use fnpilot::domain::ports::Operation;
use fnpilot::presentation::factory;

use super::{load_project, print_text, CommandResult};
use crate::ui::context::UiContext;
use crate::ui::json;
use crate::ui::views::deploy::{deploy_summary_json, render_deploy_header, render_deploy_result};

pub fn cmd_deploy(
    config_path: &Path,
    environment: &str,
    description: Option<String>,
    ui: &UiContext,
) -> CommandResult {
    let (config, spec) = load_project(config_path)?;
    let mut environment = config.environment(environment)?;
    if let Some(description) = description {
        environment = environment.with_description(description);
    }

    print_text(
        ui.json,
        &render_deploy_header(&spec, &environment, ui.color, ui.unicode),
    );

    let provider = factory::open_provider(&config)?;
    let events = factory::create_event_sink(ui.json, ui.verbose, ui.color, Operation::Deploy);
    let result = factory::create_deploy_use_case(provider).execute_with_events(
        &spec,
        &environment,
        events,
    )?;

    if ui.json {
        json::emit(deploy_summary_json(&result))?;
    } else {
        print!("{}", render_deploy_result(&result, ui.color, ui.unicode));
    }
    Ok(result.is_success())
}
