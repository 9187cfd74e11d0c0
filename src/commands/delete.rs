//! Delete command handler
//!
//! Removes the whole function. Asks for confirmation on a terminal and
//! refuses to run unattended without `--yes`.

use std::path::Path;

use anyhow::bail;
use dialoguer::Confirm;

use fnpilot::domain::ports::Operation;
use fnpilot::presentation::factory;

use super::{load_project, print_text, CommandResult};
use crate::ui::context::UiContext;
use crate::ui::json;
use crate::ui::theme::FnpilotTheme;
use crate::ui::views::teardown::{delete_summary_json, render_delete_header, render_delete_result};

pub fn cmd_delete(config_path: &Path, yes: bool, ui: &UiContext) -> CommandResult {
    let (config, spec) = load_project(config_path)?;

    print_text(
        ui.json,
        &render_delete_header(spec.name(), ui.color, ui.unicode),
    );

    if !yes {
        if !ui.interactive() {
            bail!(
                "refusing to delete function '{}' without confirmation; pass --yes",
                spec.name()
            );
        }
        let confirmed = Confirm::with_theme(&FnpilotTheme::new(ui.color))
            .with_prompt(format!(
                "Delete function '{}' with all of its versions and aliases?",
                spec.name()
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(true);
        }
    }

    let provider = factory::open_provider(&config)?;
    let events = factory::create_event_sink(ui.json, ui.verbose, ui.color, Operation::Delete);
    factory::create_delete_use_case(provider).execute_with_events(&spec, events)?;

    if ui.json {
        json::emit(delete_summary_json(spec.name(), true))?;
    } else {
        print!("{}", render_delete_result(spec.name(), ui.color, ui.unicode));
    }
    Ok(true)
}
