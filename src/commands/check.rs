//! Check command handler
//!
//! Validates the config file and package. Never opens the provider.

use std::path::Path;

use fnpilot::presentation::factory;

use super::{print_text, CommandResult};
use crate::ui::context::UiContext;
use crate::ui::json;
use crate::ui::views::check::{
    check_item_json, check_summary_json, render_check_header, render_check_item,
    render_check_summary,
};

pub fn cmd_check(config_path: &Path, ui: &UiContext) -> CommandResult {
    print_text(
        ui.json,
        &render_check_header(config_path, ui.color, ui.unicode),
    );

    let result = factory::create_check_use_case().execute_with_callback(config_path, |item| {
        if ui.json {
            let _ = json::emit(check_item_json(item));
        } else {
            print!("{}", render_check_item(item, ui.color, ui.unicode));
        }
    })?;

    if ui.json {
        json::emit(check_summary_json(&result))?;
    } else {
        println!();
        print!("{}", render_check_summary(&result, ui.color, ui.unicode));
    }
    Ok(result.is_success())
}
