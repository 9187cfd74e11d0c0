//! Teardown and delete command UI views

use serde_json::{json, Value};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::cleanup::{add_cleanup_to_summary, cleanup_json};
use fnpilot::application::TeardownResult;

pub fn render_teardown_header(
    function: &str,
    environment: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::for_function(Icon::Teardown, "teardown", function);
    header.add("Environment", environment);
    header.render(supports_color, supports_unicode)
}

pub fn render_teardown_result(
    result: &TeardownResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = if result.is_success() {
        ResultSummary::success("Teardown Complete")
    } else {
        ResultSummary::partial("Torn Down, Cleanup Incomplete")
    };
    if result.alias_removed() {
        summary.add_info(format!("alias {} removed", result.environment));
    } else {
        summary.add_info(format!("alias {} was already absent", result.environment));
    }
    add_cleanup_to_summary(
        &mut summary,
        result.cleanup.as_ref(),
        result.cleanup_error.as_ref(),
    );
    summary.render(supports_color, supports_unicode)
}

pub fn teardown_summary_json(result: &TeardownResult) -> Value {
    json!({
        "event": "summary",
        "command": "teardown",
        "function": result.function,
        "environment": result.environment,
        "success": result.is_success(),
        "alias_removed": result.alias_removed(),
        "cleanup": cleanup_json(result.cleanup.as_ref(), result.cleanup_error.as_ref()),
    })
}

pub fn render_delete_header(function: &str, supports_color: bool, supports_unicode: bool) -> String {
    CommandHeader::for_function(Icon::Trash, "delete", function)
        .render(supports_color, supports_unicode)
}

pub fn render_delete_result(function: &str, supports_color: bool, supports_unicode: bool) -> String {
    let mut summary = ResultSummary::success("Function Deleted");
    summary.add_info(format!(
        "{} and all of its versions and aliases were removed",
        function
    ));
    summary.render(supports_color, supports_unicode)
}

pub fn delete_summary_json(function: &str, deleted: bool) -> Value {
    json!({
        "event": "summary",
        "command": "delete",
        "function": function,
        "success": deleted,
        "deleted": deleted,
    })
}
