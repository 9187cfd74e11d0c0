//! Cleanup report rendering
//!
//! Shared by deploy, teardown and the standalone cleanup command.

use serde_json::{json, Value};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use fnpilot::application::CleanupResult;
use fnpilot::domain::ports::ProviderError;

const RETRY_HINT: &str = "run `fnpilot cleanup` to retry the remaining deletes";

/// Fold a cleanup outcome into a summary box
pub fn add_cleanup_to_summary(
    summary: &mut ResultSummary,
    cleanup: Option<&CleanupResult>,
    error: Option<&ProviderError>,
) {
    if let Some(err) = error {
        summary.add_warning(format!("cleanup did not run to completion: {}", err));
        summary.with_next_step(RETRY_HINT);
        return;
    }
    let Some(cleanup) = cleanup else {
        return;
    };

    summary.add_stat("versions examined", cleanup.examined);
    summary.add_stat("versions deleted", cleanup.deleted_count());
    for failure in &cleanup.failures {
        summary.add_warning(format!(
            "version {} not deleted: {}",
            failure.version, failure.error
        ));
    }
    if !cleanup.is_success() {
        summary.with_next_step(RETRY_HINT);
    }
}

pub fn render_cleanup_header(function: &str, supports_color: bool, supports_unicode: bool) -> String {
    CommandHeader::for_function(Icon::Clean, "cleanup", function)
        .render(supports_color, supports_unicode)
}

pub fn render_cleanup_result(
    result: &CleanupResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = if result.is_success() {
        ResultSummary::success("Cleanup Complete")
    } else {
        ResultSummary::partial("Cleanup Incomplete")
    };
    add_cleanup_to_summary(&mut summary, Some(result), None);
    if result.candidate_count() == 0 {
        summary.add_info("every published version is referenced by an alias");
    }
    summary.render(supports_color, supports_unicode)
}

/// JSON view of a cleanup outcome, `null` when cleanup did not run
pub fn cleanup_json(cleanup: Option<&CleanupResult>, error: Option<&ProviderError>) -> Value {
    if let Some(err) = error {
        return json!({
            "status": "error",
            "error": err.to_string(),
        });
    }
    match cleanup {
        Some(cleanup) => json!({
            "status": if cleanup.is_success() { "success" } else { "partial" },
            "examined": cleanup.examined,
            "referenced": cleanup.referenced,
            "deleted": cleanup.deleted.iter().map(|v| v.as_str()).collect::<Vec<_>>(),
            "failed": cleanup
                .failures
                .iter()
                .map(|f| json!({ "version": f.version.as_str(), "error": f.error.to_string() }))
                .collect::<Vec<_>>(),
        }),
        None => Value::Null,
    }
}

pub fn cleanup_summary_json(function: &str, result: &CleanupResult) -> Value {
    json!({
        "event": "summary",
        "command": "cleanup",
        "function": function,
        "success": result.is_success(),
        "cleanup": cleanup_json(Some(result), None),
    })
}
