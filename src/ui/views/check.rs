//! Check command UI views

use std::path::Path;

use serde_json::{json, Value};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use fnpilot::application::{CheckItem, CheckResult, CheckStatus};

pub fn render_check_header(config: &Path, supports_color: bool, supports_unicode: bool) -> String {
    let mut header = CommandHeader::new(Icon::Check, "check");
    header.add("Config", config.display().to_string());
    header.render(supports_color, supports_unicode)
}

pub fn render_check_item(item: &CheckItem, supports_color: bool, supports_unicode: bool) -> String {
    let icon = match item.status {
        CheckStatus::Pass => Icon::Success,
        CheckStatus::Warning => Icon::Warning,
        CheckStatus::Error => Icon::Error,
    }
    .colored(supports_color, supports_unicode);

    let mut out = format!("  {} {} - {}\n", icon, item.name, item.message);
    if let Some(rec) = &item.recommendation {
        out.push_str(&format!(
            "    {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            rec
        ));
    }
    out
}

pub fn render_check_summary(
    result: &CheckResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = if result.is_success() {
        ResultSummary::success("Configuration OK")
    } else {
        ResultSummary::partial("Configuration Has Errors")
    };
    summary.add_stat("passed", result.passed);
    summary.add_stat("warnings", result.warnings);
    summary.add_stat("errors", result.errors);
    if result.is_success() {
        summary.with_next_step("fnpilot deploy <environment>");
    }
    summary.render(supports_color, supports_unicode)
}

pub fn check_item_json(item: &CheckItem) -> Value {
    json!({
        "event": "check",
        "name": item.name,
        "status": item.status.as_str(),
        "message": item.message,
        "recommendation": item.recommendation,
    })
}

pub fn check_summary_json(result: &CheckResult) -> Value {
    json!({
        "event": "summary",
        "command": "check",
        "success": result.is_success(),
        "passed": result.passed,
        "warnings": result.warnings,
        "errors": result.errors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warning() -> CheckItem {
        CheckItem {
            name: "config".into(),
            status: CheckStatus::Warning,
            message: "unknown key 'function.handlr'".into(),
            recommendation: Some("Did you mean 'handler'?".into()),
        }
    }

    #[test]
    fn render_includes_recommendation_line() {
        let rendered = render_check_item(&warning(), false, false);
        assert_eq!(
            rendered,
            "  [WARN] config - unknown key 'function.handlr'\n    [>] Did you mean 'handler'?\n"
        );
    }

    #[test]
    fn item_json() {
        let value = check_item_json(&warning());
        assert_eq!(value["status"], "warning");
        assert_eq!(value["recommendation"], "Did you mean 'handler'?");
    }

    #[test]
    fn failing_summary_has_no_next_step() {
        let result = CheckResult {
            items: vec![],
            passed: 2,
            warnings: 0,
            errors: 1,
        };
        let rendered = render_check_summary(&result, false, false);
        assert!(rendered.starts_with("[WARN] Configuration Has Errors"));
        assert!(!rendered.contains("Next:"));
        assert_eq!(check_summary_json(&result)["success"], false);
    }
}
