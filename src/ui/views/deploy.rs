//! Deploy command UI views

use serde_json::{json, Value};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::cleanup::{add_cleanup_to_summary, cleanup_json};
use fnpilot::application::{AliasOutcome, DeployResult};
use fnpilot::domain::entities::{Environment, FunctionSpec};

pub fn render_deploy_header(
    spec: &FunctionSpec,
    environment: &Environment,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::for_function(Icon::Deploy, "deploy", spec.name());
    header.add("Environment", environment.name());
    header.add("Package", spec.package().display().to_string());
    header.render(supports_color, supports_unicode)
}

fn alias_line(outcome: &AliasOutcome) -> String {
    match outcome {
        AliasOutcome::Created(alias) => {
            format!("alias {} created at version {}", alias.name, alias.version)
        }
        AliasOutcome::Updated { previous, alias } if previous == &alias.version => {
            format!("alias {} already at version {}", alias.name, alias.version)
        }
        AliasOutcome::Updated { previous, alias } => format!(
            "alias {} moved from version {} to {}",
            alias.name, previous, alias.version
        ),
    }
}

pub fn render_deploy_result(
    result: &DeployResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = if result.is_success() {
        ResultSummary::success("Deploy Complete")
    } else {
        ResultSummary::partial("Deployed, Cleanup Incomplete")
    };
    summary.add_info(format!(
        "{} {}, published version {} ({})",
        result.action.as_str(),
        result.function,
        result.version,
        result.code_digest.short()
    ));
    summary.add_info(alias_line(&result.alias));
    add_cleanup_to_summary(
        &mut summary,
        result.cleanup.as_ref(),
        result.cleanup_error.as_ref(),
    );
    summary.render(supports_color, supports_unicode)
}

pub fn deploy_summary_json(result: &DeployResult) -> Value {
    let (alias_action, previous) = match &result.alias {
        AliasOutcome::Created(_) => ("created", None),
        AliasOutcome::Updated { previous, .. } => ("updated", Some(previous.as_str())),
    };
    json!({
        "event": "summary",
        "command": "deploy",
        "function": result.function,
        "environment": result.environment,
        "success": result.is_success(),
        "action": result.action.as_str(),
        "version": result.version.as_str(),
        "code_sha256": result.code_digest.as_str(),
        "alias": {
            "name": result.alias.alias().name,
            "action": alias_action,
            "previous": previous,
            "version": result.alias.alias().version.as_str(),
        },
        "cleanup": cleanup_json(result.cleanup.as_ref(), result.cleanup_error.as_ref()),
    })
}
