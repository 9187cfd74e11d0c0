//! Status command UI views

use serde_json::{json, Value};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use fnpilot::application::StatusReport;

pub fn render_status(report: &StatusReport, supports_color: bool, supports_unicode: bool) -> String {
    let mut header = CommandHeader::for_function(Icon::Status, "status", &report.function);

    let Some(details) = &report.details else {
        header.add("State", "not deployed");
        return header.render(supports_color, supports_unicode);
    };
    header.add(
        "Runtime",
        format!("{} ({})", details.runtime, details.handler),
    );
    header.add(
        "Limits",
        format!("{} MB, {} s", details.memory_size, details.timeout),
    );
    header.add(
        "Modified",
        details.last_modified.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    );

    let mut out = header.render(supports_color, supports_unicode);
    out.push('\n');
    if report.versions.is_empty() {
        out.push_str(&ColoredText::dim("no published versions").render(supports_color));
        out.push('\n');
    }
    for usage in &report.versions {
        let line = if usage.is_referenced() {
            format!(
                "  {} version {:<4} {}\n",
                Icon::Success.colored(supports_color, supports_unicode),
                usage.version.as_str(),
                usage.aliases.join(", ")
            )
        } else {
            format!(
                "  {} version {:<4} {}\n",
                Icon::Warning.colored(supports_color, supports_unicode),
                usage.version.as_str(),
                ColoredText::dim("unreferenced").render(supports_color)
            )
        };
        out.push_str(&line);
    }

    let unreferenced = report.unreferenced().len();
    if unreferenced > 0 {
        out.push_str(&format!(
            "\n  {} {} version(s) would be deleted by `fnpilot cleanup`\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            unreferenced
        ));
    }
    out
}

pub fn status_json(report: &StatusReport) -> Value {
    json!({
        "event": "status",
        "function": report.function,
        "exists": report.exists(),
        "details": report.details.as_ref().map(|d| json!({
            "runtime": d.runtime,
            "handler": d.handler,
            "role": d.role,
            "description": d.description,
            "timeout": d.timeout,
            "memory_size": d.memory_size,
            "code_sha256": d.code_sha256,
            "code_size": d.code_size,
            "last_modified": d.last_modified.to_rfc3339(),
        })),
        "aliases": report
            .aliases
            .iter()
            .map(|a| json!({ "name": a.name, "version": a.version.as_str() }))
            .collect::<Vec<_>>(),
        "versions": report
            .versions
            .iter()
            .map(|u| json!({ "version": u.version.as_str(), "aliases": u.aliases }))
            .collect::<Vec<_>>(),
        "unreferenced": report
            .unreferenced()
            .iter()
            .map(|v| v.as_str().to_string())
            .collect::<Vec<_>>(),
    })
}
