use fnpilot::FnpilotError;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Hint shown under an error, when there is an obvious fix
fn recovery_hint(err: &FnpilotError) -> Option<String> {
    match err {
        FnpilotError::ConfigNotFound { path } => Some(format!(
            "Create {} or point --config at an existing file.",
            path.display()
        )),
        FnpilotError::InvalidConfig { .. } | FnpilotError::InvalidSpec(_) => {
            Some("Run `fnpilot check` for a full report.".to_string())
        }
        FnpilotError::MissingArtifact { .. } => {
            Some("Build the deployment package, or set FNPILOT_PACKAGE.".to_string())
        }
        FnpilotError::InvalidEnvOverride { key, .. } => {
            Some(format!("Fix or unset {key}."))
        }
        FnpilotError::ProviderNotConnected { .. } => {
            Some("Check [provider].state_dir or FNPILOT_PROVIDER_DIR.".to_string())
        }
        _ => None,
    }
}

pub fn format_fnpilot_error(
    err: &FnpilotError,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(err.to_string()).render(supports_color)
    );
    if let Some(hint) = recovery_hint(err) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            hint
        ));
    }
    out
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    if let Some(fnpilot) = err.downcast_ref::<FnpilotError>() {
        return format_fnpilot_error(fnpilot, supports_color, supports_unicode);
    }

    format!(
        "{} {:#}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        err
    )
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", format_error(err, ui.color, ui.unicode));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_config_has_hint() {
        let err = FnpilotError::ConfigNotFound {
            path: PathBuf::from("fnpilot.toml"),
        };
        let rendered = format_fnpilot_error(&err, false, false);
        insta::assert_snapshot!(rendered, @r"
        [FAIL] config file not found: fnpilot.toml
          [>] Create fnpilot.toml or point --config at an existing file.
        ");
    }

    #[test]
    fn bad_override_names_the_variable() {
        let err = FnpilotError::InvalidEnvOverride {
            key: "FNPILOT_PAGE_SIZE",
            value: "many".into(),
            expected: "a non-negative integer",
        };
        let rendered = format_fnpilot_error(&err, false, false);
        assert!(rendered.ends_with("[>] Fix or unset FNPILOT_PAGE_SIZE.\n"));
    }

    #[test]
    fn plain_anyhow_error_uses_alternate_format() {
        let err = anyhow::anyhow!("inner").context("outer");
        assert_eq!(format_error(&err, false, false), "[FAIL] outer: inner\n");
    }

    #[test]
    fn downcasts_wrapped_fnpilot_error() {
        let err = anyhow::Error::new(FnpilotError::MissingArtifact {
            path: PathBuf::from("dist/app.zip"),
        });
        let rendered = format_error(&err, false, false);
        assert!(rendered.contains("deployment package not found: dist/app.zip"));
        assert!(rendered.contains("FNPILOT_PACKAGE"));
    }
}
