use crossterm::style::Color;
use dialoguer::theme::{ColorfulTheme, Theme};
use std::fmt;

/// Design tokens for the fnpilot CLI.
///
/// Only these semantic colors and icons are used by views.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";

    // Command identifiers (used in headers).
    pub const DEPLOY: &str = "📦";
    pub const TEARDOWN: &str = "⏏";
    pub const TRASH: &str = "🗑";
    pub const CLEAN: &str = "🧹";
    pub const STATUS: &str = "☰";
    pub const CHECK: &str = "🔍";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "[>]";

    pub const DEPLOY: &str = "[DEPLOY]";
    pub const TEARDOWN: &str = "[TEARDOWN]";
    pub const TRASH: &str = "[DEL]";
    pub const CLEAN: &str = "[CLEAN]";
    pub const STATUS: &str = "[STATUS]";
    pub const CHECK: &str = "[CHECK]";
}

/// Dialoguer theme for confirmation prompts.
///
/// Wraps `ColorfulTheme` when color is on and falls back to the plain
/// default formatting otherwise.
pub struct FnpilotTheme {
    color: bool,
    inner: ColorfulTheme,
}

impl FnpilotTheme {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            inner: ColorfulTheme::default(),
        }
    }
}

impl Theme for FnpilotTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        if self.color {
            self.inner.format_prompt(f, prompt)
        } else {
            write!(f, "{}:", prompt)
        }
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        if self.color {
            self.inner.format_error(f, err)
        } else {
            write!(f, "error: {}", err)
        }
    }

    fn format_confirm_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<bool>,
    ) -> fmt::Result {
        if self.color {
            return self.inner.format_confirm_prompt(f, prompt, default);
        }
        match default {
            Some(true) => write!(f, "{} [Y/n] ", prompt),
            Some(false) => write!(f, "{} [y/N] ", prompt),
            None => write!(f, "{} [y/n] ", prompt),
        }
    }

    fn format_confirm_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        selection: Option<bool>,
    ) -> fmt::Result {
        if self.color {
            return self
                .inner
                .format_confirm_prompt_selection(f, prompt, selection);
        }
        let answer = match selection {
            Some(true) => "yes",
            Some(false) => "no",
            None => "",
        };
        write!(f, "{} {}", prompt, answer)
    }
}
