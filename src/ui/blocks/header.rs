//! Header printed before a command touches the provider
//!
//! Every provider command acts on exactly one function, so the header
//! leads with it; commands then append their own `Label: value` rows.

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

#[derive(Debug, Clone)]
pub struct CommandHeader {
    icon: Icon,
    command: &'static str,
    rows: Vec<(&'static str, String)>,
}

impl CommandHeader {
    /// Header titled `fnpilot <command>` with no rows
    pub fn new(icon: Icon, command: &'static str) -> Self {
        Self {
            icon,
            command,
            rows: Vec::new(),
        }
    }

    /// Header whose first row names the function being managed
    pub fn for_function(icon: Icon, command: &'static str, function: &str) -> Self {
        let mut header = Self::new(icon, command);
        header.add("Function", function);
        header
    }

    pub fn add(&mut self, label: &'static str, value: impl Into<String>) {
        self.rows.push((label, value.into()));
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = ColoredText::info(format!("fnpilot {}", self.command))
            .bold()
            .render(supports_color);
        let mut out = format!(
            "{} {}\n",
            self.icon.colored(supports_color, supports_unicode),
            title
        );
        for (label, value) in &self.rows {
            out.push_str(&format!("{}: {}\n", label, value));
        }
        out
    }
}
