//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL};
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use owo_colors::{OwoColorize, Style};

use super::context::UiContext;

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Err,
    Info,
}

impl Badge {
    /// Get badge with symbol for display.
    pub fn display(&self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Self::Ok, true) => "[\u{2713}]",
            (Self::Ok, false) => "[OK]",
            (Self::Err, true) => "[\u{2717}]",
            (Self::Err, false) => "[ERR]",
            (Self::Info, true) => "[\u{2139}]",
            (Self::Info, false) => "[INFO]",
        }
    }

    fn style(&self) -> Style {
        match self {
            Self::Ok => Style::new().green(),
            Self::Err => Style::new().red().bold(),
            Self::Info => Style::new().cyan(),
        }
    }
}

fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let colored_badge = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.is_pretty() {
        let styled_key = styled(&format!("{}:", key), Style::new().dimmed(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.is_pretty() {
        let label = styled("Hint:", Style::new().dimmed(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Render a two-column summary table.
///
/// Pretty mode: bordered table
/// Plain mode: one `key=value` line per row
pub fn summary_table(ctx: &UiContext, rows: &[(&str, String)]) -> String {
    if !ctx.is_pretty() {
        return rows
            .iter()
            .map(|(key, value)| kv(ctx, key, value))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = Table::new();
    if ctx.unicode {
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(ASCII_MARKDOWN);
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);
    for (key, value) in rows {
        let mut key_cell = Cell::new(key);
        if ctx.color {
            key_cell = key_cell.add_attribute(Attribute::Dim);
        }
        table.add_row(vec![key_cell, Cell::new(value)]);
    }
    table.to_string()
}

/// Render an error message with an optional hint.
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut out = badge(ctx, Badge::Err, message);
    if let Some(text) = error_hint {
        out.push('\n');
        out.push_str(text);
    }
    out
}

/// Print an error to stderr.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_display() {
        assert_eq!(Badge::Ok.display(false), "[OK]");
        assert_eq!(Badge::Ok.display(true), "[\u{2713}]");
        assert_eq!(Badge::Err.display(false), "[ERR]");
    }

    #[test]
    fn test_kv_plain_and_pretty() {
        assert_eq!(kv(&UiContext::plain(), "Content size", "12"), "content_size=12");
        assert_eq!(kv(&UiContext::pretty(), "State", "unlocked"), "State: unlocked");
    }

    #[test]
    fn test_badge_without_color_has_no_escapes() {
        let out = badge(&UiContext::pretty(), Badge::Info, "careful");
        assert!(!out.contains('\x1b'));
        assert!(out.ends_with("careful"));
    }

    #[test]
    fn test_summary_table_plain_lines() {
        let rows = vec![("Format", "json".to_string()), ("State", "unlocked".to_string())];
        let out = summary_table(&UiContext::plain(), &rows);
        assert_eq!(out, "format=json\nstate=unlocked");
    }

    #[test]
    fn test_summary_table_pretty_contains_values() {
        let rows = vec![("Iterations", "200000".to_string())];
        let out = summary_table(&UiContext::pretty(), &rows);
        assert!(out.contains("Iterations"));
        assert!(out.contains("200000"));
    }

    #[test]
    fn test_error_message_with_hint() {
        let out = error_message(&UiContext::plain(), "Invalid password", Some("Hint: retry"));
        assert_eq!(out, "[ERR] Invalid password\nHint: retry");
    }

    #[test]
    fn test_retry_notice_is_a_single_error_line() {
        let out = error_message(&UiContext::plain(), "Invalid password", None);
        assert_eq!(out, "[ERR] Invalid password");
    }
}
