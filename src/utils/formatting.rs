//! Formatting utilities used for CLI outputs.

use crate::utils::time::format_hours;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));

pub fn bold(s: &str) -> String {
    ansi_term::Style::new().bold().paint(s).to_string()
}

pub fn dimmed(s: &str) -> String {
    Colour::Fixed(244).paint(s).to_string()
}

/// Pad to `width` terminal columns, ignoring ANSI escapes.
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(visible)))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_width(s);
    format!("{}{}", " ".repeat(width.saturating_sub(visible)), s)
}

/// Terminal columns taken by `s` once ANSI escapes are stripped.
pub fn visible_width(s: &str) -> usize {
    ANSI_RE.replace_all(s, "").width()
}

/// Overtime hours, highlighted when non-zero.
pub fn overtime_cell(hours: f64) -> String {
    let text = format_hours(hours);
    if hours > 0.0 {
        Colour::Purple.bold().paint(text).to_string()
    } else {
        text
    }
}

/// First line of a note, cut to `width` columns.
pub fn note_preview(note: &str, width: usize) -> String {
    let width = width.max(2);
    let first_line = note.lines().next().unwrap_or("");
    if note.lines().count() <= 1 && first_line.width() <= width {
        return first_line.to_string();
    }
    let wrapped = textwrap::wrap(first_line, width - 1);
    let head = wrapped.first().map(|c| c.as_ref()).unwrap_or("");
    format!("{head}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_ignores_colour() {
        let coloured = overtime_cell(2.0);
        assert_eq!(visible_width(&coloured), 4);
        assert_eq!(visible_width(&pad_right(&coloured, 7)), 7);
        assert_eq!(pad_left("1.50", 6), "  1.50");
    }

    #[test]
    fn test_note_preview() {
        assert_eq!(note_preview("", 10), "");
        assert_eq!(note_preview("short", 10), "short");
        assert_eq!(note_preview("a rather long note about the day", 12), "a rather…");
        assert_eq!(note_preview("line one\nline two", 20), "line one…");
    }
}
