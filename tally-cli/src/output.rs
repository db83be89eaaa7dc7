//! Terminal output: status lines and tables
//!
//! Status lines carry a one-character marker so they stay readable when
//! colors are off (NO_COLOR, pipes).

use colored::{ColoredString, Colorize};
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Success,
    Warning,
    Failure,
    Note,
}

fn marked(tone: Tone, msg: &str) -> String {
    let marker = match tone {
        Tone::Success => "✓",
        Tone::Warning => "!",
        Tone::Failure => "✗",
        Tone::Note => "•",
    };
    format!("{} {}", marker, msg)
}

fn paint(tone: Tone, msg: &str) -> ColoredString {
    let line = marked(tone, msg);
    match tone {
        Tone::Success => line.green(),
        Tone::Warning => line.yellow(),
        Tone::Failure => line.red(),
        Tone::Note => line.cyan(),
    }
}

pub fn success(msg: &str) {
    println!("{}", paint(Tone::Success, msg));
}

/// Failures go to stderr so JSON on stdout stays parseable
pub fn error(msg: &str) {
    eprintln!("{}", paint(Tone::Failure, msg));
}

pub fn warning(msg: &str) {
    println!("{}", paint(Tone::Warning, msg));
}

pub fn info(msg: &str) {
    println!("{}", paint(Tone::Note, msg));
}

/// Table with the condensed UTF-8 preset, wrapping to the terminal width
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marked_lines() {
        assert_eq!(marked(Tone::Success, "Transfer completed"), "✓ Transfer completed");
        assert_eq!(marked(Tone::Failure, "boom"), "✗ boom");
        assert!(marked(Tone::Warning, "careful").starts_with('!'));
    }

    #[test]
    fn test_table_has_header() {
        let mut table = create_table();
        table.set_header(vec!["Owner", "Balance"]);
        table.add_row(vec!["Ana", "10.00"]);
        let rendered = table.to_string();
        assert!(rendered.contains("Owner"));
        assert!(rendered.contains("10.00"));
    }
}
