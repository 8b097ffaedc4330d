use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::section_title;
use super::theme::Theme;

pub fn build_help_text() -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "  Key bindings",
        Style::default()
            .fg(Theme::figure())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Global"));
    lines.extend(section_lines(&[
        "Tab / Shift+Tab: Next / previous tab",
        "F1: Toggle help",
        "esc: Close help, otherwise quit",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Color"));
    lines.extend(section_lines(&[
        "Up/Down: Switch between HEX, RGB and HSL",
        "Type or paste: Edit the field, other fields follow once it is valid",
        "Left/Right: Select a recent color, Enter: apply it",
        "Delete: Clear the field",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Text"));
    lines.extend(section_lines(&[
        "Type or paste: Edit the text, counts update live",
        "F2: Remove all whitespace",
        "F3: Trim every line",
        "F4: Show the summary in the status bar",
        "Delete: Clear",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("D-Day"));
    lines.extend(section_lines(&[
        "Digits and '-': Edit the target date (YYYY-MM-DD)",
        "F2: Days from today  F3: Graduation  F4: New year",
        "Delete: Clear",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Password"));
    lines.extend(section_lines(&[
        "Enter / g: Generate  b: Generate a batch",
        "Up/Down or +/-: Change length",
        "u/l/n/s: Toggle uppercase, lowercase, numbers, special",
        "a: Toggle excluding ambiguous characters",
    ]));

    Text::from(lines)
}

fn section_lines(items: &[&str]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("  - {item}"),
                Style::default().fg(Theme::body()),
            ))
        })
        .collect()
}
