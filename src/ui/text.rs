use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use toolbelt::text::group_thousands;

use super::helpers::{section_title, value_line};
use super::theme::Theme;
use crate::app::App;

/// Number of buffer lines shown above the statistics.
const PREVIEW_LINES: usize = 8;

pub fn build_text_text(app: &App) -> Text<'_> {
    let panel = &app.text;
    let mut lines = Vec::new();

    lines.push(section_title("Input"));
    if panel.buffer.is_empty() {
        lines.push(Line::from(Span::styled(
            "    Start typing or paste text",
            Style::default().fg(Theme::muted()),
        )));
    } else {
        let buffer_lines: Vec<&str> = panel.buffer.split('\n').collect();
        let skip = buffer_lines.len().saturating_sub(PREVIEW_LINES);
        if skip > 0 {
            lines.push(Line::from(Span::styled(
                format!("    ... {skip} more lines above"),
                Style::default().fg(Theme::muted()),
            )));
        }
        let last = buffer_lines.len() - 1;
        for (index, line) in buffer_lines.iter().enumerate().skip(skip) {
            let mut spans = vec![
                Span::styled("  │ ", Style::default().fg(Theme::muted())),
                Span::styled(*line, Style::default().fg(Theme::body())),
            ];
            if index == last {
                spans.push(Span::styled("_", Style::default().fg(Theme::focus())));
            }
            lines.push(Line::from(spans));
        }
    }
    lines.push(Line::from(""));

    lines.push(section_title("Statistics"));
    for (label, value) in panel.report.rows() {
        lines.push(value_line(label, group_thousands(value), 30));
    }

    if panel.report.chars_with_spaces > 0 {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(
                "    {} characters in {} words",
                group_thousands(panel.report.chars_with_spaces),
                group_thousands(panel.report.words)
            ),
            Style::default()
                .fg(Theme::figure())
                .add_modifier(Modifier::ITALIC),
        )));
    }

    Text::from(lines)
}
