use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::{contrast_color, marker, section_title, swatch_color};
use super::theme::Theme;
use crate::app::{App, ColorField};

const FIELDS: [(&str, ColorField); 3] = [
    ("HEX", ColorField::Hex),
    ("RGB", ColorField::Rgb),
    ("HSL", ColorField::Hsl),
];

pub fn build_color_text(app: &App) -> Text<'_> {
    let panel = &app.color;
    let mut lines = Vec::new();

    for (name, field) in FIELDS {
        let active = panel.field == field;
        let input_style = if active {
            Style::default()
                .fg(Theme::focus())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::body())
        };
        let mut spans = vec![
            marker(active),
            Span::styled(format!("{name}  "), Style::default().fg(Theme::muted())),
            Span::styled(panel.input(field), input_style),
        ];
        if active {
            spans.push(Span::styled("_", Style::default().fg(Theme::focus())));
            // Partial input is never applied, only flagged
            if let Err(e) = panel.parse_field(field) {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(e.to_string(), Style::default().fg(Theme::muted())));
            }
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    let hex = panel.current.to_hex();
    let frame = Style::default().fg(Theme::swatch_border());
    lines.push(Line::from(vec![
        Span::styled("   ▐", frame),
        Span::styled(
            format!("   {hex}   "),
            Style::default()
                .fg(contrast_color(panel.current))
                .bg(swatch_color(panel.current))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("▌", frame),
    ]));
    lines.push(Line::from(""));

    lines.push(section_title("Recent"));
    if panel.recent.is_empty() {
        lines.push(Line::from(Span::styled(
            "    No colors yet",
            Style::default().fg(Theme::muted()),
        )));
    } else {
        let mut spans = vec![Span::raw("    ")];
        for (index, color) in panel.recent.iter().enumerate() {
            let selected = index == panel.selected_recent;
            spans.push(Span::styled("██", Style::default().fg(swatch_color(color))));
            let style = if selected {
                Style::default()
                    .fg(Theme::focus())
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Theme::muted())
            };
            spans.push(Span::styled(format!(" {} ", color.to_hex()), style));
        }
        lines.push(Line::from(spans));
    }

    Text::from(lines)
}
