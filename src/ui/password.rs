use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use toolbelt::password::Strength;

use super::helpers::{section_title, value_line};
use super::theme::Theme;
use crate::app::App;

fn strength_style(strength: Strength) -> Style {
    Style::default()
        .fg(Theme::strength(strength))
        .add_modifier(Modifier::BOLD)
}

fn toggle_line(key: char, label: &str, enabled: bool) -> Line<'static> {
    let (mark, style) = if enabled {
        ("[x]", Style::default().fg(Theme::checked()))
    } else {
        ("[ ]", Style::default().fg(Theme::muted()))
    };
    Line::from(vec![
        Span::styled(format!("    {key}  "), Style::default().fg(Theme::muted())),
        Span::styled(mark, style),
        Span::styled(format!(" {label}"), Style::default().fg(Theme::body())),
    ])
}

pub fn build_password_text(app: &App) -> Text<'_> {
    let panel = &app.password;
    let options = &panel.options;
    let mut lines = Vec::new();

    lines.push(section_title("Options"));
    lines.push(value_line("Length", options.length.to_string(), 10));
    lines.push(toggle_line('u', "Uppercase (A-Z)", options.uppercase));
    lines.push(toggle_line('l', "Lowercase (a-z)", options.lowercase));
    lines.push(toggle_line('n', "Numbers (0-9)", options.numbers));
    lines.push(toggle_line('s', "Special (!@#...)", options.special));
    lines.push(toggle_line('a', "Exclude ambiguous (0 O 1 l I)", options.exclude_ambiguous));
    let expected = options.strength();
    lines.push(Line::from(vec![
        Span::styled(format!("    {:<10}", "Expected"), Style::default().fg(Theme::muted())),
        Span::styled(expected.label(), strength_style(expected)),
    ]));
    lines.push(Line::from(""));

    if panel.batch.is_empty() {
        lines.push(section_title("Password"));
        if panel.password.is_empty() {
            lines.push(Line::from(Span::styled(
                "    Press Enter to generate",
                Style::default().fg(Theme::muted()),
            )));
        } else {
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(
                    panel.password.as_str(),
                    Style::default()
                        .fg(Theme::figure())
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            if let Some(strength) = panel.strength {
                lines.push(Line::from(vec![
                    Span::styled(format!("    {:<10}", "Strength"), Style::default().fg(Theme::muted())),
                    Span::styled(strength.label(), strength_style(strength)),
                ]));
            }
        }
    } else {
        lines.push(section_title("Batch"));
        for (index, password) in panel.batch.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("    {:>2}. ", index + 1), Style::default().fg(Theme::muted())),
                Span::styled(password.as_str(), Style::default().fg(Theme::figure())),
            ]));
        }
    }

    Text::from(lines)
}
