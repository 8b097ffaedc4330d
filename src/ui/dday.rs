use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use toolbelt::dday;
use toolbelt::text::group_thousands;

use super::helpers::{section_title, value_line};
use super::theme::Theme;
use crate::app::App;

pub fn build_dday_text(app: &App) -> Text<'_> {
    let panel = &app.dday;
    let mut lines = Vec::new();

    lines.push(value_line("Today", dday::format_date(panel.today), 10));
    lines.push(Line::from(vec![
        Span::styled(format!("    {:<10}", "Target"), Style::default().fg(Theme::muted())),
        Span::styled(
            panel.input.as_str(),
            Style::default()
                .fg(Theme::focus())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("_", Style::default().fg(Theme::focus())),
    ]));
    lines.push(Line::from(""));

    let Some(result) = &panel.result else {
        lines.push(Line::from(Span::styled(
            "    Enter a date as YYYY-MM-DD",
            Style::default().fg(Theme::hint()),
        )));
        return Text::from(lines);
    };

    let label_color = Theme::countdown(result.days);
    lines.push(Line::from(vec![
        Span::raw("    "),
        Span::styled(
            result.label.clone(),
            Style::default()
                .fg(label_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", dday::format_date(result.target)),
            Style::default().fg(Theme::body()),
        ),
    ]));
    lines.push(Line::from(""));

    lines.push(section_title("Breakdown"));
    lines.push(value_line("Calendar", dday::format_breakdown(&result.breakdown), 10));
    lines.push(value_line(
        "Days",
        group_thousands(result.days.unsigned_abs() as usize),
        10,
    ));
    lines.push(value_line(
        "Weeks",
        format!("{}w {}d", result.weeks, result.remaining_days),
        10,
    ));
    lines.push(value_line("Hours", group_thousands(result.hours as usize), 10));

    Text::from(lines)
}
