mod color;
mod dday;
mod help;
mod helpers;
mod password;
mod text;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::app::{App, AppView, TABS};
use theme::Theme;

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (title, body_text) = match app.view {
        AppView::Color => (" Color converter ", color::build_color_text(app)),
        AppView::Text => (" Text analyzer ", text::build_text_text(app)),
        AppView::Dday => (" D-Day calculator ", dday::build_dday_text(app)),
        AppView::Password => (" Password generator ", password::build_password_text(app)),
        AppView::Help => (" Help ", help::build_help_text()),
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    let header_lines = vec![Line::from(vec![
        Span::styled(
            "  Toolbelt  ",
            Style::default().fg(Color::Black).bg(Theme::brand()),
        ),
        Span::raw(" "),
        Span::styled(
            "everyday converters",
            Style::default()
                .fg(Theme::border())
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    let header = Paragraph::new(Text::from(header_lines))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::border())),
        );
    frame.render_widget(header, layout[0]);

    let mut body_lines = vec![
        tabs_line(app),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {title}"),
            Style::default()
                .fg(Theme::figure())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    body_lines.extend(body_text.lines);
    body_lines.push(Line::from(""));
    body_lines.push(Line::from(Span::styled(
        "----------------------------------------",
        Style::default().fg(Theme::muted()),
    )));
    body_lines.extend(keybinds_lines(app));
    let body = Paragraph::new(Text::from(body_lines))
        .style(Style::default().fg(Theme::body()))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::border())),
        );
    frame.render_widget(body, layout[1]);

    let footer = Paragraph::new(Text::from(status_line(app)))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::border())),
        );
    frame.render_widget(footer, layout[2]);
}

fn tabs_line(app: &App) -> Line<'_> {
    let mut spans = Vec::new();
    for (index, (name, view)) in TABS.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if *view == app.view {
            Style::default()
                .fg(Color::Black)
                .bg(Theme::focus())
                .add_modifier(Modifier::BOLD)
        } else if app.view == AppView::Help && app.selected_tab_index == index {
            Style::default()
                .fg(Theme::focus())
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Theme::muted())
        };
        spans.push(Span::styled(format!(" {name} "), style));
    }

    Line::from(spans)
}

fn status_line(app: &App) -> Line<'_> {
    match &app.status {
        Some(status) => Line::from(vec![
            Span::styled(
                "● ",
                Style::default()
                    .fg(Theme::checked())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                status.as_str(),
                Style::default()
                    .fg(Theme::body())
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        None => Line::from(Span::styled("● Ready", Style::default().fg(Theme::muted()))),
    }
}

fn keybinds_lines(app: &App) -> Vec<Line<'static>> {
    let (primary, secondary) = match app.view {
        AppView::Color => (
            "Up/Down: Field  Type: Edit  Left/Right: Recent  Enter: Apply recent",
            "del: Clear  F1: Help  esc: Quit",
        ),
        AppView::Text => (
            "Type: Edit  F2: Remove whitespace  F3: Trim lines  F4: Summary",
            "del: Clear  F1: Help  esc: Quit",
        ),
        AppView::Dday => (
            "Type: Target date  F2: +N days  F3: Graduation  F4: New year",
            "del: Clear  F1: Help  esc: Quit",
        ),
        AppView::Password => (
            "Enter/g: Generate  b: Batch  Up/Down: Length  u/l/n/s/a: Toggle",
            "F1: Help  esc: Quit",
        ),
        AppView::Help => ("Press F1 or ESC to close this help screen", ""),
    };
    vec![
        Line::from(Span::styled(
            "Tab/Shift+Tab: Switch tab",
            Style::default().fg(Theme::focus()),
        )),
        Line::from(Span::styled(primary, Style::default().fg(Theme::muted()))),
        Line::from(Span::styled(secondary, Style::default().fg(Theme::muted()))),
    ]
}
