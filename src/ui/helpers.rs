use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::theme::Theme;

pub fn swatch_color(color: toolbelt::color::Color) -> Color {
    let rgb = color.to_rgb();
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Text that stays readable on top of `color`.
pub fn contrast_color(color: toolbelt::color::Color) -> Color {
    if color.to_hsl().l > 55 {
        Color::Black
    } else {
        Color::White
    }
}

pub fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(Theme::border())
            .add_modifier(Modifier::BOLD),
    ))
}

/// `label` padded to `width`, then `value` in the accent color.
pub fn value_line(label: &str, value: String, width: usize) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("    {label:<width$}"),
            Style::default().fg(Theme::muted()),
        ),
        Span::styled(
            value,
            Style::default()
                .fg(Theme::figure())
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

pub fn marker(selected: bool) -> Span<'static> {
    if selected {
        Span::styled(
            "  > ",
            Style::default()
                .fg(Theme::checked())
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw("    ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swatch_color() {
        let color = toolbelt::color::Color::rgb(255, 107, 53);
        assert_eq!(swatch_color(color), Color::Rgb(255, 107, 53));
    }

    #[test]
    fn test_contrast_color() {
        assert_eq!(contrast_color(toolbelt::color::Color::rgb(255, 255, 255)), Color::Black);
        assert_eq!(contrast_color(toolbelt::color::Color::rgb(0, 0, 128)), Color::White);
    }
}
