use ratatui::style::Color;

use toolbelt::password::Strength;

/// Palette shared by every tab.
pub struct Theme;

impl Theme {
    /// Header badge
    pub fn brand() -> Color {
        Color::LightMagenta
    }

    /// Block borders and section titles
    pub fn border() -> Color {
        Color::Cyan
    }

    /// Active tab and the field being edited
    pub fn focus() -> Color {
        Color::LightCyan
    }

    pub fn muted() -> Color {
        Color::DarkGray
    }

    pub fn body() -> Color {
        Color::White
    }

    /// Computed values: counts, conversions, passwords
    pub fn figure() -> Color {
        Color::LightBlue
    }

    /// Enabled toggles and the selection arrow
    pub fn checked() -> Color {
        Color::Green
    }

    /// Input hints such as an unparsable date
    pub fn hint() -> Color {
        Color::Yellow
    }

    /// Frame drawn around the color preview
    pub fn swatch_border() -> Color {
        Color::Gray
    }

    /// D-Day label color: ahead, on the day, or already passed.
    pub fn countdown(days: i64) -> Color {
        match days {
            0 => Color::LightMagenta,
            d if d > 0 => Color::LightGreen,
            _ => Color::DarkGray,
        }
    }

    /// Red through green along the password strength scale.
    pub fn strength(strength: Strength) -> Color {
        match strength {
            Strength::Weak => Color::LightRed,
            Strength::Medium => Color::Yellow,
            Strength::Strong => Color::Green,
            Strength::VeryStrong => Color::LightGreen,
        }
    }
}
