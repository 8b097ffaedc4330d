use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use super::model::Color;
use crate::error::{ColorError, ColorFormat};

static RGB_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgb\(\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*\)$")
        .expect("rgb pattern compiles")
});

static HSL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^hsl\(\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})%\s*,\s*([0-9]{1,3})%\s*\)$")
        .expect("hsl pattern compiles")
});

/// Validate a hex color: optional `#` followed by exactly six hex digits.
pub fn is_valid_hex(s: &str) -> bool {
    let digits = s.strip_prefix('#').unwrap_or(s);
    digits.len() == 6 && digits.bytes().all(|c| c.is_ascii_hexdigit())
}

/// Parse `#RRGGBB` or `RRGGBB`, case-insensitive.
pub fn parse_hex(s: &str) -> Result<Color, ColorError> {
    if !is_valid_hex(s) {
        return Err(ColorError::invalid(ColorFormat::Hex, s));
    }
    let digits = s.strip_prefix('#').unwrap_or(s);

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::invalid(ColorFormat::Hex, s))
    };

    Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Parse `rgb(r, g, b)` with one to three digits per channel.
///
/// Channels are not range checked here; anything above 255 clamps to 255.
pub fn parse_rgb_str(s: &str) -> Result<Color, ColorError> {
    let [r, g, b] = captures(&RGB_PATTERN, s).ok_or_else(|| ColorError::invalid(ColorFormat::Rgb, s))?;
    Ok(Color::from_channels(r, g, b))
}

/// Parse `hsl(h, s%, l%)` with one to three digits per component.
///
/// The hue wraps modulo 360; saturation and lightness are used as given.
pub fn parse_hsl_str(s: &str) -> Result<Color, ColorError> {
    let [h, sat, l] =
        captures(&HSL_PATTERN, s).ok_or_else(|| ColorError::invalid(ColorFormat::Hsl, s))?;
    Ok(Color::from_hsl(h, sat, l))
}

fn captures(pattern: &Regex, s: &str) -> Option<[u32; 3]> {
    let caps = pattern.captures(s)?;
    let number = |i: usize| caps.get(i)?.as_str().parse::<u32>().ok();
    Some([number(1)?, number(2)?, number(3)?])
}

impl Color {
    /// Parse any accepted textual form, dispatching on its prefix.
    ///
    /// Surrounding whitespace is ignored. `rgb(` and `hsl(` select the
    /// functional forms, anything else is treated as hex.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let s = s.trim();
        if s.starts_with("rgb(") {
            parse_rgb_str(s)
        } else if s.starts_with("hsl(") {
            parse_hsl_str(s)
        } else {
            parse_hex(s)
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}
