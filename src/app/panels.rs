use chrono::NaiveDate;
use crossterm::event::KeyCode;
use rand::RngExt;

use toolbelt::color::{Color, RecentColors, parse_hex, parse_hsl_str, parse_rgb_str};
use toolbelt::dday::{self, DdayResult};
use toolbelt::error::ColorError;
use toolbelt::password::{self, MAX_LENGTH, MIN_LENGTH, PasswordOptions, Strength};
use toolbelt::text::{self, TextReport};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorField {
    Hex,
    Rgb,
    Hsl,
}

impl ColorField {
    fn next(self) -> Self {
        match self {
            ColorField::Hex => ColorField::Rgb,
            ColorField::Rgb => ColorField::Hsl,
            ColorField::Hsl => ColorField::Hex,
        }
    }

    fn prev(self) -> Self {
        match self {
            ColorField::Hex => ColorField::Hsl,
            ColorField::Rgb => ColorField::Hex,
            ColorField::Hsl => ColorField::Rgb,
        }
    }
}

/// Three linked inputs over one color plus the recent-colors strip.
#[derive(Clone, Debug)]
pub struct ColorPanel {
    pub field: ColorField,
    pub hex_input: String,
    pub rgb_input: String,
    pub hsl_input: String,
    pub current: Color,
    pub recent: RecentColors,
    pub selected_recent: usize,
}

impl ColorPanel {
    pub fn new(color: Color) -> Self {
        let mut panel = Self {
            field: ColorField::Hex,
            hex_input: String::new(),
            rgb_input: String::new(),
            hsl_input: String::new(),
            current: color,
            recent: RecentColors::new(),
            selected_recent: 0,
        };
        panel.show(color, None);
        panel
    }

    pub fn input(&self, field: ColorField) -> &str {
        match field {
            ColorField::Hex => &self.hex_input,
            ColorField::Rgb => &self.rgb_input,
            ColorField::Hsl => &self.hsl_input,
        }
    }

    fn input_mut(&mut self) -> &mut String {
        match self.field {
            ColorField::Hex => &mut self.hex_input,
            ColorField::Rgb => &mut self.rgb_input,
            ColorField::Hsl => &mut self.hsl_input,
        }
    }

    pub fn parse_field(&self, field: ColorField) -> Result<Color, ColorError> {
        let value = self.input(field).trim();
        match field {
            ColorField::Hex => parse_hex(value),
            ColorField::Rgb => parse_rgb_str(value),
            ColorField::Hsl => parse_hsl_str(value),
        }
    }

    /// Rewrite every input except `keep` from `color`.
    fn show(&mut self, color: Color, keep: Option<ColorField>) {
        self.current = color;
        if keep != Some(ColorField::Hex) {
            self.hex_input = color.to_hex();
        }
        if keep != Some(ColorField::Rgb) {
            self.rgb_input = color.to_rgb().to_string();
        }
        if keep != Some(ColorField::Hsl) {
            self.hsl_input = color.to_hsl().to_string();
        }
    }

    /// Apply the active input if it parses; partial input is left alone.
    fn apply_active(&mut self) {
        match self.parse_field(self.field) {
            Ok(color) => {
                self.show(color, Some(self.field));
                self.record(color);
            }
            Err(e) => tracing::trace!("Ignoring keystroke: {}", e),
        }
    }

    fn record(&mut self, color: Color) {
        self.recent.record(color);
        self.selected_recent = 0;
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<String> {
        match key {
            KeyCode::Up => self.field = self.field.prev(),
            KeyCode::Down => self.field = self.field.next(),
            KeyCode::Left => {
                if !self.recent.is_empty() {
                    if self.selected_recent == 0 {
                        self.selected_recent = self.recent.len() - 1;
                    } else {
                        self.selected_recent -= 1;
                    }
                }
            }
            KeyCode::Right => {
                if !self.recent.is_empty() {
                    self.selected_recent = (self.selected_recent + 1) % self.recent.len();
                }
            }
            KeyCode::Enter => {
                let color = self.recent.get(self.selected_recent)?;
                self.show(color, None);
                self.record(color);
                return Some(format!("Applied {color}"));
            }
            KeyCode::Delete => self.input_mut().clear(),
            KeyCode::Backspace => {
                self.input_mut().pop();
                self.apply_active();
            }
            KeyCode::Char(ch) => {
                if ch.is_control() {
                    return None;
                }
                self.input_mut().push(ch);
                self.apply_active();
            }
            _ => {}
        }
        None
    }

    pub fn paste(&mut self, value: &str) {
        *self.input_mut() = value.trim().to_string();
        self.apply_active();
    }
}

/// Free-form text buffer with live statistics.
#[derive(Clone, Debug, Default)]
pub struct TextPanel {
    pub buffer: String,
    pub report: TextReport,
}

impl TextPanel {
    fn refresh(&mut self) {
        self.report = TextReport::analyze(&self.buffer);
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<String> {
        let status = match key {
            KeyCode::Enter => {
                self.buffer.push('\n');
                None
            }
            KeyCode::Backspace => {
                self.buffer.pop();
                None
            }
            KeyCode::Delete => {
                self.buffer.clear();
                Some("Cleared text".to_string())
            }
            KeyCode::F(2) => Some(self.transform(text::strip_all_whitespace, "Removed all whitespace")),
            KeyCode::F(3) => Some(self.transform(
                text::trim_each_line_and_outer,
                "Trimmed every line",
            )),
            KeyCode::F(4) => Some(format!(
                "{} characters, {} words, {} lines",
                text::group_thousands(self.report.chars_with_spaces),
                text::group_thousands(self.report.words),
                text::group_thousands(self.report.lines),
            )),
            KeyCode::Char(ch) => {
                if ch.is_control() {
                    return None;
                }
                self.buffer.push(ch);
                None
            }
            _ => return None,
        };
        self.refresh();
        status
    }

    fn transform(&mut self, f: fn(&str) -> String, done: &str) -> String {
        if self.buffer.is_empty() {
            return "Enter some text first".to_string();
        }
        self.buffer = f(&self.buffer);
        done.to_string()
    }

    pub fn paste(&mut self, value: &str) {
        self.buffer.push_str(&value.replace("\r\n", "\n"));
        self.refresh();
    }
}

/// Target date input and its distance from today.
#[derive(Clone, Debug)]
pub struct DdayPanel {
    pub today: NaiveDate,
    pub input: String,
    pub result: Option<DdayResult>,
    pub default_offset_days: u64,
}

impl DdayPanel {
    pub fn new(today: NaiveDate, default_offset_days: u64) -> Self {
        let mut panel = Self {
            today,
            input: String::new(),
            result: None,
            default_offset_days,
        };
        let target = dday::preset_offset(today, default_offset_days).unwrap_or(today);
        panel.set_target(target);
        panel
    }

    fn set_target(&mut self, target: NaiveDate) {
        self.input = target.format("%Y-%m-%d").to_string();
        self.recalculate();
    }

    fn recalculate(&mut self) {
        self.result = dday::parse_date(&self.input)
            .ok()
            .map(|target| dday::calculate(self.today, target));
    }

    /// Roll `today` forward when the date changes while the app is open.
    pub fn refresh_today(&mut self, today: NaiveDate) {
        if self.today != today {
            self.today = today;
            self.recalculate();
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<String> {
        match key {
            KeyCode::Char(ch) if ch.is_ascii_digit() || ch == '-' => {
                self.input.push(ch);
                self.recalculate();
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.recalculate();
            }
            KeyCode::Delete => {
                self.input.clear();
                self.recalculate();
            }
            KeyCode::Enter => {
                if let Err(e) = dday::parse_date(&self.input) {
                    return Some(e.to_string());
                }
            }
            KeyCode::F(2) => match dday::preset_offset(self.today, self.default_offset_days) {
                Ok(target) => self.set_target(target),
                Err(e) => return Some(e.to_string()),
            },
            KeyCode::F(3) => self.set_target(dday::next_graduation(self.today)),
            KeyCode::F(4) => self.set_target(dday::next_new_year(self.today)),
            _ => {}
        }
        None
    }
}

/// Generator options and the most recent output.
#[derive(Clone, Debug)]
pub struct PasswordPanel {
    pub options: PasswordOptions,
    pub batch_size: usize,
    pub password: String,
    pub strength: Option<Strength>,
    pub batch: Vec<String>,
}

impl PasswordPanel {
    pub fn new(options: PasswordOptions, batch_size: usize) -> Self {
        Self {
            options,
            batch_size,
            password: String::new(),
            strength: None,
            batch: Vec::new(),
        }
    }

    pub fn generate<R: RngExt + ?Sized>(&mut self, rng: &mut R) -> Option<String> {
        match password::generate(&self.options, rng) {
            Ok(generated) => {
                self.strength = Some(password::strength(
                    generated.chars().count(),
                    self.options.class_count(),
                ));
                self.password = generated;
                self.batch.clear();
                None
            }
            Err(e) => Some(e.to_string()),
        }
    }

    pub fn generate_batch<R: RngExt + ?Sized>(&mut self, rng: &mut R) -> Option<String> {
        match password::generate_batch(&self.options, self.batch_size, rng) {
            Ok(batch) => {
                self.batch = batch;
                None
            }
            Err(e) => Some(e.to_string()),
        }
    }

    pub fn handle_key<R: RngExt + ?Sized>(&mut self, key: KeyCode, rng: &mut R) -> Option<String> {
        match key {
            KeyCode::Enter | KeyCode::Char('g') => return self.generate(rng),
            KeyCode::Char('b') => return self.generate_batch(rng),
            KeyCode::Char('u') => self.options.uppercase = !self.options.uppercase,
            KeyCode::Char('l') => self.options.lowercase = !self.options.lowercase,
            KeyCode::Char('n') => self.options.numbers = !self.options.numbers,
            KeyCode::Char('s') => self.options.special = !self.options.special,
            KeyCode::Char('a') => self.options.exclude_ambiguous = !self.options.exclude_ambiguous,
            KeyCode::Up | KeyCode::Char('+') => {
                self.options.length = (self.options.length + 1).min(MAX_LENGTH);
            }
            KeyCode::Down | KeyCode::Char('-') => {
                self.options.length = self.options.length.saturating_sub(1).max(MIN_LENGTH);
            }
            _ => {}
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn type_str(panel: &mut ColorPanel, s: &str) {
        for ch in s.chars() {
            panel.handle_key(KeyCode::Char(ch));
        }
    }

    #[test]
    fn test_color_panel_applies_valid_hex_only() {
        let mut panel = ColorPanel::new(Color::rgb(0, 0, 0));
        panel.handle_key(KeyCode::Delete);
        type_str(&mut panel, "#ff6b3");
        assert_eq!(panel.current, Color::rgb(0, 0, 0));
        assert!(panel.recent.is_empty());

        type_str(&mut panel, "5");
        assert_eq!(panel.current, Color::rgb(255, 107, 53));
        assert_eq!(panel.rgb_input, "rgb(255, 107, 53)");
        assert_eq!(panel.hsl_input, "hsl(16, 100%, 60%)");
        assert_eq!(panel.hex_input, "#ff6b35");
        assert_eq!(panel.recent.to_hex_list(), vec!["#FF6B35"]);
    }

    #[test]
    fn test_color_panel_rgb_field_updates_hex() {
        let mut panel = ColorPanel::new(Color::rgb(0, 0, 0));
        panel.handle_key(KeyCode::Down);
        assert_eq!(panel.field, ColorField::Rgb);
        panel.paste("rgb(300, 0, 0)");
        assert_eq!(panel.hex_input, "#FF0000");
    }

    #[test]
    fn test_color_panel_enter_applies_recent() {
        let mut panel = ColorPanel::new(Color::rgb(0, 0, 0));
        panel.paste("#AAAAAA");
        panel.paste("#BBBBBB");
        panel.handle_key(KeyCode::Right);
        let status = panel.handle_key(KeyCode::Enter);
        assert_eq!(status.as_deref(), Some("Applied #AAAAAA"));
        assert_eq!(panel.current, Color::rgb(0xAA, 0xAA, 0xAA));
        assert_eq!(panel.recent.to_hex_list(), vec!["#AAAAAA", "#BBBBBB"]);
    }

    #[test]
    fn test_text_panel_tracks_report() {
        let mut panel = TextPanel::default();
        for ch in "hi there.".chars() {
            panel.handle_key(KeyCode::Char(ch));
        }
        panel.handle_key(KeyCode::Enter);
        assert_eq!(panel.report.words, 2);
        assert_eq!(panel.report.lines, 2);

        let status = panel.handle_key(KeyCode::F(2));
        assert_eq!(status.as_deref(), Some("Removed all whitespace"));
        assert_eq!(panel.buffer, "hithere.");
        assert_eq!(panel.report.words, 1);
    }

    #[test]
    fn test_text_panel_transform_needs_text() {
        let mut panel = TextPanel::default();
        let status = panel.handle_key(KeyCode::F(3));
        assert_eq!(status.as_deref(), Some("Enter some text first"));
    }

    #[test]
    fn test_dday_panel_presets_and_input() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut panel = DdayPanel::new(today, 100);
        assert_eq!(panel.input, "2024-04-10");
        assert_eq!(panel.result.as_ref().map(|r| r.days), Some(100));

        panel.handle_key(KeyCode::F(4));
        assert_eq!(panel.input, "2025-01-01");

        panel.handle_key(KeyCode::Backspace);
        assert!(panel.result.is_none());
        assert!(panel.handle_key(KeyCode::Enter).is_some());
        panel.handle_key(KeyCode::Char('2'));
        assert_eq!(panel.result.as_ref().map(|r| r.label.as_str()), Some("D-367"));
    }

    #[test]
    fn test_password_panel_toggles_and_generates() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut panel = PasswordPanel::new(PasswordOptions::default(), 5);
        for key in ['u', 'l', 'n', 's'] {
            panel.handle_key(KeyCode::Char(key), &mut rng);
        }
        let status = panel.handle_key(KeyCode::Enter, &mut rng);
        assert_eq!(status.as_deref(), Some("Select at least one character class"));

        panel.handle_key(KeyCode::Char('n'), &mut rng);
        panel.handle_key(KeyCode::Down, &mut rng);
        assert_eq!(panel.options.length, 15);
        assert!(panel.handle_key(KeyCode::Enter, &mut rng).is_none());
        assert!(panel.password.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(panel.strength, Some(Strength::Weak));

        panel.handle_key(KeyCode::Char('b'), &mut rng);
        assert_eq!(panel.batch.len(), 5);
    }
}
