use chrono::Local;
use crossterm::event::KeyCode;
use rand::RngExt;

use toolbelt::color::{Color, parse_hex};
use toolbelt::config::Config;

use super::panels::{ColorPanel, DdayPanel, PasswordPanel, TextPanel};
use super::{AppEvent, AppView, TABS};

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub view: AppView,
    view_history: Vec<AppView>,
    pub selected_tab_index: usize,
    pub status: Option<String>,
    pub color: ColorPanel,
    pub text: TextPanel,
    pub dday: DdayPanel,
    pub password: PasswordPanel,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let start_color = match parse_hex(&config.start_color) {
            Ok(color) => color,
            Err(e) => {
                tracing::warn!("{}, starting from #FF6B35", e);
                Color::rgb(0xFF, 0x6B, 0x35)
            }
        };

        Self {
            running: true,
            view: AppView::Color,
            view_history: Vec::new(),
            selected_tab_index: 0,
            status: None,
            color: ColorPanel::new(start_color),
            text: TextPanel::default(),
            dday: DdayPanel::new(Local::now().date_naive(), config.dday.default_offset_days),
            password: PasswordPanel::new(config.password.options(), config.password.batch_size()),
        }
    }

    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => self.dday.refresh_today(Local::now().date_naive()),
            AppEvent::KeyPress(key) => self.handle_key(key, &mut rand::rng()),
            AppEvent::Paste(text) => self.handle_paste(&text),
        }
    }

    fn handle_key<R: RngExt + ?Sized>(&mut self, key: KeyCode, rng: &mut R) {
        match key {
            KeyCode::Esc => {
                if self.view == AppView::Help {
                    self.go_back();
                } else {
                    self.running = false;
                }
                return;
            }
            KeyCode::F(1) => {
                if self.view == AppView::Help {
                    self.go_back();
                } else {
                    self.navigate_to(AppView::Help);
                }
                return;
            }
            KeyCode::Tab => {
                self.navigate_tab_right();
                self.activate_selected_tab();
                return;
            }
            KeyCode::BackTab => {
                self.navigate_tab_left();
                self.activate_selected_tab();
                return;
            }
            _ => {}
        }

        let status = match self.view {
            AppView::Color => self.color.handle_key(key),
            AppView::Text => self.text.handle_key(key),
            AppView::Dday => self.dday.handle_key(key),
            AppView::Password => self.password.handle_key(key, rng),
            AppView::Help => None,
        };
        if status.is_some() {
            self.status = status;
        }
    }

    fn handle_paste(&mut self, text: &str) {
        match self.view {
            AppView::Color => self.color.paste(text),
            AppView::Text => self.text.paste(text),
            _ => tracing::debug!("Paste ignored in {:?} view", self.view),
        }
    }

    fn navigate_to(&mut self, view: AppView) {
        if self.view != view {
            self.view_history.push(self.view);
            self.view = view;
            // Keep the tab bar in sync with the current view
            if let Some(index) = TABS.iter().position(|(_, v)| *v == self.view) {
                self.selected_tab_index = index;
            }
        }
        self.clear_status();
    }

    fn navigate_tab_left(&mut self) {
        if self.selected_tab_index == 0 {
            self.selected_tab_index = TABS.len() - 1;
        } else {
            self.selected_tab_index -= 1;
        }
    }

    fn navigate_tab_right(&mut self) {
        self.selected_tab_index = (self.selected_tab_index + 1) % TABS.len();
    }

    fn activate_selected_tab(&mut self) {
        let (_, target_view) = TABS[self.selected_tab_index];
        self.navigate_to(target_view);
    }

    fn go_back(&mut self) {
        if let Some(prev_view) = self.view_history.pop() {
            self.view = prev_view;
        }
        self.clear_status();
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn press(app: &mut App, key: KeyCode) {
        let mut rng = StdRng::seed_from_u64(1);
        app.handle_key(key, &mut rng);
    }

    #[test]
    fn test_new_app_uses_config() {
        let config = Config {
            start_color: "#00FF00".to_string(),
            ..Config::default()
        };
        let app = App::new(&config);
        assert!(app.running);
        assert_eq!(app.view, AppView::Color);
        assert_eq!(app.color.current, Color::rgb(0, 255, 0));
        assert_eq!(app.password.options.length, 16);
        assert_eq!(app.password.batch_size, 5);
    }

    #[test]
    fn test_invalid_start_color_falls_back() {
        let config = Config {
            start_color: "orange".to_string(),
            ..Config::default()
        };
        let app = App::new(&config);
        assert_eq!(app.color.current.to_hex(), "#FF6B35");
    }

    #[test]
    fn test_tab_cycles_views() {
        let mut app = App::new(&Config::default());
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view, AppView::Text);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view, AppView::Password);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view, AppView::Color);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.view, AppView::Password);
        assert_eq!(app.selected_tab_index, 3);
    }

    #[test]
    fn test_help_toggles_and_esc_returns() {
        let mut app = App::new(&Config::default());
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::F(1));
        assert_eq!(app.view, AppView::Help);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.view, AppView::Text);
        assert!(app.running);
        press(&mut app, KeyCode::Esc);
        assert!(!app.running);
    }

    #[test]
    fn test_keys_go_to_active_panel() {
        let mut app = App::new(&Config::default());
        press(&mut app, KeyCode::Tab);
        for ch in "one two".chars() {
            press(&mut app, KeyCode::Char(ch));
        }
        assert_eq!(app.text.buffer, "one two");
        assert_eq!(app.text.report.words, 2);
        assert_eq!(app.color.hex_input, "#FF6B35");
    }

    #[test]
    fn test_panel_status_is_shown_and_cleared() {
        let mut app = App::new(&Config::default());
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.status.as_deref(), Some("Enter some text first"));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.status, None);
    }

    #[test]
    fn test_paste_into_text_view() {
        let mut app = App::new(&Config::default());
        press(&mut app, KeyCode::Tab);
        app.update(AppEvent::Paste("a\r\nb".to_string()));
        assert_eq!(app.text.buffer, "a\nb");
        assert_eq!(app.text.report.lines, 2);
    }
}
