mod panels;
mod state;

use crossterm::event::KeyCode;

pub use panels::ColorField;
pub use state::App;

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
    Paste(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Color,
    Text,
    Dday,
    Password,
    Help,
}

/// Views reachable from the tab bar, in display order.
pub const TABS: [(&str, AppView); 4] = [
    ("Color", AppView::Color),
    ("Text", AppView::Text),
    ("D-Day", AppView::Dday),
    ("Password", AppView::Password),
];
