use super::model::Color;

/// Maximum number of colors kept in a [`RecentColors`] list.
pub const RECENT_CAPACITY: usize = 10;

/// Most-recently-used colors, newest first, without duplicates.
///
/// Lives only as long as its owner; nothing is persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecentColors {
    entries: Vec<Color>,
}

impl RecentColors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move `color` to the front, dropping the oldest entry past capacity.
    pub fn record(&mut self, color: Color) {
        self.entries.retain(|existing| *existing != color);
        self.entries.insert(0, color);
        self.entries.truncate(RECENT_CAPACITY);
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.entries.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.entries.iter().copied()
    }

    /// Canonical hex strings, newest first.
    pub fn to_hex_list(&self) -> Vec<String> {
        self.iter().map(Color::to_hex).collect()
    }
}
