//! Theme for the chrome around the swatches

pub mod colors;
pub mod icons;

pub use colors::Colors;
pub use icons::Icons;

use ratatui::symbols::border;

#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: Colors,
    pub icons: Icons,
}

impl Theme {
    pub fn new() -> Self {
        Self {
            colors: Colors::SLATE,
            icons: Icons::nerd(),
        }
    }

    pub fn border_set(&self) -> border::Set<'static> {
        border::ROUNDED
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

pub fn get_theme() -> Theme {
    Theme::new()
}
