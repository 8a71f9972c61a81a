//! Neutral slate chrome so generated swatches stand out

use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Colors {
    pub bg_primary: Color,
    pub bg_highlight: Color,
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub border: Color,
    pub border_focused: Color,
    pub success: Color,
    pub invalid: Color,
}

impl Colors {
    pub const SLATE: Self = Self {
        bg_primary: Color::Rgb(15, 23, 42),       // #0f172a
        bg_highlight: Color::Rgb(51, 65, 85),     // #334155
        fg_primary: Color::Rgb(241, 245, 249),    // #f1f5f9
        fg_secondary: Color::Rgb(148, 163, 184),  // #94a3b8
        accent: Color::Rgb(255, 255, 255),
        accent_alt: Color::Rgb(203, 213, 225),    // #cbd5e1
        border: Color::Rgb(71, 85, 105),          // #475569
        border_focused: Color::Rgb(226, 232, 240), // #e2e8f0
        success: Color::Rgb(74, 222, 128),        // #4ade80
        invalid: Color::Rgb(248, 113, 113),       // #f87171
    };
}

impl Default for Colors {
    fn default() -> Self {
        Self::SLATE
    }
}
