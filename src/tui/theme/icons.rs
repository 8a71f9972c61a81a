//! Nerd Font icons for TUI display
//! Requires a Nerd Font to be installed (https://www.nerdfonts.com)

#[derive(Debug, Clone)]
pub struct Icons {
    pub picker: &'static str,
    pub palette: &'static str,
    pub help: &'static str,
    pub info: &'static str,

    // Status
    pub copied: &'static str,
    pub invalid: &'static str,
    pub download: &'static str,

    // Selection
    pub selected: &'static str,
    pub unselected: &'static str,
    pub channel_selected: &'static str,

    // Gauges
    pub gauge_full: &'static str,
    pub gauge_empty: &'static str,
    pub gauge_head: &'static str,
}

impl Icons {
    pub const fn nerd() -> Self {
        Self {
            picker: "\u{f1fb}",        // nf-fa-eyedropper
            palette: "\u{f53f}",       // nf-fa-palette
            help: "\u{f059}",          // nf-fa-question_circle
            info: "\u{f05a}",          // nf-fa-info_circle

            copied: "\u{f00c}",        // nf-fa-check
            invalid: "\u{f00d}",       // nf-fa-times
            download: "\u{f019}",      // nf-fa-download

            selected: "\u{f054}",      // nf-fa-chevron_right
            unselected: " ",
            channel_selected: "▸",

            gauge_full: "━",
            gauge_empty: "─",
            gauge_head: "●",
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::nerd()
    }
}
