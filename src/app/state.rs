use crate::color::{self, Color};
use crate::generator::{self, GeneratedPalette};
use palette::Hsl;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Picker,
    Palettes,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Picker => Focus::Palettes,
            Focus::Palettes => Focus::Picker,
        }
    }
}

/// Picker channel adjusted by the arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Channel {
    #[default]
    Hue,
    Saturation,
    Lightness,
}

impl Channel {
    pub fn next(self) -> Self {
        match self {
            Channel::Hue => Channel::Saturation,
            Channel::Saturation => Channel::Lightness,
            Channel::Lightness => Channel::Hue,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Channel::Hue => Channel::Lightness,
            Channel::Saturation => Channel::Hue,
            Channel::Lightness => Channel::Saturation,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Channel::Hue => "Teinte",
            Channel::Saturation => "Saturation",
            Channel::Lightness => "Luminosité",
        }
    }
}

const HUE_STEP: f32 = 2.0;
const UNIT_STEP: f32 = 0.01;

/// HSL value behind the visual picker.
///
/// Kept separately from the hex so that greys keep their hue while the
/// saturation is raised again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Picker {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Picker {
    pub fn from_color(color: Color) -> Self {
        let hsl = color.to_hsl();
        Self {
            hue: color::hue_of(hsl),
            saturation: hsl.saturation,
            lightness: hsl.lightness,
        }
    }

    pub fn color(self) -> Color {
        Color::from_hsl(Hsl::new(self.hue, self.saturation, self.lightness))
    }

    pub fn nudge(&mut self, channel: Channel, steps: i32) {
        let steps = steps as f32;
        match channel {
            Channel::Hue => self.hue = color::normalize_hue(self.hue + HUE_STEP * steps),
            Channel::Saturation => {
                self.saturation = (self.saturation + UNIT_STEP * steps).clamp(0.0, 1.0);
            }
            Channel::Lightness => {
                self.lightness = (self.lightness + UNIT_STEP * steps).clamp(0.0, 1.0);
            }
        }
    }

    /// Channel position as a fraction of its range, for gauges.
    pub fn fraction(self, channel: Channel) -> f32 {
        match channel {
            Channel::Hue => self.hue / 360.0,
            Channel::Saturation => self.saturation,
            Channel::Lightness => self.lightness,
        }
    }
}

/// What a clipboard write copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyTarget {
    Base,
    Swatch { palette: &'static str, index: usize },
}

/// The single visible "Copié" acknowledgment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyAck {
    pub id: u64,
    pub target: CopyTarget,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub created_at: Instant,
}

impl Toast {
    pub const TTL: Duration = Duration::from_secs(3);

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > Self::TTL
    }
}

pub struct AppState {
    pub should_quit: bool,
    pub focus: Focus,
    pub show_help: bool,

    /// Free text typed by the user; committed only when it is a full `#RRGGBB`.
    pub hex_input: String,
    pub base_color: Color,
    pub initial_color: Color,
    pub picker: Picker,
    pub channel: Channel,

    // Generated palettes
    pub palettes: Vec<GeneratedPalette>,
    pub generated_from: Option<Color>,
    pub palette_selected: usize,
    pub swatch_selected: usize,

    pub copied: Option<CopyAck>,
    next_copy_id: u64,
    last_acked_copy: u64,

    pub toast: Option<Toast>,
}

impl AppState {
    pub fn new(initial_color: Color) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Picker,
            show_help: false,
            hex_input: initial_color.hex(),
            base_color: initial_color,
            initial_color,
            picker: Picker::from_color(initial_color),
            channel: Channel::default(),
            palettes: Vec::new(),
            generated_from: None,
            palette_selected: 0,
            swatch_selected: 0,
            copied: None,
            next_copy_id: 0,
            last_acked_copy: 0,
            toast: None,
        }
    }

    pub fn input_char(&mut self, c: char) {
        self.hex_input.push(c);
        self.commit_input();
    }

    pub fn backspace(&mut self) {
        self.hex_input.pop();
        self.commit_input();
    }

    /// Empty the field and fall back to the initial color.
    pub fn clear_input(&mut self) {
        self.hex_input.clear();
        self.set_base_color(self.initial_color);
    }

    /// Adopt `hex_input` as the base color if it is valid. Anything else is
    /// left in the field without touching the active color.
    pub fn commit_input(&mut self) -> bool {
        match Color::parse_hex(&self.hex_input) {
            Ok(color) => {
                self.set_base_color(color);
                true
            }
            Err(_) => false,
        }
    }

    fn set_base_color(&mut self, color: Color) {
        if color != self.base_color {
            self.picker = Picker::from_color(color);
        }
        self.base_color = color;
    }

    pub fn nudge(&mut self, steps: i32) {
        self.picker.nudge(self.channel, steps);
        self.base_color = self.picker.color();
        self.hex_input = self.base_color.hex();
    }

    /// Replace the whole palette catalog with one derived from the base color.
    pub fn generate(&mut self) {
        self.palettes = generator::generate(self.base_color);
        self.generated_from = Some(self.base_color);
        self.palette_selected = 0;
        self.swatch_selected = 0;
        if matches!(
            self.copied,
            Some(CopyAck {
                target: CopyTarget::Swatch { .. },
                ..
            })
        ) {
            self.copied = None;
        }
    }

    /// Base color changed since the palettes were generated.
    pub fn is_stale(&self) -> bool {
        self.generated_from != Some(self.base_color)
    }

    pub fn selected_palette(&self) -> Option<&GeneratedPalette> {
        self.palettes.get(self.palette_selected)
    }

    pub fn selected_color(&self) -> Option<Color> {
        self.selected_palette()
            .and_then(|p| p.colors().get(self.swatch_selected).copied())
    }

    /// Returns true when the selection moved to another palette.
    pub fn select_palette(&mut self, index: usize) -> bool {
        if self.palettes.is_empty() {
            return false;
        }
        let index = index.min(self.palettes.len() - 1);
        let changed = index != self.palette_selected;
        self.palette_selected = index;
        let len = self.palettes[index].len();
        self.swatch_selected = self.swatch_selected.min(len.saturating_sub(1));
        changed
    }

    pub fn select_swatch_prev(&mut self) {
        self.swatch_selected = self.swatch_selected.saturating_sub(1);
    }

    pub fn select_swatch_next(&mut self) {
        if let Some(palette) = self.selected_palette() {
            self.swatch_selected = (self.swatch_selected + 1).min(palette.len().saturating_sub(1));
        }
    }

    /// Reserve the id of a copy about to start. Ids follow request order.
    pub fn request_copy(&mut self) -> u64 {
        self.next_copy_id += 1;
        self.next_copy_id
    }

    /// Record a finished copy. A result older than the latest acknowledged
    /// one is dropped, so the last requested copy is the one shown.
    pub fn acknowledge_copy(&mut self, id: u64, target: CopyTarget, text: String) -> bool {
        if id <= self.last_acked_copy {
            return false;
        }
        self.last_acked_copy = id;
        self.copied = Some(CopyAck { id, target, text });
        true
    }

    /// Clear the acknowledgment if it is still the one `id` refers to.
    pub fn expire_copy(&mut self, id: u64) {
        if self.copied.as_ref().is_some_and(|ack| ack.id == id) {
            self.copied = None;
        }
    }

    pub fn is_copied(&self, target: &CopyTarget) -> bool {
        self.copied.as_ref().is_some_and(|ack| &ack.target == target)
    }

    /// Clear the toast if it is still the one created at `created_at`.
    pub fn expire_toast(&mut self, created_at: Instant) {
        if self.toast.as_ref().is_some_and(|t| t.created_at == created_at) {
            self.toast = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blue() -> Color {
        Color::rgb(0x3B, 0x82, 0xF6)
    }

    fn type_str(state: &mut AppState, s: &str) {
        for c in s.chars() {
            state.input_char(c);
        }
    }

    #[test]
    fn invalid_input_keeps_active_color() {
        let mut state = AppState::new(blue());
        state.hex_input.clear();

        type_str(&mut state, "#ZZZZZZ");
        assert_eq!(state.base_color, blue());

        state.hex_input.clear();
        type_str(&mut state, "#FFF");
        assert_eq!(state.base_color, blue());
        assert_eq!(state.hex_input, "#FFF");
    }

    #[test]
    fn valid_input_commits_once_complete() {
        let mut state = AppState::new(blue());
        state.hex_input.clear();

        type_str(&mut state, "#ff000");
        assert_eq!(state.base_color, blue());
        state.input_char('0');
        assert_eq!(state.base_color, Color::rgb(255, 0, 0));
        assert_eq!(state.picker, Picker::from_color(Color::rgb(255, 0, 0)));

        // Overlong input is not committed, the last valid color stays.
        state.input_char('0');
        assert_eq!(state.base_color, Color::rgb(255, 0, 0));
        state.backspace();
        assert_eq!(state.base_color, Color::rgb(255, 0, 0));
    }

    #[test]
    fn clear_restores_initial_color() {
        let mut state = AppState::new(blue());
        state.hex_input = "#00FF00".into();
        state.commit_input();
        state.clear_input();
        assert!(state.hex_input.is_empty());
        assert_eq!(state.base_color, blue());
    }

    #[test]
    fn nudging_rewrites_the_field() {
        let mut state = AppState::new(Color::rgb(255, 0, 0));
        state.channel = Channel::Lightness;
        state.nudge(-50);
        assert_eq!(state.base_color, Color::rgb(0, 0, 0));
        assert_eq!(state.hex_input, "#000000");

        // Hue survives a trip through black.
        state.nudge(50);
        assert_eq!(state.base_color, Color::rgb(255, 0, 0));
    }

    #[test]
    fn hue_nudge_wraps() {
        let mut picker = Picker::from_color(Color::rgb(255, 0, 0));
        picker.nudge(Channel::Hue, -1);
        assert!((picker.hue - 358.0).abs() < 1e-3);
        picker.nudge(Channel::Hue, 181);
        assert!((picker.hue - 0.0).abs() < 1e-3);
    }

    #[test]
    fn generation_replaces_catalog() {
        let mut state = AppState::new(blue());
        assert!(state.palettes.is_empty());
        assert!(state.is_stale());

        state.generate();
        assert_eq!(state.palettes.len(), generator::STYLES.len());
        assert!(!state.is_stale());

        state.select_palette(3);
        state.select_swatch_next();
        state.hex_input = "#FF0000".into();
        state.commit_input();
        assert!(state.is_stale());

        state.generate();
        assert_eq!(state.palette_selected, 0);
        assert_eq!(state.swatch_selected, 0);
        assert_eq!(state.selected_color(), Some(state.palettes[0].colors()[0]));
        assert_eq!(state.generated_from, Some(Color::rgb(255, 0, 0)));
    }

    #[test]
    fn selection_is_clamped() {
        let mut state = AppState::new(blue());
        assert!(!state.select_palette(2));

        state.generate();
        state.select_palette(0);
        for _ in 0..10 {
            state.select_swatch_next();
        }
        assert_eq!(state.swatch_selected, 4);

        // Complémentaire only has two colors.
        assert!(state.select_palette(1));
        assert_eq!(state.swatch_selected, 1);
        assert!(state.select_palette(99));
        assert_eq!(state.palette_selected, generator::STYLES.len() - 1);
    }

    #[test]
    fn newer_copy_replaces_acknowledgment() {
        let mut state = AppState::new(blue());
        let first = state.request_copy();
        assert!(state.acknowledge_copy(first, CopyTarget::Base, "#3B82F6".into()));
        let swatch = CopyTarget::Swatch {
            palette: "Triade",
            index: 1,
        };
        let second = state.request_copy();
        assert!(state.acknowledge_copy(second, swatch.clone(), "#F63B82".into()));

        assert!(state.is_copied(&swatch));
        assert!(!state.is_copied(&CopyTarget::Base));

        // The stale timer must not clear the newer acknowledgment.
        state.expire_copy(first);
        assert!(state.is_copied(&swatch));

        state.expire_copy(second);
        assert!(state.copied.is_none());
    }

    #[test]
    fn late_result_of_older_copy_is_dropped() {
        let mut state = AppState::new(blue());
        let older = state.request_copy();
        let newer = state.request_copy();
        let swatch = CopyTarget::Swatch {
            palette: "Triade",
            index: 0,
        };

        assert!(state.acknowledge_copy(newer, swatch.clone(), "#3B82F6".into()));
        assert!(!state.acknowledge_copy(older, CopyTarget::Base, "#3B82F6".into()));
        assert!(state.is_copied(&swatch));

        // Still dropped once the newer acknowledgment has expired.
        state.expire_copy(newer);
        assert!(!state.acknowledge_copy(older, CopyTarget::Base, "#3B82F6".into()));
        assert!(state.copied.is_none());
    }

    #[test]
    fn toast_expires_only_for_its_own_timer() {
        let mut state = AppState::new(blue());
        let old = Toast::new("old");
        let stale = old.created_at;
        state.toast = Some(old);
        std::thread::sleep(Duration::from_millis(2));
        let current = Toast::new("current");
        let created_at = current.created_at;
        state.toast = Some(current);

        state.expire_toast(stale);
        assert!(state.toast.is_some());
        state.expire_toast(created_at);
        assert!(state.toast.is_none());
    }

    #[test]
    fn regeneration_drops_swatch_acknowledgment() {
        let mut state = AppState::new(blue());
        state.generate();
        let id = state.request_copy();
        state.acknowledge_copy(
            id,
            CopyTarget::Swatch {
                palette: "Monochrome",
                index: 0,
            },
            "#000000".into(),
        );
        state.generate();
        assert!(state.copied.is_none());

        let id = state.request_copy();
        state.acknowledge_copy(id, CopyTarget::Base, "#3B82F6".into());
        state.generate();
        assert!(state.is_copied(&CopyTarget::Base));
    }
}
