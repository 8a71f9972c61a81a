//! Root layout widget - orchestrates main layout structure

use crate::app::state::{AppState, Focus};
use crate::tui::theme::get_theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{help, palettes, picker, truncate_str};

/// Main layout structure:
/// ┌──────────────────┬──────────────────────────────────┐
/// │  Sélectionnez    │        Palettes générées         │
/// │  une couleur     │  Monochrome  ████████████████    │
/// │  ██████████████  │  Complémentaire ████████████     │
/// │  Hex #3B82F6     │  ...                             │
/// │  Teinte ━━━●──   │                                  │
/// ├──────────────────┴──────────────────────────────────┤
/// │ status / toast                                      │
/// └─────────────────────────────────────────────────────┘
pub fn render(frame: &mut Frame, state: &AppState) {
    let root = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(12),   // Picker + palettes
            Constraint::Length(1), // Status bar
        ])
        .split(root);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(38), // Picker
            Constraint::Min(40),        // Palettes
        ])
        .split(rows[0]);

    picker::render(frame, state, cols[0]);
    palettes::render(frame, state, cols[1]);
    render_status(frame, state, rows[1]);

    if state.show_help {
        help::render(frame, centered(root, 84, 20));
    }
}

fn render_status(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;
    let width = area.width.saturating_sub(4) as usize;

    let line = if let Some(toast) = &state.toast
        && !toast.is_expired()
    {
        Line::from(vec![
            Span::styled(
                format!(" {} ", icons.download),
                Style::default().fg(theme.colors.success),
            ),
            Span::styled(
                truncate_str(&toast.message, width),
                Style::default().fg(theme.colors.success),
            ),
        ])
    } else {
        let hints: &[(&str, &str)] = match state.focus {
            Focus::Picker => &[
                ("Entrée", "générer"),
                ("Tab", "palettes"),
                ("Ctrl+y", "copier"),
                ("F1", "aide"),
                ("Esc", "quitter"),
            ],
            Focus::Palettes => &[
                ("Entrée", "copier"),
                ("e", "exporter"),
                ("Tab", "sélecteur"),
                ("?", "aide"),
                ("q", "quitter"),
            ],
        };
        let mut spans = vec![Span::styled(
            format!(" {} ", icons.info),
            Style::default().fg(theme.colors.fg_secondary),
        )];
        for (key, desc) in hints {
            spans.push(Span::styled(
                *key,
                Style::default()
                    .fg(theme.colors.accent_alt)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {desc}  "),
                Style::default().fg(theme.colors.fg_secondary),
            ));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    popup
}
