//! Base color picker: swatch, hex field and HSL gauges

use crate::app::state::{AppState, Channel, CopyTarget, Focus};
use crate::color;
use crate::tui::theme::{Icons, get_theme};
use crate::tui::to_term;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const CHANNELS: [Channel; 3] = [Channel::Hue, Channel::Saturation, Channel::Lightness];

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;
    let focused = state.focus == Focus::Picker;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(if focused {
            theme.colors.border_focused
        } else {
            theme.colors.border
        }))
        .title(format!(" {} Sélectionnez une couleur ", icons.picker))
        .title_style(Style::default().fg(theme.colors.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let padded = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner)[1];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Swatch
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Hex field
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Hue
            Constraint::Length(1), // Saturation
            Constraint::Length(1), // Lightness
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Generate hint
        ])
        .split(padded);

    render_swatch(frame, state, rows[0]);
    render_hex_field(frame, state, focused, rows[2]);
    for (channel, row) in CHANNELS.iter().zip(&rows[4..7]) {
        render_gauge(frame, state, *channel, focused, *row);
    }

    let hint = if state.is_stale() {
        Line::from(vec![
            Span::styled(
                "Entrée ",
                Style::default()
                    .fg(theme.colors.accent_alt)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Générer les palettes",
                Style::default().fg(theme.colors.fg_primary),
            ),
        ])
    } else {
        Line::from(Span::styled(
            format!("{} Palettes à jour", icons.copied),
            Style::default().fg(theme.colors.fg_secondary),
        ))
    };
    frame.render_widget(Paragraph::new(hint), rows[8]);
}

fn render_swatch(frame: &mut Frame, state: &AppState, area: Rect) {
    let base = state.base_color;
    let label = to_term(base.label_color());

    let mut lines = vec![Line::default(); (area.height.saturating_sub(1) / 2) as usize];
    lines.push(Line::from(Span::styled(
        base.hex(),
        Style::default().fg(label).add_modifier(Modifier::BOLD),
    )));

    let swatch = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(to_term(base)));
    frame.render_widget(swatch, area);
}

fn render_hex_field(frame: &mut Frame, state: &AppState, focused: bool, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let valid = color::is_valid_hex(&state.hex_input);
    let field_style = if valid {
        Style::default().fg(theme.colors.fg_primary)
    } else {
        Style::default().fg(theme.colors.invalid)
    };

    let mut spans = vec![
        Span::styled("Hex ", Style::default().fg(theme.colors.fg_secondary)),
        Span::styled(
            state.hex_input.clone(),
            field_style.bg(theme.colors.bg_highlight),
        ),
    ];
    if focused {
        spans.push(Span::styled(
            "▏",
            Style::default().fg(theme.colors.accent),
        ));
    }
    spans.push(Span::raw(" "));
    if !valid {
        spans.push(Span::styled(icons.invalid, Style::default().fg(theme.colors.invalid)));
    }
    if state.is_copied(&CopyTarget::Base) {
        spans.push(Span::styled(
            format!(" {} Copié", icons.copied),
            Style::default().fg(theme.colors.success),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_gauge(frame: &mut Frame, state: &AppState, channel: Channel, focused: bool, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;
    let active = focused && state.channel == channel;

    let marker = if active { icons.channel_selected } else { " " };
    let label_style = if active {
        Style::default()
            .fg(theme.colors.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.colors.fg_secondary)
    };

    let picker = state.picker;
    let value = match channel {
        Channel::Hue => format!("{:>4.0}°", picker.hue),
        Channel::Saturation => format!("{:>4.0}%", picker.saturation * 100.0),
        Channel::Lightness => format!("{:>4.0}%", picker.lightness * 100.0),
    };

    // marker + label (12) + spacing + value (5)
    let bar_width = (area.width as usize).saturating_sub(2 + 12 + 1 + 5);
    let bar = gauge_bar(bar_width, picker.fraction(channel), icons);

    let line = Line::from(vec![
        Span::styled(format!("{marker} "), label_style),
        Span::styled(format!("{:<12}", channel.label()), label_style),
        Span::styled(
            bar,
            Style::default().fg(if active {
                to_term(state.base_color)
            } else {
                theme.colors.border
            }),
        ),
        Span::raw(" "),
        Span::styled(value, Style::default().fg(theme.colors.fg_primary)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn gauge_bar(width: usize, ratio: f32, icons: &Icons) -> String {
    if width < 3 {
        return String::new();
    }

    let ratio = ratio.clamp(0.0, 1.0);
    let filled = ((width - 1) as f32 * ratio).round() as usize;
    let empty = width.saturating_sub(filled + 1);

    let mut bar = String::with_capacity(width * 3);
    for _ in 0..filled {
        bar.push_str(icons.gauge_full);
    }
    bar.push_str(icons.gauge_head);
    for _ in 0..empty {
        bar.push_str(icons.gauge_empty);
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_head_tracks_ratio() {
        let icons = Icons::nerd();
        assert_eq!(gauge_bar(5, 0.0, &icons), "●────");
        assert_eq!(gauge_bar(5, 1.0, &icons), "━━━━●");
        assert_eq!(gauge_bar(5, 0.5, &icons), "━━●──");
        assert_eq!(gauge_bar(2, 0.5, &icons), "");
    }
}
