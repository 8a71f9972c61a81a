//! Generated palettes, one card per style

use super::truncate_str;
use crate::app::state::{AppState, CopyTarget, Focus};
use crate::generator::GeneratedPalette;
use crate::tui::theme::get_theme;
use crate::tui::to_term;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Name, description, two swatch rows and a spacer.
const CARD_HEIGHT: u16 = 5;

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;
    let focused = state.focus == Focus::Palettes;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(if focused {
            theme.colors.border_focused
        } else {
            theme.colors.border
        }))
        .title(format!(" {} Palettes générées ", icons.palette))
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

    if state.palettes.is_empty() {
        let empty = Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(
                "Aucune palette pour l'instant",
                Style::default().fg(theme.colors.fg_primary),
            )),
            Line::from(Span::styled(
                "Choisissez une couleur puis appuyez sur Entrée",
                Style::default().fg(theme.colors.fg_secondary),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(empty, padded);
        return;
    }

    let visible = (padded.height / CARD_HEIGHT).max(1) as usize;
    let offset = scroll_offset(state.palette_selected, visible, state.palettes.len());

    for (slot, (index, palette)) in state
        .palettes
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .enumerate()
    {
        let y = padded.y + slot as u16 * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(padded.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        let card = Rect::new(padded.x, y, padded.width, height);
        render_card(frame, state, palette, index, focused, card);
    }

    // Scroll position indicator
    if state.palettes.len() > visible {
        let pos_text = format!("{}/{}", state.palette_selected + 1, state.palettes.len());
        let pos_len = pos_text.len() as u16;
        let pos_x = padded.x + padded.width.saturating_sub(pos_len);
        if pos_x > padded.x {
            frame.render_widget(
                Paragraph::new(pos_text).style(Style::default().fg(theme.colors.fg_secondary)),
                Rect::new(pos_x, padded.y, pos_len, 1),
            );
        }
    }
}

fn render_card(
    frame: &mut Frame,
    state: &AppState,
    palette: &GeneratedPalette,
    index: usize,
    focused: bool,
    area: Rect,
) {
    let theme = get_theme();
    let icons = &theme.icons;
    let selected = index == state.palette_selected;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Name
            Constraint::Length(1), // Description
            Constraint::Length(2), // Swatches
            Constraint::Min(0),
        ])
        .split(area);

    let marker = if selected { icons.selected } else { icons.unselected };
    let name_style = if selected {
        Style::default()
            .fg(theme.colors.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.colors.fg_primary)
    };
    let name = Line::from(vec![
        Span::styled(format!("{marker} "), name_style),
        Span::styled(palette.name(), name_style),
        Span::styled(
            format!("  {} couleurs", palette.len()),
            Style::default().fg(theme.colors.fg_secondary),
        ),
    ]);
    frame.render_widget(Paragraph::new(name), rows[0]);

    let description = Line::from(Span::styled(
        format!(
            "  {}",
            truncate_str(palette.description(), rows[1].width.saturating_sub(2) as usize)
        ),
        Style::default().fg(theme.colors.fg_secondary),
    ));
    frame.render_widget(Paragraph::new(description), rows[1]);

    let swatch_area = Rect {
        x: rows[2].x + 2,
        width: rows[2].width.saturating_sub(2),
        ..rows[2]
    };
    let constraints = vec![Constraint::Ratio(1, palette.len() as u32); palette.len()];
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(swatch_area);

    for (i, (color, cell)) in palette.colors().iter().zip(cells.iter()).enumerate() {
        let is_current = selected && focused && i == state.swatch_selected;
        let copied = state.is_copied(&CopyTarget::Swatch {
            palette: palette.name(),
            index: i,
        });

        let mut label_style = Style::default().fg(to_term(color.label_color()));
        if is_current {
            label_style = label_style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        let top = if copied {
            format!("{} Copié", icons.copied)
        } else {
            String::new()
        };
        let text = vec![
            Line::from(Span::styled(top, label_style)),
            Line::from(Span::styled(color.hex(), label_style)),
        ];
        frame.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(Style::default().bg(to_term(*color))),
            *cell,
        );
    }
}

/// First card to draw so that `selected` stays on screen.
fn scroll_offset(selected: usize, visible: usize, total: usize) -> usize {
    if total <= visible {
        return 0;
    }
    let max_offset = total - visible;
    selected.saturating_sub(visible - 1).min(max_offset)
}
