//! Keybindings popup

use crate::tui::theme::{Theme, get_theme};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.colors.border_focused))
        .style(Style::default().bg(theme.colors.bg_primary))
        .title(format!(" {} Raccourcis ", icons.help))
        .title_style(Style::default().fg(theme.colors.accent));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let left_content = vec![
        section_header("Couleur de base", &theme),
        keybind("0-9 a-f #", "Saisir l'hexadécimal", &theme),
        keybind("Backspace", "Effacer un caractère", &theme),
        keybind("Ctrl+u", "Revenir à la couleur initiale", &theme),
        keybind("Up / Down", "Choisir le canal", &theme),
        keybind("Left / Right", "Ajuster le canal", &theme),
        keybind("Shift+flèche", "Ajuster par 10", &theme),
        keybind("Ctrl+y", "Copier la couleur de base", &theme),
        keybind("Enter", "Générer les palettes", &theme),
    ];
    frame.render_widget(
        Paragraph::new(left_content).wrap(Wrap { trim: false }),
        cols[0],
    );

    let right_content = vec![
        section_header("Palettes", &theme),
        keybind("j / Down", "Palette suivante", &theme),
        keybind("k / Up", "Palette précédente", &theme),
        keybind("h / l", "Changer de couleur", &theme),
        keybind("g / G", "Première / dernière", &theme),
        keybind("Enter / y", "Copier la couleur", &theme),
        keybind("Y", "Copier la couleur de base", &theme),
        keybind("e", "Exporter en JSON", &theme),
        keybind("r", "Régénérer", &theme),
        Line::default(),
        section_header("Général", &theme),
        keybind("Tab", "Changer de panneau", &theme),
        keybind("/ / i", "Retour au sélecteur", &theme),
        keybind("? / F1", "Afficher l'aide", &theme),
        keybind("q / Esc", "Quitter", &theme),
    ];
    frame.render_widget(
        Paragraph::new(right_content).wrap(Wrap { trim: false }),
        cols[1],
    );
}

fn section_header(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![Span::styled(
        format!("━━ {} ━━", title),
        Style::default()
            .fg(theme.colors.accent)
            .add_modifier(Modifier::BOLD),
    )])
}

fn keybind(key: &str, desc: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(
            format!("{:14}", key),
            Style::default()
                .fg(theme.colors.accent_alt)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(theme.colors.fg_primary)),
    ])
}
