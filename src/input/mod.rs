use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::{AppState, Focus};
use crossterm::event::{
    self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind,
};
use tokio::sync::mpsc;

/// Arrow steps held with Shift.
const FAST_NUDGE: i32 = 10;

pub fn spawn_input_task(tx: mpsc::Sender<Event>) {
    tokio::task::spawn_blocking(move || {
        loop {
            if event::poll(std::time::Duration::from_millis(250)).unwrap_or(false) {
                let ev = match event::read() {
                    Ok(CtEvent::Key(k)) if k.kind == KeyEventKind::Press => InputEvent::Key(k),
                    Ok(CtEvent::Mouse(m)) => InputEvent::Mouse(m),
                    Ok(CtEvent::Resize(_, _)) => InputEvent::Resize,
                    Ok(_) => continue,
                    Err(e) => {
                        tracing::warn!(error = %e, "terminal read failed");
                        continue;
                    }
                };
                if tx.blocking_send(Event::Input(ev)).is_err() {
                    break;
                }
            } else if tx.is_closed() {
                break;
            }
        }
    });
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Mouse(m) => match (state.focus, m.kind) {
            (Focus::Palettes, MouseEventKind::ScrollUp) => Some(Action::PaletteUp),
            (Focus::Palettes, MouseEventKind::ScrollDown) => Some(Action::PaletteDown),
            (Focus::Picker, MouseEventKind::ScrollUp) => Some(Action::Nudge(1)),
            (Focus::Picker, MouseEventKind::ScrollDown) => Some(Action::Nudge(-1)),
            _ => None,
        },
        InputEvent::Key(k) if state.show_help => handle_help(k),
        InputEvent::Key(k) => match state.focus {
            Focus::Picker => handle_picker(k),
            Focus::Palettes => handle_palettes(k),
        },
    }
}

fn handle_help(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::F(1) => {
            Some(Action::ToggleHelp)
        }
        _ => None,
    }
}

fn handle_picker(k: KeyEvent) -> Option<Action> {
    let ctrl = k.modifiers.contains(KeyModifiers::CONTROL);
    let step = if k.modifiers.contains(KeyModifiers::SHIFT) { FAST_NUDGE } else { 1 };

    match k.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::ToggleFocus),
        KeyCode::F(1) => Some(Action::ToggleHelp),
        KeyCode::Enter => Some(Action::Generate),
        KeyCode::Backspace => Some(Action::Backspace),

        // Visual picker
        KeyCode::Up => Some(Action::PrevChannel),
        KeyCode::Down => Some(Action::NextChannel),
        KeyCode::Left => Some(Action::Nudge(-step)),
        KeyCode::Right => Some(Action::Nudge(step)),

        KeyCode::Char('u') if ctrl => Some(Action::ClearInput),
        KeyCode::Char('y') if ctrl => Some(Action::CopyBaseColor),
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => Some(Action::InputChar(c)),
        _ => None,
    }
}

fn handle_palettes(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::ToggleFocus),
        KeyCode::Char('/') | KeyCode::Char('i') => Some(Action::FocusPicker),
        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ToggleHelp),

        // Navigation - vim style
        KeyCode::Up | KeyCode::Char('k') => Some(Action::PaletteUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::PaletteDown),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::SwatchLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::SwatchRight),
        KeyCode::Char('g') => Some(Action::GoTop),
        KeyCode::Char('G') => Some(Action::GoBottom),

        // Actions
        KeyCode::Enter | KeyCode::Char('y') => Some(Action::CopySelectedColor),
        KeyCode::Char('Y') => Some(Action::CopyBaseColor),
        KeyCode::Char('e') | KeyCode::Char('d') => Some(Action::ExportSelected),
        KeyCode::Char('r') | KeyCode::F(5) => Some(Action::Generate),

        _ => None,
    }
}
