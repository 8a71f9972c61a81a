pub mod actions;
pub mod events;
pub mod state;

use crate::clipboard;
use crate::color::Color;
use crate::config::Config;
use crate::export;
use crate::input;
use crate::tui::{self, TuiTerminal};
use actions::Action;
use events::{EffectEvent, Event};
use state::{AppState, CopyTarget, Focus, Toast};
use tokio::sync::mpsc;
use std::time::Instant;
use tokio::task::JoinHandle;

pub struct App {
    cfg: Config,
    state: AppState,
    /// Pending expiry of the "Copié" acknowledgment; replaced on every copy.
    ack_timer: Option<JoinHandle<()>>,
    toast_timer: Option<JoinHandle<()>>,
}

impl App {
    pub fn new(cfg: Config, initial_color: Option<Color>) -> anyhow::Result<Self> {
        let configured = cfg.initial_color()?;
        let mut state = AppState::new(configured);
        if let Some(color) = initial_color {
            state.hex_input = color.hex();
            state.commit_input();
        }

        Ok(Self {
            cfg,
            state,
            ack_timer: None,
            toast_timer: None,
        })
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(64);

        input::spawn_input_task(tx.clone());

        tui::draw(terminal, &mut self.state)?;

        while let Some(ev) = rx.recv().await {
            match ev {
                Event::Input(input_ev) => {
                    if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                        self.handle_action(action, &tx);
                    }
                }
                Event::Effect(effect) => self.handle_effect(effect, &tx),
            }

            if self.state.should_quit {
                break;
            }

            tui::draw(terminal, &mut self.state)?;
        }

        for timer in [self.ack_timer.take(), self.toast_timer.take()]
            .into_iter()
            .flatten()
        {
            timer.abort();
        }
        Ok(())
    }

    fn handle_action(&mut self, action: Action, tx: &mpsc::Sender<Event>) {
        match action {
            Action::Generate => {
                self.state.generate();
                tracing::info!(base = %self.state.base_color, "palettes generated");
            }
            Action::CopyBaseColor => {
                let id = self.state.request_copy();
                let text = self.state.base_color.hex();
                self.spawn_copy(id, CopyTarget::Base, text, tx);
            }
            Action::CopySelectedColor => {
                let selected = self
                    .state
                    .selected_palette()
                    .map(|p| p.name())
                    .zip(self.state.selected_color());
                if let Some((palette, color)) = selected {
                    let target = CopyTarget::Swatch {
                        palette,
                        index: self.state.swatch_selected,
                    };
                    let id = self.state.request_copy();
                    self.spawn_copy(id, target, color.hex(), tx);
                }
            }
            Action::ExportSelected => self.spawn_export(tx),
            _ => self.reduce(action),
        }
    }

    fn reduce(&mut self, action: Action) {
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::ToggleFocus => {
                self.state.focus = self.state.focus.toggle();
                if self.state.focus == Focus::Palettes && self.state.palettes.is_empty() {
                    self.state.focus = Focus::Picker;
                }
            }
            Action::FocusPicker => self.state.focus = Focus::Picker,
            Action::ToggleHelp => self.state.show_help = !self.state.show_help,
            Action::Resize => {}
            Action::InputChar(c) => self.state.input_char(c),
            Action::Backspace => self.state.backspace(),
            Action::ClearInput => self.state.clear_input(),
            Action::NextChannel => self.state.channel = self.state.channel.next(),
            Action::PrevChannel => self.state.channel = self.state.channel.prev(),
            Action::Nudge(steps) => self.state.nudge(steps),
            Action::PaletteUp => {
                let index = self.state.palette_selected.saturating_sub(1);
                self.select_palette(index);
            }
            Action::PaletteDown => {
                let index = self.state.palette_selected + 1;
                self.select_palette(index);
            }
            Action::GoTop => self.select_palette(0),
            Action::GoBottom => self.select_palette(usize::MAX),
            Action::SwatchLeft => self.state.select_swatch_prev(),
            Action::SwatchRight => self.state.select_swatch_next(),
            Action::Generate
            | Action::CopyBaseColor
            | Action::CopySelectedColor
            | Action::ExportSelected => {} // handled in handle_action
        }
    }

    fn select_palette(&mut self, index: usize) {
        if self.state.select_palette(index)
            && let Some(palette) = self.state.selected_palette()
        {
            tracing::info!(palette = palette.name(), "palette selected");
        }
    }

    fn handle_effect(&mut self, effect: EffectEvent, tx: &mpsc::Sender<Event>) {
        match effect {
            EffectEvent::Copied { id, target, text } => {
                if self.state.acknowledge_copy(id, target, text) {
                    self.arm_copy_ack(id, tx);
                }
            }
            EffectEvent::CopyFailed { text, error } => {
                tracing::error!(%text, %error, "copy failed");
            }
            EffectEvent::CopyAckExpired { id } => self.state.expire_copy(id),
            EffectEvent::Exported { palette, path } => {
                let toast = Toast::new(format!("{palette} exportée vers {}", path.display()));
                let created_at = toast.created_at;
                self.state.toast = Some(toast);
                self.arm_toast_expiry(created_at, tx);
            }
            EffectEvent::ExportFailed { palette, error } => {
                tracing::error!(palette, %error, "export failed");
            }
            EffectEvent::ToastExpired { created_at } => self.state.expire_toast(created_at),
        }
    }

    fn spawn_copy(&self, id: u64, target: CopyTarget, text: String, tx: &mpsc::Sender<Event>) {
        let tx = tx.clone();
        tokio::task::spawn_blocking(move || {
            let event = match clipboard::write_text(&text) {
                Ok(()) => EffectEvent::Copied { id, target, text },
                Err(e) => EffectEvent::CopyFailed {
                    text,
                    error: format!("{e:#}"),
                },
            };
            let _ = tx.blocking_send(Event::Effect(event));
        });
    }

    /// Single-shot expiry for the latest acknowledgment. Any earlier timer is
    /// aborted so only the most recent copy is ever shown.
    fn arm_copy_ack(&mut self, id: u64, tx: &mpsc::Sender<Event>) {
        if let Some(previous) = self.ack_timer.take() {
            previous.abort();
        }
        let delay = self.cfg.copied_ack();
        let tx = tx.clone();
        self.ack_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx
                .send(Event::Effect(EffectEvent::CopyAckExpired { id }))
                .await;
        }));
    }

    /// Redraw without the toast once its TTL has passed, even if no key is pressed.
    fn arm_toast_expiry(&mut self, created_at: Instant, tx: &mpsc::Sender<Event>) {
        if let Some(previous) = self.toast_timer.take() {
            previous.abort();
        }
        let tx = tx.clone();
        self.toast_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(Toast::TTL).await;
            let _ = tx
                .send(Event::Effect(EffectEvent::ToastExpired { created_at }))
                .await;
        }));
    }

    fn spawn_export(&self, tx: &mpsc::Sender<Event>) {
        let Some(palette) = self.state.selected_palette().cloned() else {
            return;
        };
        let base = self.state.generated_from.unwrap_or(self.state.base_color);
        let dir = self.cfg.export.dir.clone();
        let tx = tx.clone();

        tokio::task::spawn_blocking(move || {
            let name = palette.name();
            let event = match export::save(&palette, base, &dir) {
                Ok(path) => EffectEvent::Exported {
                    palette: name,
                    path,
                },
                Err(e) => EffectEvent::ExportFailed {
                    palette: name,
                    error: format!("{e:#}"),
                },
            };
            let _ = tx.blocking_send(Event::Effect(event));
        });
    }
}
