use super::state::CopyTarget;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Event {
    Input(InputEvent),
    Effect(EffectEvent),
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize,
}

/// Outcomes of work done off the event loop.
#[derive(Debug, Clone)]
pub enum EffectEvent {
    Copied { id: u64, target: CopyTarget, text: String },
    CopyFailed { text: String, error: String },
    CopyAckExpired { id: u64 },
    Exported { palette: &'static str, path: PathBuf },
    ExportFailed { palette: &'static str, error: String },
    ToastExpired { created_at: Instant },
}
