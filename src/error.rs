//! Error kinds shared by the color engine and the side-effecting helpers.

use std::path::PathBuf;
use thiserror::Error;

/// Malformed color input. Only `#RRGGBB` is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color {0:?}: expected # followed by 6 hex digits")]
    InvalidHex(String),
}

/// A clipboard write or an export file write failed.
#[derive(Debug, Error)]
pub enum EffectError {
    #[error("clipboard unavailable: {0}")]
    Clipboard(#[from] arboard::Error),

    #[error("write {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("palette json: {0}")]
    Json(#[from] serde_json::Error),
}
