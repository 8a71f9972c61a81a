//! System clipboard access.

use crate::error::EffectError;

/// Write plain text to the system clipboard.
///
/// Blocking: the app calls this from `spawn_blocking`.
pub fn write_text(text: &str) -> Result<(), EffectError> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)?;
    tracing::debug!(text, "copied to clipboard");
    Ok(())
}
