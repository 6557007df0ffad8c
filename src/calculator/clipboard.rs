//! Clipboard functionality for copying calculator results.

use arboard::Clipboard;

use crate::error::ClipboardError;

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(|e| ClipboardError::Access(e.to_string()))?;

    clipboard
        .set_text(text.to_string())
        .map_err(|e| ClipboardError::Copy(e.to_string()))?;

    tracing::debug!(text, "Copied result to clipboard");
    Ok(())
}
