//! System clipboard access.

use thiserror::Error;

/// Clipboard failures.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The clipboard could not be opened or written.
    #[error("clipboard access failed: {0}")]
    Access(String),
    /// Nothing to copy.
    #[error("nothing to copy")]
    Empty,
}

/// Copies `text` to the system clipboard.
///
/// # Errors
///
/// Returns an error if `text` is empty or the clipboard is unavailable.
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    if text.is_empty() {
        return Err(ClipboardError::Empty);
    }

    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ClipboardError::Access(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| ClipboardError::Access(e.to_string()))?;

    tracing::debug!(chars = text.chars().count(), "Copied to clipboard");
    Ok(())
}
