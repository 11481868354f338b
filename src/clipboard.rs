//! Copying readout values to the system clipboard.

use crate::error::{CalcError, Result};
use crate::readout::Readout;
use arboard::Clipboard;

/// Copy the readout's value to the clipboard and return the copied text.
///
/// Numbers go out raw, without separators, so they paste back into other
/// programs as numbers.
pub fn copy_readout(readout: &Readout) -> Result<String> {
    let text = readout.text_for_clipboard().to_string();

    let mut clipboard = Clipboard::new()
        .map_err(|e| CalcError::Clipboard(format!("Failed to access clipboard: {}", e)))?;
    clipboard
        .set_text(text.clone())
        .map_err(|e| CalcError::Clipboard(format!("Failed to copy to clipboard: {}", e)))?;

    tracing::info!(value = %text, "Copied to clipboard");
    Ok(text)
}
