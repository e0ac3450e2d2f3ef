//! Native desktop helpers: save dialog and clipboard.

use std::path::PathBuf;

use crate::platform::{PlatformError, PlatformResult};

/// Show a save dialog for a PNG screenshot.
pub fn pick_save_path(default_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Save screenshot")
        .set_file_name(format!("{default_name}.png"))
        .add_filter("PNG File", &["png"])
        .save_file()
}

/// Put `text` on the system clipboard.
pub fn copy_text(text: &str) -> PlatformResult<()> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| PlatformError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| PlatformError::Clipboard(e.to_string()))?;
    log::info!("Copied to clipboard: {text}");
    Ok(())
}
