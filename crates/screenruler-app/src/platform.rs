//! Capabilities the widget needs from the windowing shell.

use std::path::PathBuf;

use screenruler_core::geometry::Geometry;
use screenruler_core::hit_test::CursorShape;
use screenruler_core::screen::{ScreenInfo, ScreenProvider};
use thiserror::Error;

/// Platform errors.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("Screen capture failed: {0}")]
    Capture(String),
    #[error("Clipboard error: {0}")]
    Clipboard(String),
    #[error("Platform capability not available: {0}")]
    Unsupported(&'static str),
}

/// Result type for platform operations.
pub type PlatformResult<T> = Result<T, PlatformError>;

/// Captured screen pixels, RGBA8, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl CapturedImage {
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        Self { width, height, rgba }
    }
}

/// Window, dialog and desktop services provided by the host shell.
///
/// All geometry is in global screen pixels unless a method says otherwise.
/// Modal methods (`choose_geometry`, `save_file_path`) block until the user
/// answers; `None` means cancelled.
pub trait Platform: ScreenProvider {
    /// Move and resize the ruler window.
    fn set_geometry(&mut self, geometry: Geometry);

    fn set_cursor(&mut self, cursor: CursorShape);

    fn request_repaint(&mut self);

    /// Let pointer input pass through the window.
    fn set_click_through(&mut self, enabled: bool);

    /// Place the "disable click-through" control, or hide it with `None`.
    fn set_click_through_control(&mut self, geometry: Option<Geometry>);

    /// Preferred `(width, height)` of the "disable click-through" control.
    fn click_through_control_size_hint(&self) -> (i32, i32) {
        (160, 30)
    }

    fn set_visible(&mut self, visible: bool);

    fn close(&mut self);

    /// Ask for an exact window geometry, starting from `current`.
    fn choose_geometry(&mut self, current: Geometry) -> Option<Geometry>;

    fn show_help(&mut self, text: &str);

    /// Ask where to save a screenshot.
    fn save_file_path(&mut self, default_name: &str) -> Option<PathBuf> {
        #[cfg(feature = "native")]
        {
            crate::native::pick_save_path(default_name)
        }
        #[cfg(not(feature = "native"))]
        {
            log::warn!("No save dialog available for {default_name}");
            None
        }
    }

    /// Grab the pixels of `rect`, given in coordinates local to `screen`.
    fn capture(&mut self, screen: &ScreenInfo, rect: Geometry) -> PlatformResult<CapturedImage>;

    fn set_clipboard_text(&mut self, text: &str) -> PlatformResult<()> {
        #[cfg(feature = "native")]
        {
            crate::native::copy_text(text)
        }
        #[cfg(not(feature = "native"))]
        {
            let _ = text;
            Err(PlatformError::Unsupported("clipboard"))
        }
    }
}
