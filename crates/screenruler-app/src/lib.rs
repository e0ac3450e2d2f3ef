//! Screen ruler application layer
//!
//! Binds the core state machine and the paint pipeline to a host shell
//! through the [`Platform`] trait: key bindings, commands, screenshots and
//! translation of winit input.

pub mod platform;
pub mod screenshot;
pub mod shortcuts;
pub mod widget;
pub mod winit_input;

#[cfg(feature = "native")]
mod native;

pub use platform::{CapturedImage, Platform, PlatformError, PlatformResult};
pub use screenshot::{ScreenshotError, ScreenshotResult};
pub use shortcuts::{Command, Shortcut, ShortcutRegistry};
pub use widget::RulerWidget;
