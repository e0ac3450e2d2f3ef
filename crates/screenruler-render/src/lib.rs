//! Screen Ruler Render Library
//!
//! Tick and label layout, overlays and the paint pipeline for the screen
//! ruler. Drawing goes through the [`Surface`] trait so any 2D backend can
//! host it; [`DisplayList`] records draw calls for headless use.

mod display_list;
pub mod overlays;
mod paint;
pub mod readout;
mod renderer;
pub mod ticks;

pub use display_list::{DisplayList, DrawCommand, FixedMetrics};
pub use paint::{PaintOutput, paint};
pub use readout::resolution_text;
pub use renderer::{Align, HAlign, Palette, RenderContext, Surface, TextMetrics, TextStyle, VAlign, gray};
