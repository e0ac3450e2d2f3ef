//! The full paint pipeline.

use screenruler_core::state::ReadoutHit;

use crate::overlays::{draw_aligned_edges, draw_background, draw_grab_area, draw_hover_hints};
use crate::readout::{draw_readout, measurement_size};
use crate::renderer::{RenderContext, Surface, gray};
use crate::ticks::draw_ticks;

/// What a paint produced that later input handling needs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaintOutput {
    /// Where the readout landed. Default (empty, not clickable) when no
    /// readout was drawn.
    pub readout: ReadoutHit,
}

/// Paint one frame of the ruler.
///
/// Ticks, labels and the readout are skipped entirely while transparent.
pub fn paint(surface: &mut dyn Surface, ctx: &RenderContext) -> PaintOutput {
    let mut output = PaintOutput::default();
    log::trace!(
        "paint {}x{} unit={:?} transparent={}",
        ctx.width(),
        ctx.height(),
        ctx.converter.unit,
        ctx.state.transparent
    );

    draw_background(surface, ctx);
    draw_grab_area(surface, ctx);
    draw_hover_hints(surface, ctx);
    draw_aligned_edges(surface, ctx);

    if !ctx.state.transparent {
        draw_ticks(surface, ctx);
        let ink = gray(ctx.palette().ink, 200);
        let (size_x, size_y) = measurement_size(surface, ctx, ink);
        output.readout = draw_readout(surface, ctx, size_x, size_y, ink);
    }

    output
}
