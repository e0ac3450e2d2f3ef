//! Border tick marks and their labels.
//!
//! Ticks are laid out along all four borders. Which borders carry labels
//! depends on whether the window is tall (> 80px) and wide (>= 88px) enough
//! to hold labels on both sides without collisions.

use kurbo::{Line, Rect};
use screenruler_core::units::{Axis, TickConfig, is_near_step};

use crate::readout::resolution_text;
use crate::renderer::{Align, RenderContext, Surface, TextStyle, gray};

/// Minimum width for horizontal ticks.
pub const WIDE_ENOUGH: i32 = 88;
/// Height above which vertical ticks and two-row labels are shown.
pub const TALL_ENOUGH: i32 = 80;

const SUBTICK_ALPHA: u8 = 128;
const SMALLEST_GRID_ALPHA: u8 = 64;
const MAJOR_ALPHA: u8 = 200;
const MAJOR_TICK_LENGTH: f64 = 20.0;

/// Largest x at which a top-row label still fits left of a single-axis
/// readout.
pub fn right_label_limit(surface: &dyn Surface, ctx: &RenderContext) -> f64 {
    let (width, height) = (ctx.width(), ctx.height());
    let limit = width as f64 - 37.0;
    if height > TALL_ENOUGH {
        return limit;
    }
    let preview = resolution_text(&ctx.converter, width as f64, height as f64, false);
    let preview_width = surface.advance(&preview, 1.0);
    width as f64 - (preview_width + 12.0).max(37.0)
}

/// A subtick to draw at `pos`, or `None` if a major tick sits there.
fn subtick(pos: f64, config: &TickConfig) -> Option<(f64, bool)> {
    let tolerance = (config.small_step * 0.2).max(1.0);
    if is_near_step(pos, config.major_step, tolerance) {
        return None;
    }
    if config.distinct_subticks {
        if is_near_step(pos, config.medium_step, tolerance) {
            Some((10.0, false))
        } else {
            Some((5.0, true))
        }
    } else {
        let index = (pos / config.small_step).round() as i64;
        let size = ((index - 1).rem_euclid(2) + 1) as f64 * 5.0;
        Some((size, size == 5.0))
    }
}

/// Tick position in pixels: fractional for physical units, whole pixels
/// otherwise.
fn tick_location(pos: f64, config: &TickConfig) -> f64 {
    if config.distinct_subticks { pos } else { pos.round() }
}

/// Draw small and medium ticks on all borders.
pub fn draw_subticks(surface: &mut dyn Surface, ctx: &RenderContext, x_config: &TickConfig, y_config: &TickConfig) {
    let ink = ctx.palette().ink;
    let grid = ctx.state.grid_enabled;
    let width = ctx.width() as f64;
    let height = ctx.height() as f64;
    let color_for = |smallest: bool| {
        if grid && smallest {
            gray(ink, SMALLEST_GRID_ALPHA)
        } else {
            gray(ink, SUBTICK_ALPHA)
        }
    };

    if ctx.width() >= WIDE_ENOUGH {
        let mut pos = x_config.small_step;
        while pos < width - 1.0 {
            if let Some((size, smallest)) = subtick(pos, x_config) {
                let color = color_for(smallest);
                let x = tick_location(pos, x_config);
                let end = if grid { height } else { size };
                surface.line(Line::new((x, 0.0), (x, end)), color, 1.0);
                if ctx.height() > 43 && !grid {
                    surface.line(Line::new((x, height), (x, height - size)), color, 1.0);
                }
            }
            pos += x_config.small_step;
        }
    }

    if ctx.height() > TALL_ENOUGH {
        let mut pos = y_config.small_step;
        while pos < height - 1.0 {
            if let Some((size, smallest)) = subtick(pos, y_config) {
                let color = color_for(smallest);
                let y = tick_location(pos, y_config);
                let end = if grid { width } else { size };
                surface.line(Line::new((0.0, y), (end, y)), color, 1.0);
                if ctx.width() > 43 && !grid {
                    surface.line(Line::new((width, y), (width - size, y)), color, 1.0);
                }
            }
            pos += y_config.small_step;
        }
    }
}

/// Draw major ticks on all borders and their value labels.
pub fn draw_major_ticks(
    surface: &mut dyn Surface,
    ctx: &RenderContext,
    right_label_limit: f64,
    x_config: &TickConfig,
    y_config: &TickConfig,
) {
    let color = gray(ctx.palette().ink, MAJOR_ALPHA);
    let style = TextStyle::new(color);
    let grid = ctx.state.grid_enabled;
    let (w, h) = (ctx.width(), ctx.height());
    let (width, height) = (w as f64, h as f64);

    if w >= WIDE_ENOUGH {
        let mut index = 1;
        let mut pos = x_config.major_step;
        while pos < width - 1.0 {
            let x = pos.round();
            let label = ctx.converter.format_tick_label(index as f64 * x_config.major_unit_value);
            let end = if grid { height } else { MAJOR_TICK_LENGTH };
            surface.line(Line::new((x, 0.0), (x, end)), color, 1.0);
            if h > 52 && !grid {
                surface.line(Line::new((x, height), (x, height - MAJOR_TICK_LENGTH)), color, 1.0);
            }

            if x < right_label_limit || h > TALL_ENOUGH {
                if h > TALL_ENOUGH {
                    if x < width - 37.0 {
                        surface.text(Rect::new(x - 25.0, 19.0, x + 25.0, 34.0), Align::CENTER, &label, &style);
                        surface.text(
                            Rect::new(x - 25.0, height - 35.0, x + 25.0, height - 20.0),
                            Align::CENTER,
                            &label,
                            &style,
                        );
                    }
                } else if h < 54 {
                    surface.text(Rect::new(x - 25.0, 19.0, x + 25.0, 34.0), Align::CENTER, &label, &style);
                } else {
                    surface.text(Rect::new(x - 25.0, 0.0, x + 25.0, height), Align::CENTER, &label, &style);
                }
            }

            index += 1;
            pos += x_config.major_step;
        }
    }

    if h > TALL_ENOUGH {
        let mut index = 1;
        let mut pos = y_config.major_step;
        while pos < height - 9.0 {
            let y = pos.round();
            let label = ctx.converter.format_tick_label(index as f64 * y_config.major_unit_value);
            let end = if grid { width } else { MAJOR_TICK_LENGTH };
            surface.line(Line::new((0.0, y), (end, y)), color, 1.0);
            if w > 52 && !grid {
                surface.line(Line::new((width, y), (width - MAJOR_TICK_LENGTH, y)), color, 1.0);
            }

            if y < height - 35.0 {
                if w >= WIDE_ENOUGH {
                    surface.text(Rect::new(23.0, y - 7.0, 73.0, y + 13.0), Align::LEFT, &label, &style);
                    surface.text(
                        Rect::new(width - 63.0, y - 7.0, width - 23.0, y + 43.0),
                        Align::RIGHT,
                        &label,
                        &style,
                    );
                } else if w > 62 {
                    surface.text(Rect::new(0.0, y - 25.0, width, y + 25.0), Align::CENTER, &label, &style);
                }
            }

            index += 1;
            pos += y_config.major_step;
        }
    }
}

/// Draw all ticks and labels for the current unit.
pub fn draw_ticks(surface: &mut dyn Surface, ctx: &RenderContext) {
    let limit = right_label_limit(surface, ctx);
    let x_config = ctx.converter.tick_config(Axis::X);
    let y_config = ctx.converter.tick_config(Axis::Y);
    draw_subticks(surface, ctx, &x_config, &y_config);
    draw_major_ticks(surface, ctx, limit, &x_config, &y_config);
}
