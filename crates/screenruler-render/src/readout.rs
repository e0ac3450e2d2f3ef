//! Size readout, status lines and pick-mode crosshairs.

use kurbo::{Line, Rect};
use screenruler_core::state::ReadoutHit;
use screenruler_core::units::{Axis, UnitConverter};

use crate::renderer::{Align, RenderContext, Surface, TextStyle, gray};
use crate::ticks::{TALL_ENOUGH, WIDE_ENOUGH};

const STATUS_ALPHA: u8 = 150;
const STATUS_SCALE: f64 = 0.9;

/// Readout text: `"W x H unit"`, or `"W unit"` without the height.
pub fn resolution_text(converter: &UnitConverter, size_x: f64, size_y: f64, include_y: bool) -> String {
    let unit = converter.unit.suffix();
    let x_text = converter.format_measurement(size_x, Axis::X);
    if include_y {
        let y_text = converter.format_measurement(size_y, Axis::Y);
        format!("{x_text} x {y_text} {unit}")
    } else {
        format!("{x_text} {unit}")
    }
}

/// Quantity to display: the window size, or the pointer offset in pick
/// mode. Pick mode also draws crosshairs at the pointer.
pub fn measurement_size(surface: &mut dyn Surface, ctx: &RenderContext, color: peniko::Color) -> (f64, f64) {
    let (w, h) = (ctx.width(), ctx.height());
    let Some(pick) = ctx.pick_position else {
        return (w as f64, h as f64);
    };

    let (x, y) = (pick.x as f64, pick.y as f64);
    let (width, height) = (w as f64, h as f64);
    let vertical = Line::new((x, 0.0), (x, height));
    let horizontal = Line::new((0.0, y), (width, y));
    if h > TALL_ENOUGH && w >= WIDE_ENOUGH {
        surface.line(vertical, color, 1.0);
        surface.line(horizontal, color, 1.0);
    } else if w >= WIDE_ENOUGH {
        surface.line(vertical, color, 1.0);
    } else {
        surface.line(horizontal, color, 1.0);
    }
    (x, y)
}

/// Draw the readout and return where it landed.
///
/// Only the full `"W x H"` readout (tall and wide window) is clickable.
pub fn draw_readout(surface: &mut dyn Surface, ctx: &RenderContext, size_x: f64, size_y: f64, color: peniko::Color) -> ReadoutHit {
    let (w, h) = (ctx.width(), ctx.height());
    let (width, height) = (w as f64, h as f64);
    let style = TextStyle::new(color).with_underline(ctx.readout_hovered);

    let (text, rect, align, click_enabled) = if h > TALL_ENOUGH && w >= WIDE_ENOUGH {
        let text = resolution_text(&ctx.converter, size_x, size_y, true);
        (text, Rect::new(0.0, 0.0, width, height), Align::CENTER, true)
    } else if h > TALL_ENOUGH {
        let text = format!(
            "{} {}",
            ctx.converter.format_measurement(size_y, Axis::Y),
            ctx.converter.unit.suffix()
        );
        (text, Rect::new(0.0, height - 37.0, width, height - 17.0), Align::CENTER, false)
    } else {
        let text = resolution_text(&ctx.converter, size_x, size_y, false);
        let rect = if h < 54 {
            Rect::new(0.0, 19.0, width - 3.0, 34.0)
        } else {
            Rect::new(0.0, 0.0, width - 3.0, height)
        };
        (text, rect, Align::RIGHT_V_CENTER, false)
    };

    let hit = ReadoutHit {
        rect: surface.bounding_rect(rect, align, &text, 1.0),
        click_enabled,
    };
    surface.text(rect, align, &text, &style);
    if click_enabled {
        draw_status_messages(surface, ctx);
    }
    hit
}

/// Secondary status lines under the centered readout.
pub fn draw_status_messages(surface: &mut dyn Surface, ctx: &RenderContext) {
    let messages = ctx.state.status_messages();
    if messages.is_empty() {
        return;
    }

    let style = TextStyle::new(gray(ctx.palette().ink, STATUS_ALPHA)).with_scale(STATUS_SCALE);
    let line_height = surface.line_height(STATUS_SCALE);
    let start_y = (ctx.height() / 2 + 10) as f64;
    let width = ctx.width() as f64;

    for (index, message) in messages.iter().enumerate() {
        let top = start_y + index as f64 * line_height;
        let rect = Rect::new(0.0, top, width, top + line_height + 2.0);
        surface.text(rect, Align::H_CENTER, message, &style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_list::DisplayList;
    use screenruler_core::geometry::{Geometry, PixelPoint};
    use screenruler_core::screen::ScreenMetrics;
    use screenruler_core::state::RulerState;
    use screenruler_core::units::Unit;

    fn converter(unit: Unit) -> UnitConverter {
        UnitConverter::new(unit, Some(ScreenMetrics::standard()))
    }

    fn ink() -> peniko::Color {
        gray(0, 200)
    }

    #[test]
    fn test_resolution_text() {
        let px = converter(Unit::Pixels);
        assert_eq!(resolution_text(&px, 690.0, 70.0, true), "690 x 70 px");
        assert_eq!(resolution_text(&px, 690.0, 70.0, false), "690 px");
        let inches = converter(Unit::Inches);
        assert_eq!(resolution_text(&inches, 192.0, 48.0, true), "2 x 0.5 in");
    }

    #[test]
    fn test_full_readout_is_clickable() {
        let state = RulerState::new(Geometry::new(0, 0, 400, 200));
        let ctx = RenderContext::new(&state, converter(Unit::Pixels));
        let mut list = DisplayList::new();
        let hit = draw_readout(&mut list, &ctx, 400.0, 200.0, ink());

        assert!(hit.click_enabled);
        // "400 x 200 px" is 12 chars, 84px wide, centered.
        assert_eq!(hit.rect, Rect::new(158.0, 92.5, 242.0, 107.5));
        assert!(list.has_text("400 x 200 px"));
    }

    #[test]
    fn test_narrow_tall_readout_shows_height() {
        let state = RulerState::new(Geometry::new(0, 0, 70, 300));
        let ctx = RenderContext::new(&state, converter(Unit::Pixels));
        let mut list = DisplayList::new();
        let hit = draw_readout(&mut list, &ctx, 70.0, 300.0, ink());

        assert!(!hit.click_enabled);
        assert!(list.has_text("300 px"));
        let (rect, _, _) = list.texts().next().unwrap();
        assert_eq!(rect.y0, 263.0);
    }

    #[test]
    fn test_short_readout_right_aligned() {
        let state = RulerState::new(Geometry::new(0, 0, 690, 40));
        let ctx = RenderContext::new(&state, converter(Unit::Pixels));
        let mut list = DisplayList::new();
        let hit = draw_readout(&mut list, &ctx, 690.0, 40.0, ink());

        assert!(!hit.click_enabled);
        assert_eq!(hit.rect.x1, 687.0);
        assert_eq!(hit.rect.y0, 19.0);
    }

    #[test]
    fn test_hover_underlines_readout() {
        let state = RulerState::new(Geometry::new(0, 0, 400, 200));
        let ctx = RenderContext::new(&state, converter(Unit::Pixels)).with_readout_hovered(true);
        let mut list = DisplayList::new();
        draw_readout(&mut list, &ctx, 400.0, 200.0, ink());
        let (_, _, style) = list.texts().next().unwrap();
        assert!(style.underline);
    }

    #[test]
    fn test_status_messages_below_readout() {
        let mut state = RulerState::new(Geometry::new(0, 0, 400, 200));
        state.toggle_aspect_lock();
        state.click_through = true;
        let ctx = RenderContext::new(&state, converter(Unit::Pixels));
        let mut list = DisplayList::new();
        draw_readout(&mut list, &ctx, 400.0, 200.0, ink());

        let status: Vec<_> = list.texts().skip(1).collect();
        assert_eq!(status.len(), 2);
        assert_eq!(status[0].1, "Aspect Ratio Locked [2:1]");
        assert_eq!(status[0].0.y0, 110.0);
        assert_eq!(status[1].1, "Clickthrough Mode Enabled");
        assert_eq!(status[0].2.scale, STATUS_SCALE);
    }

    #[test]
    fn test_pick_mode_measures_pointer_offset() {
        let state = RulerState::new(Geometry::new(0, 0, 400, 200));
        let ctx = RenderContext::new(&state, converter(Unit::Pixels)).with_pick_position(Some(PixelPoint::new(120, 45)));
        let mut list = DisplayList::new();
        let size = measurement_size(&mut list, &ctx, ink());

        assert_eq!(size, (120.0, 45.0));
        assert_eq!(list.lines().count(), 2);
    }

    #[test]
    fn test_pick_mode_short_ruler_only_vertical_line() {
        let state = RulerState::new(Geometry::new(0, 0, 690, 70));
        let ctx = RenderContext::new(&state, converter(Unit::Pixels)).with_pick_position(Some(PixelPoint::new(300, 30)));
        let mut list = DisplayList::new();
        measurement_size(&mut list, &ctx, ink());

        let lines: Vec<_> = list.lines().collect();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0.p0.x, 300.0);
    }
}
