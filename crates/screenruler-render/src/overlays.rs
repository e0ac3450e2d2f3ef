//! Background panel, grab area, hover hints and screen-edge highlights.

use kurbo::{Line, Rect};
use peniko::Color;
use screenruler_core::hit_test::HANDLE_THICKNESS;

use crate::renderer::{RenderContext, Surface, gray};

const PANEL_RADIUS: f64 = 4.0;
const PANEL_ALPHA: u8 = 180;
const OUTLINE_ALPHA: u8 = 200;
const GRAB_AREA_ALPHA: u8 = 25;

/// Rounded background panel with a thin outline. Fully see-through when
/// transparent.
pub fn draw_background(surface: &mut dyn Surface, ctx: &RenderContext) {
    let palette = ctx.palette();
    let alpha = if ctx.state.transparent { 0 } else { PANEL_ALPHA };
    let rect = ctx.state.geometry.local_rect();
    surface.fill_rounded_rect(rect, PANEL_RADIUS, gray(palette.panel, alpha), Some(gray(palette.ink, OUTLINE_ALPHA)));
}

/// Translucent overlay over the move area: the whole window when
/// transparent, otherwise inset by the handle thickness.
pub fn draw_grab_area(surface: &mut dyn Surface, ctx: &RenderContext) {
    let color = gray(ctx.palette().highlight, GRAB_AREA_ALPHA);
    let (w, h) = (ctx.width() as f64, ctx.height() as f64);
    let rect = if ctx.state.transparent {
        Rect::new(0.0, 0.0, w.max(0.0), h.max(0.0))
    } else {
        let inset = HANDLE_THICKNESS as f64;
        let inner_w = (w - inset * 2.0).max(0.0);
        let inner_h = (h - inset * 2.0).max(0.0);
        Rect::new(inset, inset, inset + inner_w, inset + inner_h)
    };
    surface.fill_rect(rect, color);
}

/// Shade the highlighted resize zones. Corners where two zones overlap get
/// a second, stronger square.
pub fn draw_hover_hints(surface: &mut dyn Surface, ctx: &RenderContext) {
    let zones = ctx.highlight_zones;
    if !zones.any() {
        return;
    }

    let base = ctx.palette().highlight;
    let (edge_alpha, corner_alpha) = if ctx.state.transparent { (35, 65) } else { (55, 95) };
    let edge = gray(base, edge_alpha);
    let corner = gray(base, corner_alpha);

    let grab = HANDLE_THICKNESS as f64;
    let (w, h) = (ctx.width() as f64, ctx.height() as f64);
    let far_x = (w - grab).max(0.0);
    let far_y = (h - grab).max(0.0);
    let square = |x: f64, y: f64| Rect::new(x, y, x + grab, y + grab);

    if zones.top {
        surface.fill_rect(Rect::new(0.0, 0.0, w, grab), edge);
    }
    if zones.bottom {
        surface.fill_rect(Rect::new(0.0, far_y, w, far_y + grab), edge);
    }
    if zones.left {
        surface.fill_rect(Rect::new(0.0, 0.0, grab, h), edge);
    }
    if zones.right {
        surface.fill_rect(Rect::new(far_x, 0.0, far_x + grab, h), edge);
    }

    if zones.left && zones.top {
        surface.fill_rect(square(0.0, 0.0), corner);
    }
    if zones.right && zones.top {
        surface.fill_rect(square(far_x, 0.0), corner);
    }
    if zones.left && zones.bottom {
        surface.fill_rect(square(0.0, far_y), corner);
    }
    if zones.right && zones.bottom {
        surface.fill_rect(square(far_x, far_y), corner);
    }
}

/// Green lines along widget edges flush with the screen, while moving or
/// resizing.
pub fn draw_aligned_edges(surface: &mut dyn Surface, ctx: &RenderContext) {
    let edges = ctx.aligned_edges;
    if !ctx.moving || !edges.any() {
        return;
    }

    let green = Color::from_rgba8(0, 255, 0, 255);
    let max_x = (ctx.width() - 1).max(0) as f64;
    let max_y = (ctx.height() - 1).max(0) as f64;

    if edges.top {
        surface.line(Line::new((0.0, 0.0), (max_x, 0.0)), green, 2.0);
    }
    if edges.bottom {
        surface.line(Line::new((0.0, max_y), (max_x, max_y)), green, 2.0);
    }
    if edges.left {
        surface.line(Line::new((0.0, 0.0), (0.0, max_y)), green, 2.0);
    }
    if edges.right {
        surface.line(Line::new((max_x, 0.0), (max_x, max_y)), green, 2.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_list::DisplayList;
    use screenruler_core::geometry::Geometry;
    use screenruler_core::hit_test::Zones;
    use screenruler_core::state::RulerState;
    use screenruler_core::units::{Unit, UnitConverter};

    fn ctx_state(width: i32, height: i32) -> RulerState {
        RulerState::new(Geometry::new(0, 0, width, height))
    }

    fn converter() -> UnitConverter {
        UnitConverter::new(Unit::Pixels, None)
    }

    #[test]
    fn test_grab_area_inset() {
        let state = ctx_state(690, 70);
        let ctx = RenderContext::new(&state, converter());
        let mut list = DisplayList::new();
        draw_grab_area(&mut list, &ctx);
        let (rect, _) = list.rects().next().unwrap();
        assert_eq!(*rect, Rect::new(21.0, 21.0, 669.0, 49.0));
    }

    #[test]
    fn test_grab_area_collapses_on_tiny_window() {
        let state = ctx_state(30, 30);
        let ctx = RenderContext::new(&state, converter());
        let mut list = DisplayList::new();
        draw_grab_area(&mut list, &ctx);
        let (rect, _) = list.rects().next().unwrap();
        assert_eq!(rect.area(), 0.0);
    }

    #[test]
    fn test_corner_hint_drawn_over_edges() {
        let state = ctx_state(690, 70);
        let zones = Zones {
            right: true,
            bottom: true,
            ..Zones::NONE
        };
        let ctx = RenderContext::new(&state, converter()).with_highlight_zones(zones);
        let mut list = DisplayList::new();
        draw_hover_hints(&mut list, &ctx);

        let rects: Vec<_> = list.rects().collect();
        assert_eq!(rects.len(), 3);
        assert_eq!(*rects[2].0, Rect::new(669.0, 49.0, 690.0, 70.0));
        assert_eq!(*rects[2].1, gray(255, 95));
    }

    #[test]
    fn test_no_hints_without_zones() {
        let state = ctx_state(690, 70);
        let ctx = RenderContext::new(&state, converter());
        let mut list = DisplayList::new();
        draw_hover_hints(&mut list, &ctx);
        assert!(list.commands.is_empty());
    }

    #[test]
    fn test_aligned_edges_only_while_moving() {
        let state = ctx_state(690, 70);
        let edges = Zones {
            left: true,
            top: true,
            ..Zones::NONE
        };
        let mut list = DisplayList::new();

        let idle = RenderContext::new(&state, converter()).with_aligned_edges(edges, false);
        draw_aligned_edges(&mut list, &idle);
        assert!(list.commands.is_empty());

        let moving = RenderContext::new(&state, converter()).with_aligned_edges(edges, true);
        draw_aligned_edges(&mut list, &moving);
        let lines: Vec<_> = list.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|(_, _, width)| *width == 2.0));
        assert_eq!(*lines[0].0, Line::new((0.0, 0.0), (689.0, 0.0)));
    }
}
