//! Snapping to screen edges and to fixed increments.

use crate::geometry::{Geometry, MIN_WINDOW_SIZE};
use crate::hit_test::Zones;

/// Distance (in pixels) within which an edge snaps to the screen border.
pub const SCREEN_EDGE_SNAP_DISTANCE: i32 = 12;

/// Round `value` to the nearest multiple of `increment`.
///
/// Non-positive increments leave the value (rounded) untouched.
pub fn snap_to_increment(value: f64, increment: f64) -> i32 {
    if !(increment > 0.0) {
        return value.round() as i32;
    }
    (increment * (value / increment).round()).round() as i32
}

/// Snap `value` so its offset from `origin` is a multiple of `increment`.
pub fn snap_from_origin(value: i32, origin: i32, increment: f64) -> i32 {
    origin + snap_to_increment((value - origin) as f64, increment)
}

/// Result of snapping a window position to screen edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSnap {
    pub x: i32,
    pub y: i32,
    /// Whether the X coordinate was snapped.
    pub snapped_x: bool,
    /// Whether the Y coordinate was snapped.
    pub snapped_y: bool,
}

impl EdgeSnap {
    /// A result with no snapping.
    pub fn none(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            snapped_x: false,
            snapped_y: false,
        }
    }

    pub fn is_snapped(&self) -> bool {
        self.snapped_x || self.snapped_y
    }
}

/// Pick the nearer of aligning the near edge or the far edge; ties favor
/// the near edge. Returns `(distance, snapped_position)`.
fn nearest_alignment(pos: i32, size: i32, near_edge: i32, far_edge: i32) -> (i32, i32) {
    let near = ((pos - near_edge).abs(), near_edge);
    let far = ((pos + size - far_edge).abs(), far_edge - size);
    if near.0 <= far.0 { near } else { far }
}

/// Snap a moving window's position to the edges of `screen`.
///
/// Each axis is snapped independently, and only if the nearer edge is within
/// `distance` pixels. An empty screen rectangle disables snapping.
pub fn snap_position_to_edges(geometry: Geometry, screen: Geometry, distance: i32) -> EdgeSnap {
    if screen.is_empty() {
        return EdgeSnap::none(geometry.x, geometry.y);
    }

    let (dist_x, snapped_x) = nearest_alignment(geometry.x, geometry.width, screen.x, screen.right());
    let (dist_y, snapped_y) = nearest_alignment(geometry.y, geometry.height, screen.y, screen.bottom());

    let mut result = EdgeSnap::none(geometry.x, geometry.y);
    if dist_x <= distance {
        result.x = snapped_x;
        result.snapped_x = true;
    }
    if dist_y <= distance {
        result.y = snapped_y;
        result.snapped_y = true;
    }
    result
}

/// Snap only the edges being dragged in a resize to the edges of `screen`.
///
/// Snapping the left or top edge moves the position and adjusts the size so
/// the opposite edge stays where it was. Sizes never drop below
/// [`MIN_WINDOW_SIZE`].
pub fn snap_resize_to_edges(
    geometry: Geometry,
    dragged: Zones,
    screen: Geometry,
    distance: i32,
) -> Geometry {
    if screen.is_empty() {
        return geometry;
    }

    let Geometry {
        mut x,
        mut y,
        mut width,
        mut height,
    } = geometry;
    let right_side = x + width;
    let bottom_side = y + height;

    if dragged.left && (x - screen.x).abs() <= distance {
        x = screen.x;
        width = (right_side - x).max(MIN_WINDOW_SIZE);
    }
    if dragged.right && (x + width - screen.right()).abs() <= distance {
        width = (screen.right() - x).max(MIN_WINDOW_SIZE);
    }

    if dragged.top && (y - screen.y).abs() <= distance {
        y = screen.y;
        height = (bottom_side - y).max(MIN_WINDOW_SIZE);
    }
    if dragged.bottom && (y + height - screen.bottom()).abs() <= distance {
        height = (screen.bottom() - y).max(MIN_WINDOW_SIZE);
    }

    Geometry::new(x, y, width, height)
}

/// Which window edges lie exactly on the edges of `screen`.
pub fn aligned_edges(geometry: Geometry, screen: Geometry) -> Zones {
    if screen.is_empty() {
        return Zones::NONE;
    }
    Zones {
        left: geometry.x == screen.x,
        right: geometry.right() == screen.right(),
        top: geometry.y == screen.y,
        bottom: geometry.bottom() == screen.bottom(),
    }
}
