//! Integer pixel geometry for the ruler window.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Smallest width or height the ruler window may take.
pub const MIN_WINDOW_SIZE: i32 = 10;

/// A point in integer pixel coordinates (global or widget-local).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Truncate a floating point position the way window systems report
    /// integer pointer coordinates.
    pub fn from_point(point: Point) -> Self {
        Self {
            x: point.x as i32,
            y: point.y as i32,
        }
    }

    pub fn to_point(self) -> Point {
        Point::new(self.x as f64, self.y as f64)
    }

    /// Sum of the absolute axis components.
    pub fn manhattan_length(self) -> i32 {
        self.x.abs() + self.y.abs()
    }

    pub fn offset_from(self, origin: PixelPoint) -> PixelPoint {
        PixelPoint::new(self.x - origin.x, self.y - origin.y)
    }
}

/// Position and size of a rectangle in integer pixels.
///
/// Used both for the ruler window itself and for screen rectangles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Geometry {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Geometry with both dimensions floored at [`MIN_WINDOW_SIZE`].
    pub fn clamped(self) -> Self {
        Self {
            width: self.width.max(MIN_WINDOW_SIZE),
            height: self.height.max(MIN_WINDOW_SIZE),
            ..self
        }
    }

    pub fn position(&self) -> PixelPoint {
        PixelPoint::new(self.x, self.y)
    }

    pub fn with_position(self, x: i32, y: i32) -> Self {
        Self { x, y, ..self }
    }

    pub fn with_size(self, width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..self
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center(&self) -> PixelPoint {
        PixelPoint::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn contains(&self, point: PixelPoint) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Move so this rectangle's center lands on the center of `area`.
    pub fn centered_in(self, area: Geometry) -> Self {
        self.with_position(
            area.x + (area.width - self.width) / 2,
            area.y + (area.height - self.height) / 2,
        )
    }

    /// Convert a global point to coordinates relative to this rectangle.
    pub fn to_local(&self, global: PixelPoint) -> PixelPoint {
        global.offset_from(self.position())
    }

    /// Widget-local rectangle covering the whole geometry, for drawing.
    pub fn local_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f64, self.height as f64)
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(
            self.x as f64,
            self.y as f64,
            self.right() as f64,
            self.bottom() as f64,
        )
    }
}
