//! Drawing surface abstraction and per-frame render context.

use kurbo::{Line, Rect};
use peniko::Color;
use screenruler_core::geometry::PixelPoint;
use screenruler_core::hit_test::Zones;
use screenruler_core::state::RulerState;
use screenruler_core::units::UnitConverter;

/// Horizontal text alignment inside a layout rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical text alignment inside a layout rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Text alignment flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Align {
    pub h: HAlign,
    pub v: VAlign,
}

impl Align {
    pub const LEFT: Align = Align::new(HAlign::Left, VAlign::Top);
    pub const RIGHT: Align = Align::new(HAlign::Right, VAlign::Top);
    pub const H_CENTER: Align = Align::new(HAlign::Center, VAlign::Top);
    pub const CENTER: Align = Align::new(HAlign::Center, VAlign::Center);
    pub const RIGHT_V_CENTER: Align = Align::new(HAlign::Right, VAlign::Center);

    pub const fn new(h: HAlign, v: VAlign) -> Self {
        Self { h, v }
    }
}

/// How a run of text is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    /// Font size relative to the surface's base font.
    pub scale: f64,
    pub underline: bool,
}

impl TextStyle {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            scale: 1.0,
            underline: false,
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }
}

/// Single-line font measurements.
pub trait TextMetrics {
    /// Horizontal advance of `text` at `scale`.
    fn advance(&self, text: &str, scale: f64) -> f64;

    /// Height of one line at `scale`.
    fn line_height(&self, scale: f64) -> f64;

    /// Box the text occupies when laid out in `rect` with `align`.
    fn bounding_rect(&self, rect: Rect, align: Align, text: &str, scale: f64) -> Rect {
        let width = self.advance(text, scale);
        let height = self.line_height(scale);
        let x = match align.h {
            HAlign::Left => rect.x0,
            HAlign::Center => rect.x0 + (rect.width() - width) / 2.0,
            HAlign::Right => rect.x1 - width,
        };
        let y = match align.v {
            VAlign::Top => rect.y0,
            VAlign::Center => rect.y0 + (rect.height() - height) / 2.0,
            VAlign::Bottom => rect.y1 - height,
        };
        Rect::new(x, y, x + width, y + height)
    }
}

/// Immediate-mode 2D drawing target in widget-local coordinates.
///
/// Implemented by the windowing shell; [`crate::DisplayList`] records calls
/// for headless use.
pub trait Surface: TextMetrics {
    /// Fill a rounded rectangle, optionally outlined with a 1px stroke.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, fill: Color, stroke: Option<Color>);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn line(&mut self, line: Line, color: Color, width: f64);

    fn text(&mut self, rect: Rect, align: Align, text: &str, style: &TextStyle);
}

/// Grey at `value` with the given alpha.
pub fn gray(value: u8, alpha: u8) -> Color {
    Color::from_rgba8(value, value, value, alpha)
}

/// The three grey levels everything is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Grab area and hover hints.
    pub highlight: u8,
    /// Background panel.
    pub panel: u8,
    /// Ticks, labels and outline.
    pub ink: u8,
}

impl Palette {
    pub fn new(invert: bool) -> Self {
        if invert {
            Self {
                highlight: 0,
                panel: 155,
                ink: 255,
            }
        } else {
            Self {
                highlight: 255,
                panel: 100,
                ink: 0,
            }
        }
    }
}

/// Context for a single paint.
pub struct RenderContext<'a> {
    pub state: &'a RulerState,
    /// Converter for the screen under the widget.
    pub converter: UnitConverter,
    /// Zones to highlight (active zones while interacting, else hover zones).
    pub highlight_zones: Zones,
    /// Widget edges flush with the screen edges.
    pub aligned_edges: Zones,
    /// The window is being moved or resized.
    pub moving: bool,
    pub readout_hovered: bool,
    /// Widget-local pointer position in pick mode.
    pub pick_position: Option<PixelPoint>,
}

impl<'a> RenderContext<'a> {
    pub fn new(state: &'a RulerState, converter: UnitConverter) -> Self {
        Self {
            state,
            converter,
            highlight_zones: Zones::NONE,
            aligned_edges: Zones::NONE,
            moving: false,
            readout_hovered: false,
            pick_position: None,
        }
    }

    pub fn with_highlight_zones(mut self, zones: Zones) -> Self {
        self.highlight_zones = zones;
        self
    }

    /// Set the screen-edge alignment and whether a move/resize is in progress.
    pub fn with_aligned_edges(mut self, edges: Zones, moving: bool) -> Self {
        self.aligned_edges = edges;
        self.moving = moving;
        self
    }

    pub fn with_readout_hovered(mut self, hovered: bool) -> Self {
        self.readout_hovered = hovered;
        self
    }

    pub fn with_pick_position(mut self, position: Option<PixelPoint>) -> Self {
        self.pick_position = position;
        self
    }

    pub fn width(&self) -> i32 {
        self.state.geometry.width
    }

    pub fn height(&self) -> i32 {
        self.state.geometry.height
    }

    pub fn palette(&self) -> Palette {
        Palette::new(self.state.invert_colors)
    }
}
