//! Recording surface for headless painting and tests.

use kurbo::{Line, Rect};
use peniko::Color;

use crate::renderer::{Align, Surface, TextMetrics, TextStyle};

/// Monospace metrics: every character has the same advance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMetrics {
    pub char_width: f64,
    pub line_height: f64,
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self {
            char_width: 7.0,
            line_height: 15.0,
        }
    }
}

impl TextMetrics for FixedMetrics {
    fn advance(&self, text: &str, scale: f64) -> f64 {
        text.chars().count() as f64 * self.char_width * scale
    }

    fn line_height(&self, scale: f64) -> f64 {
        self.line_height * scale
    }
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    RoundedRect {
        rect: Rect,
        radius: f64,
        fill: Color,
        stroke: Option<Color>,
    },
    Rect {
        rect: Rect,
        color: Color,
    },
    Line {
        line: Line,
        color: Color,
        width: f64,
    },
    Text {
        rect: Rect,
        align: Align,
        text: String,
        style: TextStyle,
    },
}

/// A surface that records draw calls in order.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    pub commands: Vec<DrawCommand>,
    metrics: FixedMetrics,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metrics(metrics: FixedMetrics) -> Self {
        Self {
            commands: Vec::new(),
            metrics,
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Recorded text runs, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = (&Rect, &str, &TextStyle)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { rect, text, style, .. } => Some((rect, text.as_str(), style)),
            _ => None,
        })
    }

    /// Recorded lines, in draw order.
    pub fn lines(&self) -> impl Iterator<Item = (&Line, &Color, f64)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Line { line, color, width } => Some((line, color, *width)),
            _ => None,
        })
    }

    /// Recorded plain rectangles, in draw order.
    pub fn rects(&self) -> impl Iterator<Item = (&Rect, &Color)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Rect { rect, color } => Some((rect, color)),
            _ => None,
        })
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().any(|(_, text, _)| text == needle)
    }
}

impl TextMetrics for DisplayList {
    fn advance(&self, text: &str, scale: f64) -> f64 {
        self.metrics.advance(text, scale)
    }

    fn line_height(&self, scale: f64) -> f64 {
        self.metrics.line_height(scale)
    }
}

impl Surface for DisplayList {
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, fill: Color, stroke: Option<Color>) {
        self.commands.push(DrawCommand::RoundedRect {
            rect,
            radius,
            fill,
            stroke,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn line(&mut self, line: Line, color: Color, width: f64) {
        self.commands.push(DrawCommand::Line { line, color, width });
    }

    fn text(&mut self, rect: Rect, align: Align, text: &str, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            rect,
            align,
            text: text.to_string(),
            style: *style,
        });
    }
}
