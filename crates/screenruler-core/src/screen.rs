//! Screen queries consumed from the windowing system.

use crate::geometry::{Geometry, PixelPoint};

/// Density information for one screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMetrics {
    pub physical_dpi_x: f64,
    pub physical_dpi_y: f64,
    pub logical_dpi_x: f64,
    pub logical_dpi_y: f64,
    /// Device pixels per logical pixel.
    pub scale_factor: f64,
}

impl ScreenMetrics {
    /// Metrics for a plain 96 DPI screen without scaling.
    pub const fn standard() -> Self {
        Self::uniform(96.0, 1.0)
    }

    pub const fn uniform(dpi: f64, scale_factor: f64) -> Self {
        Self {
            physical_dpi_x: dpi,
            physical_dpi_y: dpi,
            logical_dpi_x: dpi,
            logical_dpi_y: dpi,
            scale_factor,
        }
    }
}

impl Default for ScreenMetrics {
    fn default() -> Self {
        Self::standard()
    }
}

/// A screen as reported by the windowing system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenInfo {
    /// Full screen rectangle in global coordinates.
    pub geometry: Geometry,
    /// Screen rectangle minus panels/docks, used for snapping and centering.
    pub available: Geometry,
    pub metrics: ScreenMetrics,
}

impl ScreenInfo {
    pub fn new(geometry: Geometry, metrics: ScreenMetrics) -> Self {
        Self {
            geometry,
            available: geometry,
            metrics,
        }
    }

    pub fn with_available(mut self, available: Geometry) -> Self {
        self.available = available;
        self
    }
}

/// Source of screen information.
///
/// Implemented by the embedding shell; tests use [`StaticScreens`].
pub trait ScreenProvider {
    /// The screen containing `point`, if any.
    fn screen_at(&self, point: PixelPoint) -> Option<ScreenInfo>;

    /// The primary screen, if the system reports one.
    fn primary_screen(&self) -> Option<ScreenInfo>;

    /// The screen under the center of `rect`, falling back to the primary screen.
    fn screen_for(&self, rect: Geometry) -> Option<ScreenInfo> {
        self.screen_at(rect.center())
            .or_else(|| self.primary_screen())
    }
}

/// A fixed list of screens. The first one is the primary screen.
#[derive(Debug, Clone, Default)]
pub struct StaticScreens {
    screens: Vec<ScreenInfo>,
}

impl StaticScreens {
    pub fn new(screens: Vec<ScreenInfo>) -> Self {
        Self { screens }
    }

    /// A single screen of the given size at the origin.
    pub fn single(width: i32, height: i32, metrics: ScreenMetrics) -> Self {
        Self::new(vec![ScreenInfo::new(
            Geometry::new(0, 0, width, height),
            metrics,
        )])
    }

    /// No screens at all; every screen-dependent operation degrades.
    pub fn none() -> Self {
        Self::default()
    }
}

impl ScreenProvider for StaticScreens {
    fn screen_at(&self, point: PixelPoint) -> Option<ScreenInfo> {
        self.screens
            .iter()
            .find(|screen| screen.geometry.contains(point))
            .copied()
    }

    fn primary_screen(&self) -> Option<ScreenInfo> {
        self.screens.first().copied()
    }
}
