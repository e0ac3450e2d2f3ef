//! Measurement units, pixel conversion and ruler tick spacing.

use serde::{Deserialize, Serialize};

use crate::screen::ScreenMetrics;

/// Centimeters per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Smallest on-screen spacing for each tick level, in pixels.
pub const MIN_SMALL_STEP_PX: f64 = 3.0;
pub const MIN_MEDIUM_STEP_PX: f64 = 6.0;
pub const MIN_MAJOR_STEP_PX: f64 = 20.0;

/// Unit the ruler displays its measurements in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "px")]
    Pixels,
    #[serde(rename = "cm")]
    Centimeters,
    #[serde(rename = "in")]
    Inches,
}

impl Unit {
    /// Cycle px -> cm -> in -> px.
    pub fn next(self) -> Self {
        match self {
            Unit::Pixels => Unit::Centimeters,
            Unit::Centimeters => Unit::Inches,
            Unit::Inches => Unit::Pixels,
        }
    }

    /// Short suffix shown after values.
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Pixels => "px",
            Unit::Centimeters => "cm",
            Unit::Inches => "in",
        }
    }

    pub fn is_physical(self) -> bool {
        self != Unit::Pixels
    }

    fn inches_per_unit(self) -> f64 {
        match self {
            Unit::Pixels => 1.0,
            Unit::Centimeters => 1.0 / CM_PER_INCH,
            Unit::Inches => 1.0,
        }
    }
}

/// Screen axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// Tick spacing for one axis, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickConfig {
    pub small_step: f64,
    pub medium_step: f64,
    pub major_step: f64,
    /// Label value added per major tick.
    pub major_unit_value: f64,
    /// Whether medium ticks are drawn at their own spacing (physical units)
    /// rather than alternating with small ticks.
    pub distinct_subticks: bool,
}

impl TickConfig {
    /// Fixed spacing used for pixel units and as the fallback.
    pub const PIXELS: TickConfig = TickConfig {
        small_step: 5.0,
        medium_step: 10.0,
        major_step: 50.0,
        major_unit_value: 50.0,
        distinct_subticks: false,
    };
}

/// Converts between pixels and a measurement unit for one screen.
///
/// Built per paint or per pointer event from the screen currently under
/// the widget; `metrics` is `None` when no screen could be resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitConverter {
    pub unit: Unit,
    pub metrics: Option<ScreenMetrics>,
}

impl UnitConverter {
    pub fn new(unit: Unit, metrics: Option<ScreenMetrics>) -> Self {
        Self { unit, metrics }
    }

    /// Logical pixels per inch along `axis`, or `None` if the screen reports
    /// no usable density.
    ///
    /// Physical DPI is preferred, logical DPI is the fallback, and the result
    /// is divided by the device scale factor.
    pub fn pixels_per_inch(&self, axis: Axis) -> Option<f64> {
        let metrics = self.metrics?;
        let (physical, logical) = match axis {
            Axis::X => (metrics.physical_dpi_x, metrics.logical_dpi_x),
            Axis::Y => (metrics.physical_dpi_y, metrics.logical_dpi_y),
        };
        let dpi = if physical > 0.0 { physical } else { logical };
        if !(dpi > 0.0) {
            return None;
        }
        let scale = if metrics.scale_factor > 0.0 {
            metrics.scale_factor
        } else {
            1.0
        };
        Some(dpi / scale)
    }

    /// Pixels per one whole unit along `axis`. Identity when the unit is
    /// pixels or the density is unknown.
    pub fn pixels_per_unit(&self, axis: Axis) -> f64 {
        if !self.unit.is_physical() {
            return 1.0;
        }
        match self.pixels_per_inch(axis) {
            Some(ppi) => ppi * self.unit.inches_per_unit(),
            None => 1.0,
        }
    }

    pub fn pixels_to_unit(&self, pixels: f64, axis: Axis) -> f64 {
        pixels / self.pixels_per_unit(axis)
    }

    pub fn unit_to_pixels(&self, value: f64, axis: Axis) -> f64 {
        value * self.pixels_per_unit(axis)
    }

    /// Tick spacing for `axis` in the current unit.
    pub fn tick_config(&self, axis: Axis) -> TickConfig {
        let (medium_unit, small_unit) = match self.unit {
            Unit::Pixels => return TickConfig::PIXELS,
            Unit::Centimeters => (0.5, 0.1),
            Unit::Inches => (0.25, 0.125),
        };
        if self.pixels_per_inch(axis).is_none() {
            return TickConfig::PIXELS;
        }

        let small_step = self.unit_to_pixels(small_unit, axis);
        let medium_step = self.unit_to_pixels(medium_unit, axis);
        let major_step = self.unit_to_pixels(1.0, axis);
        let usable = |step: f64| step.is_finite() && step > 0.0;
        if !(usable(small_step) && usable(medium_step) && usable(major_step)) {
            return TickConfig::PIXELS;
        }

        TickConfig {
            small_step: small_step.max(MIN_SMALL_STEP_PX),
            medium_step: medium_step.max(MIN_MEDIUM_STEP_PX),
            major_step: major_step.max(MIN_MAJOR_STEP_PX),
            major_unit_value: 1.0,
            distinct_subticks: true,
        }
    }

    /// Grid-snap increment: the medium tick spacing.
    pub fn snap_increment(&self, axis: Axis) -> f64 {
        self.tick_config(axis).medium_step
    }

    /// Label text for a tick value already expressed in the current unit.
    pub fn format_tick_label(&self, value: f64) -> String {
        format_value(value, self.unit)
    }

    /// Convert a pixel length and format it for display.
    pub fn format_measurement(&self, pixels: f64, axis: Axis) -> String {
        format_value(self.pixels_to_unit(pixels, axis), self.unit)
    }
}

/// Integer text for pixels, otherwise two decimals with trailing zeros and
/// a trailing point removed.
pub fn format_value(value: f64, unit: Unit) -> String {
    let text = match unit {
        Unit::Pixels => format!("{}", value.round() as i64),
        _ => {
            let fixed = format!("{value:.2}");
            fixed.trim_end_matches('0').trim_end_matches('.').to_string()
        }
    };
    if text == "-0" { "0".to_string() } else { text }
}

/// Whether `value` lies within `tolerance` of a multiple of `step`.
pub fn is_near_step(value: f64, step: f64, tolerance: f64) -> bool {
    if step <= 0.0 {
        return false;
    }
    let nearest = (value / step).round() * step;
    (value - nearest).abs() <= tolerance
}
