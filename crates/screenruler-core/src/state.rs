//! Long-lived ruler state: geometry, display toggles and aspect lock.

use kurbo::{Point, Rect};

use crate::geometry::{Geometry, PixelPoint};
use crate::units::Unit;

/// Aspect-ratio lock applied while resizing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectLock {
    pub enabled: bool,
    /// Reference shape resizes are constrained toward.
    pub target_width: i32,
    pub target_height: i32,
    /// `target_width / target_height`, always positive.
    pub ratio: f64,
}

impl AspectLock {
    pub fn new(width: i32, height: i32) -> Self {
        let mut lock = Self {
            enabled: false,
            target_width: 1,
            target_height: 1,
            ratio: 1.0,
        };
        lock.set_target(width, height);
        lock
    }

    /// Make `width` x `height` the reference shape and recompute the ratio.
    pub fn set_target(&mut self, width: i32, height: i32) {
        self.target_width = width.abs().max(1);
        self.target_height = height.abs().max(1);
        self.ratio = self.target_width as f64 / self.target_height as f64;
    }

    /// Target ratio reduced to lowest integer terms.
    pub fn simplified(&self) -> (i64, i64) {
        simplify_ratio(self.target_width as i64, self.target_height as i64)
    }
}

/// Reduce `width:height` to lowest terms. Non-positive inputs count as 1.
pub fn simplify_ratio(width: i64, height: i64) -> (i64, i64) {
    let width = width.max(1);
    let height = height.max(1);
    let divisor = gcd(width, height);
    (width / divisor, height / divisor)
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.abs()
}

/// Where the size readout was last painted, for click hit-testing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReadoutHit {
    /// Bounding box of the readout text in widget-local coordinates.
    pub rect: Rect,
    /// Whether clicking the readout opens the geometry dialog. Only the
    /// full centered readout is clickable.
    pub click_enabled: bool,
}

impl ReadoutHit {
    pub fn contains(&self, local: PixelPoint) -> bool {
        self.rect.contains(Point::new(local.x as f64, local.y as f64))
    }

    /// Whether a click at `local` may target the readout.
    pub fn accepts(&self, local: PixelPoint) -> bool {
        self.click_enabled && self.contains(local)
    }
}

/// State owned by one ruler widget for its whole lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct RulerState {
    pub geometry: Geometry,
    pub unit: Unit,
    pub transparent: bool,
    pub invert_colors: bool,
    pub click_through: bool,
    /// Extend ticks across the whole window.
    pub grid_enabled: bool,
    pub aspect_lock: AspectLock,
    /// Refreshed on every paint.
    pub readout: ReadoutHit,
}

impl RulerState {
    pub fn new(geometry: Geometry) -> Self {
        let geometry = geometry.clamped();
        Self {
            geometry,
            unit: Unit::default(),
            transparent: false,
            invert_colors: false,
            click_through: false,
            grid_enabled: false,
            aspect_lock: AspectLock::new(geometry.width, geometry.height),
            readout: ReadoutHit::default(),
        }
    }

    /// Toggle transparency. Colors are inverted as well to keep ticks
    /// readable against whatever is behind the window.
    pub fn toggle_transparency(&mut self) {
        self.transparent = !self.transparent;
        self.toggle_invert();
    }

    pub fn toggle_invert(&mut self) {
        self.invert_colors = !self.invert_colors;
    }

    pub fn toggle_grid(&mut self) {
        self.grid_enabled = !self.grid_enabled;
    }

    /// Toggle the aspect lock, capturing the current size as the reference.
    pub fn toggle_aspect_lock(&mut self) {
        self.aspect_lock.enabled = !self.aspect_lock.enabled;
        if self.aspect_lock.enabled {
            self.aspect_lock
                .set_target(self.geometry.width, self.geometry.height);
        }
    }

    pub fn cycle_unit(&mut self) {
        self.unit = self.unit.next();
    }

    /// Replace the geometry, keeping the aspect-lock reference in sync.
    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.geometry = geometry.clamped();
        if self.aspect_lock.enabled {
            self.aspect_lock
                .set_target(self.geometry.width, self.geometry.height);
        }
    }

    /// Apply geometry produced by a drag. The aspect-lock reference is left
    /// alone so the locked ratio holds for the whole drag.
    pub fn update_geometry(&mut self, geometry: Geometry) {
        self.geometry = geometry.clamped();
    }

    /// Swap width and height.
    pub fn flip(&mut self) {
        let Geometry { width, height, .. } = self.geometry;
        self.set_geometry(self.geometry.with_size(height, width));
    }

    /// Secondary status lines shown under the full readout.
    pub fn status_messages(&self) -> Vec<String> {
        let mut messages = Vec::new();
        if self.aspect_lock.enabled {
            let (w, h) = self.aspect_lock.simplified();
            messages.push(format!("Aspect Ratio Locked [{w}:{h}]"));
        }
        if self.click_through {
            messages.push("Clickthrough Mode Enabled".to_string());
        }
        messages
    }
}
