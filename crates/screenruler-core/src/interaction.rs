//! Pointer interaction state machine: move, resize and pick measurement.
//!
//! Every drag is computed from the geometry captured at press time plus the
//! pointer's global displacement, so repeated motion events never accumulate
//! rounding errors. The pipeline for a left-button drag is:
//!
//! 1. raw move/resize for the grabbed [`DragHandle`]
//! 2. aspect lock (if enabled and resizing)
//! 3. screen-edge snap (unless disabled by the modifier)
//! 4. grid snap relative to the press origin (if the modifier is held)

use crate::config::RulerConfig;
use crate::geometry::{Geometry, MIN_WINDOW_SIZE, PixelPoint};
use crate::hit_test::{CursorShape, DragHandle, Zones, cursor_for, hit_zones};
use crate::input::{Modifiers, MouseButton};
use crate::screen::ScreenProvider;
use crate::snap::{snap_from_origin, snap_position_to_edges, snap_resize_to_edges, snap_to_increment};
use crate::state::RulerState;
use crate::units::{Axis, UnitConverter};

/// What the pointer is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    /// Middle-button drag: pan the window.
    Panning,
    /// Left-button drag on a handle (or the body, which moves the window).
    Dragging(DragHandle),
    /// Right-button pick mode.
    Measuring,
}

/// State that lives from a button press until its release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSession {
    pub button: MouseButton,
    pub mode: Mode,
    /// Global pointer position at press.
    pub press_position: PixelPoint,
    /// Window geometry at press.
    pub origin: Geometry,
    /// Pointer moved at least the drag threshold since the press.
    pub dragged: bool,
    /// The press landed on the clickable size readout.
    pub started_on_readout: bool,
}

impl PointerSession {
    fn delta(&self, position: PixelPoint) -> PixelPoint {
        position.offset_from(self.press_position)
    }
}

/// Read-only inputs an interaction step needs.
pub struct InteractionContext<'a> {
    pub state: &'a RulerState,
    pub screens: &'a dyn ScreenProvider,
    pub config: &'a RulerConfig,
}

impl<'a> InteractionContext<'a> {
    pub fn new(state: &'a RulerState, screens: &'a dyn ScreenProvider, config: &'a RulerConfig) -> Self {
        Self {
            state,
            screens,
            config,
        }
    }

    fn converter(&self) -> UnitConverter {
        let metrics = self
            .screens
            .screen_for(self.state.geometry)
            .map(|screen| screen.metrics);
        UnitConverter::new(self.state.unit, metrics)
    }
}

/// What the widget should do after an interaction step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Response {
    /// New window geometry to apply.
    pub geometry: Option<Geometry>,
    /// New cursor shape to show.
    pub cursor: Option<CursorShape>,
    pub repaint: bool,
    /// A click on the readout completed; open the exact-geometry dialog.
    pub open_geometry_dialog: bool,
}

impl Response {
    fn merge(mut self, other: Response) -> Self {
        self.geometry = other.geometry.or(self.geometry);
        self.cursor = other.cursor.or(self.cursor);
        self.repaint |= other.repaint;
        self.open_geometry_dialog |= other.open_geometry_dialog;
        self
    }
}

/// Raw geometry for dragging `handle` by `delta` from `origin`.
///
/// Left and top drags keep the opposite edge anchored; sizes never drop
/// below [`MIN_WINDOW_SIZE`].
pub fn drag_geometry(origin: Geometry, handle: DragHandle, delta: PixelPoint) -> Geometry {
    if handle == DragHandle::Body {
        return origin.with_position(origin.x + delta.x, origin.y + delta.y);
    }

    let edges = handle.zones();
    let width = if edges.left {
        origin.width - delta.x
    } else if edges.right {
        origin.width + delta.x
    } else {
        origin.width
    }
    .max(MIN_WINDOW_SIZE);
    let height = if edges.top {
        origin.height - delta.y
    } else if edges.bottom {
        origin.height + delta.y
    } else {
        origin.height
    }
    .max(MIN_WINDOW_SIZE);

    let x = if edges.left { origin.right() - width } else { origin.x };
    let y = if edges.top { origin.bottom() - height } else { origin.y };
    Geometry::new(x, y, width, height)
}

fn round_px(value: f64) -> i32 {
    value.round() as i32
}

/// Constrain a resize to `ratio` (width / height).
///
/// The axis that changed most from `origin` drives the other one. Edges
/// that were dragged move; their opposite edges stay put; an axis with no
/// dragged edge stays centered on its original center.
pub fn apply_aspect_lock(origin: Geometry, proposed: Geometry, dragged: Zones, ratio: f64) -> Geometry {
    let ratio = if ratio > 0.0 { ratio } else { 1.0 };
    let delta_x = (proposed.width - origin.width).abs();
    let delta_y = (proposed.height - origin.height).abs();

    let (width, height) = if delta_x >= delta_y {
        let width = proposed.width.max(MIN_WINDOW_SIZE);
        let height = round_px(width as f64 / ratio).max(MIN_WINDOW_SIZE);
        (round_px(height as f64 * ratio).max(MIN_WINDOW_SIZE), height)
    } else {
        let height = proposed.height.max(MIN_WINDOW_SIZE);
        let width = round_px(height as f64 * ratio).max(MIN_WINDOW_SIZE);
        (width, round_px(width as f64 / ratio).max(MIN_WINDOW_SIZE))
    };

    let x = match (dragged.left, dragged.right) {
        (true, false) => origin.right() - width,
        (false, true) => origin.x,
        (false, false) => origin.x + round_px((origin.width - width) as f64 / 2.0),
        (true, true) => proposed.x,
    };
    let y = match (dragged.top, dragged.bottom) {
        (true, false) => origin.bottom() - height,
        (false, true) => origin.y,
        (false, false) => origin.y + round_px((origin.height - height) as f64 / 2.0),
        (true, true) => proposed.y,
    };
    Geometry::new(x, y, width, height)
}

/// Snap only the resized dimensions to the grid, then re-anchor the edges
/// opposite the dragged ones.
pub fn grid_snap_resize(origin: Geometry, geometry: Geometry, dragged: Zones, increment_x: f64, increment_y: f64) -> Geometry {
    let mut width = geometry.width;
    let mut height = geometry.height;
    match (dragged.horizontal(), dragged.vertical()) {
        (true, false) => width = snap_to_increment(width as f64, increment_x),
        (false, true) => height = snap_to_increment(height as f64, increment_y),
        _ => {
            width = snap_to_increment(width as f64, increment_x);
            height = snap_to_increment(height as f64, increment_y);
        }
    }
    let width = width.max(MIN_WINDOW_SIZE);
    let height = height.max(MIN_WINDOW_SIZE);

    let x = match (dragged.left, dragged.right) {
        (true, false) => origin.right() - width,
        (false, true) => origin.x,
        _ => geometry.x,
    };
    let y = match (dragged.top, dragged.bottom) {
        (true, false) => origin.bottom() - height,
        (false, true) => origin.y,
        _ => geometry.y,
    };
    Geometry::new(x, y, width, height)
}

/// Full move/resize pipeline for one motion event.
pub struct DragSolver<'a> {
    pub screens: &'a dyn ScreenProvider,
    pub snap_distance: i32,
    /// Locked width/height ratio, if the aspect lock is on.
    pub aspect_ratio: Option<f64>,
    pub edge_snap: bool,
    /// Grid increments per axis, if grid snapping is requested.
    pub grid: Option<(f64, f64)>,
}

impl DragSolver<'_> {
    fn screen_rect(&self, candidate: Geometry) -> Geometry {
        self.screens
            .screen_for(candidate)
            .map(|screen| screen.available)
            .unwrap_or_default()
    }

    /// Geometry for moving the whole window by `delta`.
    pub fn solve_move(&self, origin: Geometry, delta: PixelPoint) -> Geometry {
        let mut geometry = origin.with_position(origin.x + delta.x, origin.y + delta.y);
        if self.edge_snap {
            let snap = snap_position_to_edges(geometry, self.screen_rect(geometry), self.snap_distance);
            geometry = geometry.with_position(snap.x, snap.y);
        }
        if let Some((inc_x, inc_y)) = self.grid {
            geometry = geometry.with_position(
                snap_from_origin(geometry.x, origin.x, inc_x),
                snap_from_origin(geometry.y, origin.y, inc_y),
            );
        }
        geometry
    }

    /// Geometry for dragging `handle` by `delta`.
    pub fn solve(&self, origin: Geometry, handle: DragHandle, delta: PixelPoint) -> Geometry {
        if !handle.is_resize() {
            return self.solve_move(origin, delta);
        }

        let dragged = handle.zones();
        let mut geometry = drag_geometry(origin, handle, delta);
        if let Some(ratio) = self.aspect_ratio {
            geometry = apply_aspect_lock(origin, geometry, dragged, ratio);
        }
        if self.edge_snap {
            geometry = snap_resize_to_edges(geometry, dragged, self.screen_rect(geometry), self.snap_distance);
        }
        if let Some((inc_x, inc_y)) = self.grid {
            geometry = grid_snap_resize(origin, geometry, dragged, inc_x, inc_y);
        }
        geometry
    }
}

/// Hover and drag state of the widget.
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    session: Option<PointerSession>,
    /// Zones under the pointer while no button is held.
    pub hover_zones: Zones,
    /// Zones captured at press, frozen for the rest of the drag.
    pub active_zones: Zones,
    pub readout_hovered: bool,
    /// Widget-local pointer position while in pick mode.
    pub pick_position: Option<PixelPoint>,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&PointerSession> {
        self.session.as_ref()
    }

    pub fn mode(&self) -> Mode {
        self.session.map_or(Mode::Idle, |session| session.mode)
    }

    /// A button is held.
    pub fn is_interacting(&self) -> bool {
        self.session.is_some()
    }

    /// The window is being moved or resized.
    pub fn is_moving_or_resizing(&self) -> bool {
        matches!(self.mode(), Mode::Panning | Mode::Dragging(_))
    }

    /// Zones to highlight: frozen ones during a drag, hovered ones otherwise.
    pub fn highlight_zones(&self) -> Zones {
        if self.is_interacting() {
            self.active_zones
        } else {
            self.hover_zones
        }
    }

    /// Refresh hover zones, readout hover and cursor for a pointer at `local`.
    fn update_hover(&mut self, ctx: &InteractionContext, local: PixelPoint) -> Response {
        let geometry = ctx.state.geometry;
        let mut response = Response::default();

        let zones = hit_zones(local, geometry.width, geometry.height);
        if zones != self.hover_zones {
            self.hover_zones = zones;
            response.repaint = true;
        }

        match self.mode() {
            Mode::Panning => {
                response.cursor = Some(CursorShape::ClosedHand);
                return response;
            }
            Mode::Dragging(_) => return response,
            Mode::Idle | Mode::Measuring => {}
        }

        let over_readout = ctx.state.readout.accepts(local) && !ctx.state.transparent;
        if over_readout != self.readout_hovered {
            self.readout_hovered = over_readout;
            response.repaint = true;
        }

        response.cursor = Some(if over_readout {
            CursorShape::PointingHand
        } else {
            cursor_for(zones)
        });
        response
    }

    /// A button went down at global `position`.
    pub fn press(&mut self, ctx: &InteractionContext, button: MouseButton, position: PixelPoint) -> Response {
        let geometry = ctx.state.geometry;
        let local = geometry.to_local(position);
        let mut response = Response {
            repaint: true,
            ..Default::default()
        };

        let mode = match button {
            MouseButton::Middle => {
                self.active_zones = Zones::NONE;
                self.pick_position = None;
                response.cursor = Some(CursorShape::ClosedHand);
                Mode::Panning
            }
            MouseButton::Left => {
                let zones = hit_zones(local, geometry.width, geometry.height);
                self.active_zones = zones;
                self.pick_position = None;
                response.cursor = Some(if zones.any() {
                    cursor_for(zones)
                } else {
                    CursorShape::ClosedHand
                });
                Mode::Dragging(DragHandle::at(local, geometry.width, geometry.height))
            }
            MouseButton::Right => {
                self.active_zones = Zones::NONE;
                self.pick_position = Some(local);
                Mode::Measuring
            }
        };

        let started_on_readout =
            button == MouseButton::Left && ctx.state.readout.accepts(local) && !ctx.state.transparent;

        log::trace!("pointer press {button:?} at {position:?} -> {mode:?}");
        self.session = Some(PointerSession {
            button,
            mode,
            press_position: position,
            origin: geometry,
            dragged: false,
            started_on_readout,
        });
        response
    }

    /// The pointer moved to global `position`.
    pub fn motion(&mut self, ctx: &InteractionContext, position: PixelPoint, modifiers: Modifiers) -> Response {
        let local = ctx.state.geometry.to_local(position);
        let hover = self.update_hover(ctx, local);

        let Some(session) = self.session.as_mut() else {
            return hover;
        };
        let delta = session.delta(position);

        let response = match session.mode {
            Mode::Idle => Response::default(),
            Mode::Measuring => {
                self.pick_position = Some(local);
                Response {
                    repaint: true,
                    ..Default::default()
                }
            }
            Mode::Panning | Mode::Dragging(_) => {
                if delta.manhattan_length() >= ctx.config.drag_threshold {
                    session.dragged = true;
                }
                let session = *session;
                let geometry = self.solve(ctx, &session, delta, modifiers);
                Response {
                    geometry: Some(geometry),
                    repaint: true,
                    ..Default::default()
                }
            }
        };
        hover.merge(response)
    }

    fn solve(&self, ctx: &InteractionContext, session: &PointerSession, delta: PixelPoint, modifiers: Modifiers) -> Geometry {
        let grid = modifiers.grid_snap().then(|| {
            let converter = ctx.converter();
            (converter.snap_increment(Axis::X), converter.snap_increment(Axis::Y))
        });
        let lock = ctx.state.aspect_lock;
        let solver = DragSolver {
            screens: ctx.screens,
            snap_distance: ctx.config.snap_distance,
            aspect_ratio: lock.enabled.then_some(lock.ratio),
            edge_snap: modifiers.edge_snap(),
            grid,
        };
        match session.mode {
            Mode::Dragging(handle) => solver.solve(session.origin, handle, delta),
            _ => solver.solve_move(session.origin, delta),
        }
    }

    /// A button was released at global `position`. The current geometry is
    /// kept as the new baseline.
    pub fn release(&mut self, ctx: &InteractionContext, button: MouseButton, position: PixelPoint) -> Response {
        let local = ctx.state.geometry.to_local(position);
        let open_geometry_dialog = self.session.is_some_and(|session| {
            button == MouseButton::Left
                && session.button == MouseButton::Left
                && session.started_on_readout
                && !session.dragged
                && !ctx.state.transparent
                && ctx.state.readout.accepts(local)
        });

        self.session = None;
        self.active_zones = Zones::NONE;
        self.pick_position = None;

        let hover = self.update_hover(ctx, local);
        Response {
            repaint: true,
            open_geometry_dialog,
            ..Default::default()
        }
        .merge(hover)
    }

    /// The pointer left the widget.
    pub fn leave(&mut self) -> Response {
        self.hover_zones = Zones::NONE;
        self.active_zones = Zones::NONE;
        self.readout_hovered = false;
        Response {
            cursor: Some(CursorShape::Arrow),
            repaint: true,
            ..Default::default()
        }
    }
}
