//! Screen Ruler Core Library
//!
//! Platform-agnostic geometry, unit conversion, snapping and pointer
//! interaction logic for the screen ruler overlay.

pub mod config;
pub mod geometry;
pub mod input;
pub mod interaction;
pub mod screen;
pub mod snap;
pub mod state;
pub mod units;

pub use config::{ConfigError, ConfigResult, RulerConfig};
pub use geometry::{Geometry, MIN_WINDOW_SIZE, PixelPoint};
pub use hit_test::{CursorShape, DragHandle, HANDLE_THICKNESS, Zones, cursor_for, hit_zones};
pub use input::{Key, KeyChord, Modifiers, MouseButton, PointerEvent};
pub use interaction::{DragSolver, Interaction, InteractionContext, Mode, PointerSession, Response};
pub use screen::{ScreenInfo, ScreenMetrics, ScreenProvider, StaticScreens};
pub use snap::{EdgeSnap, SCREEN_EDGE_SNAP_DISTANCE, aligned_edges, snap_position_to_edges, snap_resize_to_edges, snap_to_increment};
pub use state::{AspectLock, ReadoutHit, RulerState};
pub use units::{Axis, TickConfig, Unit, UnitConverter, format_value};
