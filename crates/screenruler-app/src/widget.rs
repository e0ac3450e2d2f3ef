//! The ruler widget: owns state and routes input, commands and paint.

use std::path::PathBuf;

use screenruler_core::config::RulerConfig;
use screenruler_core::geometry::{Geometry, PixelPoint};
use screenruler_core::input::{KeyChord, MouseButton, PointerEvent};
use screenruler_core::interaction::{Interaction, InteractionContext, Response};
use screenruler_core::screen::ScreenInfo;
use screenruler_core::snap::aligned_edges;
use screenruler_core::state::RulerState;
use screenruler_core::units::UnitConverter;
use screenruler_render::{PaintOutput, RenderContext, Surface, paint};

use crate::platform::Platform;
use crate::screenshot::{ScreenshotResult, default_file_name_now, with_png_extension, write_png};
use crate::shortcuts::{Command, ShortcutRegistry};

/// Horizontal padding around the "disable click-through" control's label.
const CONTROL_PADDING: i32 = 16;
const CONTROL_MARGIN: i32 = 8;
const CONTROL_MIN_WIDTH: i32 = 50;

/// A screen ruler bound to a host platform.
pub struct RulerWidget<P: Platform> {
    platform: P,
    config: RulerConfig,
    state: RulerState,
    interaction: Interaction,
    closed: bool,
}

impl<P: Platform> RulerWidget<P> {
    /// Create a ruler at the configured default size, centered on the
    /// primary screen.
    pub fn new(platform: P, config: RulerConfig) -> Self {
        let geometry = Geometry::new(0, 0, config.default_width, config.default_height);
        let mut widget = Self {
            platform,
            state: RulerState::new(geometry),
            config,
            interaction: Interaction::new(),
            closed: false,
        };
        let centered = widget.centered_on_primary(widget.state.geometry);
        widget.state.set_geometry(centered);
        widget.sync_geometry();
        widget
    }

    pub fn state(&self) -> &RulerState {
        &self.state
    }

    pub fn geometry(&self) -> Geometry {
        self.state.geometry
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn centered_on_primary(&self, geometry: Geometry) -> Geometry {
        match self.platform.primary_screen() {
            Some(screen) => geometry.centered_in(screen.available),
            None => {
                log::warn!("No primary screen, leaving ruler at {:?}", geometry.position());
                geometry
            }
        }
    }

    /// Push the current geometry to the window and the click-through control.
    fn sync_geometry(&mut self) {
        self.platform.set_geometry(self.state.geometry);
        self.update_click_through_control();
        self.platform.request_repaint();
    }

    fn apply(&mut self, response: Response) {
        if let Some(geometry) = response.geometry {
            if geometry != self.state.geometry {
                self.state.update_geometry(geometry);
                self.platform.set_geometry(self.state.geometry);
                self.update_click_through_control();
            }
        }
        if let Some(cursor) = response.cursor {
            self.platform.set_cursor(cursor);
        }
        if response.repaint {
            self.platform.request_repaint();
        }
        if response.open_geometry_dialog {
            self.choose_geometry();
        }
    }

    /// Route a pointer event.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        let response = {
            let ctx = InteractionContext::new(&self.state, &self.platform, &self.config);
            match event {
                PointerEvent::Down { position, button } => self.interaction.press(&ctx, button, position),
                PointerEvent::Move { position, modifiers } => self.interaction.motion(&ctx, position, modifiers),
                PointerEvent::Up { position, button } => self.interaction.release(&ctx, button, position),
                PointerEvent::Leave => self.interaction.leave(),
            }
        };
        self.apply(response);
    }

    pub fn pointer_down(&mut self, position: PixelPoint, button: MouseButton) {
        self.handle_pointer(PointerEvent::Down { position, button });
    }

    pub fn pointer_up(&mut self, position: PixelPoint, button: MouseButton) {
        self.handle_pointer(PointerEvent::Up { position, button });
    }

    /// Route a key press. Returns whether a shortcut handled it.
    pub fn handle_key(&mut self, chord: KeyChord) -> bool {
        match ShortcutRegistry::lookup(chord) {
            Some(command) => {
                self.execute(command);
                true
            }
            None => false,
        }
    }

    /// Run a command.
    pub fn execute(&mut self, command: Command) {
        log::debug!("Executing {command:?}");
        match command {
            Command::Quit => self.close(),
            Command::Flip => {
                self.state.flip();
                self.sync_geometry();
            }
            Command::SetGeometry => self.choose_geometry(),
            Command::Reset => self.reset(),
            Command::ToggleTransparency => {
                self.state.toggle_transparency();
                self.platform.request_repaint();
            }
            Command::InvertColors => {
                self.state.toggle_invert();
                self.platform.request_repaint();
            }
            Command::ToggleClickThrough => self.set_click_through(!self.state.click_through),
            Command::ToggleAspectLock => {
                self.state.toggle_aspect_lock();
                self.platform.request_repaint();
            }
            Command::CycleUnit => {
                self.state.cycle_unit();
                log::debug!("Unit is now {}", self.state.unit.suffix());
                self.platform.request_repaint();
            }
            Command::ToggleGrid => {
                self.state.toggle_grid();
                self.platform.request_repaint();
            }
            Command::CopyDimensions => self.copy_dimensions(),
            Command::Screenshot => {
                if let Err(e) = self.take_screenshot() {
                    log::error!("Failed to save screenshot: {}", e);
                }
            }
            Command::Help => self.platform.show_help(&ShortcutRegistry::help_text()),
        }
    }

    fn close(&mut self) {
        self.closed = true;
        self.platform.set_click_through_control(None);
        self.platform.close();
    }

    /// Restore the reset size and recenter on the primary screen. The
    /// aspect-lock target is kept.
    pub fn reset(&mut self) {
        let resized = self
            .state
            .geometry
            .with_size(self.config.reset_width, self.config.reset_height);
        let geometry = self.centered_on_primary(resized);
        self.state.update_geometry(geometry);
        self.sync_geometry();
    }

    /// Ask the platform for an exact geometry and apply it.
    pub fn choose_geometry(&mut self) {
        if let Some(geometry) = self.platform.choose_geometry(self.state.geometry) {
            self.state.set_geometry(geometry);
            log::debug!("Geometry set to {:?}", self.state.geometry);
            self.sync_geometry();
        }
    }

    pub fn set_click_through(&mut self, enabled: bool) {
        if self.state.click_through == enabled {
            return;
        }
        self.state.click_through = enabled;
        self.platform.set_click_through(enabled);
        self.update_click_through_control();
        self.platform.request_repaint();
    }

    /// Called when the "disable click-through" control is clicked.
    pub fn disable_click_through(&mut self) {
        self.set_click_through(false);
    }

    /// Global geometry of the "disable click-through" control.
    pub fn click_through_control_geometry(&self) -> Geometry {
        let (hint_width, hint_height) = self.platform.click_through_control_size_hint();
        let Geometry {
            x,
            y,
            width,
            height,
        } = self.state.geometry;
        let control_width = (hint_width + CONTROL_PADDING)
            .max(self.config.click_through_control_min_width)
            .min((width - CONTROL_PADDING).max(CONTROL_MIN_WIDTH));
        let local_x = (width - control_width) / 2;
        let local_y = (height - hint_height - CONTROL_MARGIN).max(CONTROL_MARGIN);
        Geometry::new(x + local_x, y + local_y, control_width, hint_height)
    }

    fn update_click_through_control(&mut self) {
        let control = self
            .state
            .click_through
            .then(|| self.click_through_control_geometry());
        self.platform.set_click_through_control(control);
    }

    fn copy_dimensions(&mut self) {
        let text = format!("{}x{}", self.state.geometry.width, self.state.geometry.height);
        if let Err(e) = self.platform.set_clipboard_text(&text) {
            log::error!("Failed to copy dimensions: {}", e);
        }
    }

    /// Capture what is behind the ruler and save it as PNG.
    ///
    /// Returns the saved path, or `None` when there is no screen or the user
    /// cancelled. The window is shown again whatever the outcome.
    pub fn take_screenshot(&mut self) -> ScreenshotResult<Option<PathBuf>> {
        let geometry = self.state.geometry;
        let Some(screen) = self.platform.screen_for(geometry) else {
            log::warn!("No screen under the ruler, skipping screenshot");
            return Ok(None);
        };

        self.platform.set_visible(false);
        let result = self.capture_and_save(&screen, geometry);
        self.platform.set_visible(true);
        result
    }

    fn capture_and_save(
        &mut self,
        screen: &ScreenInfo,
        geometry: Geometry,
    ) -> ScreenshotResult<Option<PathBuf>> {
        let local = geometry.with_position(geometry.x - screen.geometry.x, geometry.y - screen.geometry.y);
        let image = self.platform.capture(screen, local)?;

        let Some(path) = self.platform.save_file_path(&default_file_name_now()) else {
            log::debug!("Screenshot save cancelled");
            return Ok(None);
        };
        let path = with_png_extension(path);
        write_png(&path, &image)?;
        log::info!("Saved screenshot to: {:?}", path);
        Ok(Some(path))
    }

    /// Paint the ruler and remember where the readout landed.
    pub fn paint(&mut self, surface: &mut dyn Surface) -> PaintOutput {
        let screen = self.platform.screen_for(self.state.geometry);
        let converter = UnitConverter::new(self.state.unit, screen.map(|s| s.metrics));
        let edges = screen
            .map(|s| aligned_edges(self.state.geometry, s.available))
            .unwrap_or_default();

        let output = {
            let ctx = RenderContext::new(&self.state, converter)
                .with_highlight_zones(self.interaction.highlight_zones())
                .with_aligned_edges(edges, self.interaction.is_moving_or_resizing())
                .with_readout_hovered(self.interaction.readout_hovered)
                .with_pick_position(self.interaction.pick_position);
            paint(surface, &ctx)
        };
        self.state.readout = output.readout;
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{CapturedImage, PlatformError, PlatformResult};
    use screenruler_core::hit_test::CursorShape;
    use screenruler_core::input::{Key, Modifiers};
    use screenruler_core::screen::{ScreenMetrics, ScreenProvider, StaticScreens};
    use screenruler_core::units::Unit;
    use screenruler_render::DisplayList;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[derive(Default)]
    struct MockPlatform {
        screens: StaticScreens,
        geometry: Option<Geometry>,
        cursor: Option<CursorShape>,
        repaints: usize,
        click_through: bool,
        control: Option<Geometry>,
        visible_log: Vec<bool>,
        closed: bool,
        next_geometry: Option<Geometry>,
        dialog_requests: usize,
        help: Option<String>,
        save_path: Option<PathBuf>,
        capture_requests: Vec<Geometry>,
        clipboard: Option<String>,
    }

    impl MockPlatform {
        fn with_screen() -> Self {
            Self {
                screens: StaticScreens::new(vec![
                    ScreenInfo::new(Geometry::new(0, 0, 1920, 1080), ScreenMetrics::standard())
                        .with_available(Geometry::new(0, 0, 1920, 1040)),
                ]),
                ..Default::default()
            }
        }
    }

    impl ScreenProvider for MockPlatform {
        fn screen_at(&self, point: PixelPoint) -> Option<ScreenInfo> {
            self.screens.screen_at(point)
        }

        fn primary_screen(&self) -> Option<ScreenInfo> {
            self.screens.primary_screen()
        }
    }

    impl Platform for MockPlatform {
        fn set_geometry(&mut self, geometry: Geometry) {
            self.geometry = Some(geometry);
        }

        fn set_cursor(&mut self, cursor: CursorShape) {
            self.cursor = Some(cursor);
        }

        fn request_repaint(&mut self) {
            self.repaints += 1;
        }

        fn set_click_through(&mut self, enabled: bool) {
            self.click_through = enabled;
        }

        fn set_click_through_control(&mut self, geometry: Option<Geometry>) {
            self.control = geometry;
        }

        fn set_visible(&mut self, visible: bool) {
            self.visible_log.push(visible);
        }

        fn close(&mut self) {
            self.closed = true;
        }

        fn choose_geometry(&mut self, _current: Geometry) -> Option<Geometry> {
            self.dialog_requests += 1;
            self.next_geometry.take()
        }

        fn show_help(&mut self, text: &str) {
            self.help = Some(text.to_string());
        }

        fn save_file_path(&mut self, _default_name: &str) -> Option<PathBuf> {
            self.save_path.clone()
        }

        fn capture(&mut self, _screen: &ScreenInfo, rect: Geometry) -> PlatformResult<CapturedImage> {
            self.capture_requests.push(rect);
            if rect.width <= 0 || rect.height <= 0 {
                return Err(PlatformError::Capture("empty rect".to_string()));
            }
            let len = (rect.width * rect.height * 4) as usize;
            Ok(CapturedImage::new(rect.width as u32, rect.height as u32, vec![128; len]))
        }

        fn set_clipboard_text(&mut self, text: &str) -> PlatformResult<()> {
            self.clipboard = Some(text.to_string());
            Ok(())
        }
    }

    fn widget() -> RulerWidget<MockPlatform> {
        init_logger();
        RulerWidget::new(MockPlatform::with_screen(), RulerConfig::default())
    }

    fn key(c: char) -> KeyChord {
        KeyChord::plain(Key::char(c))
    }

    fn no_mods() -> Modifiers {
        Modifiers::default()
    }

    #[test]
    fn test_construction_centers_on_available_area() {
        let widget = widget();
        assert_eq!(widget.geometry(), Geometry::new(615, 485, 690, 70));
        assert_eq!(widget.platform().geometry, Some(widget.geometry()));
    }

    #[test]
    fn test_construction_without_screens() {
        init_logger();
        let widget = RulerWidget::new(MockPlatform::default(), RulerConfig::default());
        assert_eq!(widget.geometry(), Geometry::new(0, 0, 690, 70));
    }

    #[test]
    fn test_unit_cycle_paints_each_unit() {
        let mut widget = widget();
        for (prefix, suffix) in [("690", " px"), ("18.26", " cm"), ("7.1", " in")] {
            let mut list = DisplayList::new();
            widget.paint(&mut list);
            assert!(
                list.texts()
                    .any(|(_, text, _)| text.starts_with(prefix) && text.ends_with(suffix)),
                "{prefix}{suffix}"
            );
            widget.handle_key(key('u'));
        }
        assert_eq!(widget.state().unit, Unit::Pixels);
    }

    #[test]
    fn test_body_drag_moves_window() {
        let mut widget = widget();
        let start = widget.geometry();
        let press = PixelPoint::new(start.x + 300, start.y + 35);
        widget.pointer_down(press, MouseButton::Left);
        assert_eq!(widget.platform().cursor, Some(CursorShape::ClosedHand));

        widget.handle_pointer(PointerEvent::Move {
            position: PixelPoint::new(press.x + 40, press.y - 100),
            modifiers: no_mods(),
        });
        assert_eq!(widget.geometry(), Geometry::new(start.x + 40, start.y - 100, 690, 70));
        assert_eq!(widget.platform().geometry, Some(widget.geometry()));

        widget.pointer_up(PixelPoint::new(press.x + 40, press.y - 100), MouseButton::Left);
        assert!(!widget.interaction().is_interacting());
    }

    #[test]
    fn test_drag_keeps_aspect_target() {
        let mut widget = widget();
        widget.handle_key(key('l'));
        let start = widget.geometry();
        let corner = PixelPoint::new(start.right() - 2, start.bottom() - 2);
        widget.pointer_down(corner, MouseButton::Left);
        let shift = Modifiers {
            shift: true,
            ..Default::default()
        };
        widget.handle_pointer(PointerEvent::Move {
            position: PixelPoint::new(corner.x + 110, corner.y + 30),
            modifiers: shift,
        });
        let geo = widget.geometry();
        assert_eq!((geo.width, geo.height), (798, 81));
        assert_eq!(widget.state().aspect_lock.simplified(), (69, 7));
    }

    #[test]
    fn test_readout_click_opens_geometry_dialog() {
        let mut widget = widget();
        widget.platform_mut().next_geometry = Some(Geometry::new(100, 100, 400, 200));
        widget.handle_key(key('s'));
        assert_eq!(widget.platform().dialog_requests, 1);
        assert_eq!(widget.geometry(), Geometry::new(100, 100, 400, 200));

        // Paint so the readout rect is known, then click its center.
        let mut list = DisplayList::new();
        let output = widget.paint(&mut list);
        assert!(output.readout.click_enabled);
        let center = PixelPoint::new(300, 200);

        widget.pointer_down(center, MouseButton::Left);
        widget.pointer_up(center, MouseButton::Left);
        assert_eq!(widget.platform().dialog_requests, 2);

        // Release far away: no dialog.
        widget.pointer_down(center, MouseButton::Left);
        widget.handle_pointer(PointerEvent::Move {
            position: PixelPoint::new(350, 200),
            modifiers: no_mods(),
        });
        widget.pointer_up(PixelPoint::new(350, 200), MouseButton::Left);
        assert_eq!(widget.platform().dialog_requests, 2);
    }

    #[test]
    fn test_exact_geometry_clamps_and_retargets_lock() {
        let mut widget = widget();
        widget.handle_key(key('l'));
        widget.platform_mut().next_geometry = Some(Geometry::new(10, 10, 300, 4));
        widget.execute(Command::SetGeometry);
        assert_eq!(widget.geometry(), Geometry::new(10, 10, 300, 10));
        assert_eq!(widget.state().aspect_lock.simplified(), (30, 1));
    }

    #[test]
    fn test_geometry_dialog_cancel_keeps_geometry() {
        let mut widget = widget();
        let before = widget.geometry();
        widget.execute(Command::SetGeometry);
        assert_eq!(widget.geometry(), before);
    }

    #[test]
    fn test_reset_recenters() {
        let mut widget = widget();
        widget.platform_mut().next_geometry = Some(Geometry::new(5, 5, 900, 300));
        widget.execute(Command::SetGeometry);
        widget.handle_key(key('r'));
        assert_eq!(widget.geometry(), Geometry::new(710, 485, 500, 70));
    }

    #[test]
    fn test_reset_keeps_aspect_target() {
        let mut widget = widget();
        widget.handle_key(key('l'));
        let before = widget.state().aspect_lock;

        widget.execute(Command::Reset);
        assert_eq!((widget.geometry().width, widget.geometry().height), (500, 70));
        assert_eq!(widget.state().aspect_lock, before);
        assert_eq!(widget.state().aspect_lock.simplified(), (69, 7));
        assert_eq!(widget.state().status_messages(), vec!["Aspect Ratio Locked [69:7]".to_string()]);
    }

    #[test]
    fn test_flip_swaps_dimensions() {
        let mut widget = widget();
        widget.handle_key(key('f'));
        assert_eq!((widget.geometry().width, widget.geometry().height), (70, 690));
    }

    #[test]
    fn test_click_through_control_follows_window() {
        let mut widget = widget();
        widget.handle_key(key('c'));
        assert!(widget.platform().click_through);
        let geo = widget.geometry();
        // Width is max(170, 160 + 16) = 176, centered; y = max(8, 70 - 30 - 8).
        assert_eq!(
            widget.platform().control,
            Some(Geometry::new(geo.x + 257, geo.y + 32, 176, 30))
        );
        assert!(widget.state().status_messages().contains(&"Clickthrough Mode Enabled".to_string()));

        widget.execute(Command::Reset);
        let geo = widget.geometry();
        assert_eq!(widget.platform().control, Some(Geometry::new(geo.x + 162, geo.y + 32, 176, 30)));

        widget.disable_click_through();
        assert!(!widget.platform().click_through);
        assert_eq!(widget.platform().control, None);
    }

    #[test]
    fn test_click_through_control_narrow_window() {
        let mut widget = widget();
        widget.platform_mut().next_geometry = Some(Geometry::new(0, 0, 40, 300));
        widget.execute(Command::SetGeometry);
        let control = widget.click_through_control_geometry();
        assert_eq!(control.width, 50);
        assert_eq!(control.x, -5);
        assert_eq!(control.y, 262);
    }

    #[test]
    fn test_copy_dimensions() {
        let mut widget = widget();
        assert!(widget.handle_key(KeyChord::ctrl(Key::char('c'))));
        assert_eq!(widget.platform().clipboard.as_deref(), Some("690x70"));
        assert!(!widget.state().click_through);
    }

    #[test]
    fn test_help_lists_shortcuts() {
        let mut widget = widget();
        assert!(widget.handle_key(KeyChord::plain(Key::F1)));
        let help = widget.platform().help.clone().unwrap();
        assert!(help.contains("Ctrl+S"));
    }

    #[test]
    fn test_quit() {
        let mut widget = widget();
        widget.handle_key(KeyChord::ctrl(Key::char('q')));
        assert!(widget.is_closed());
        assert!(widget.platform().closed);
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut widget = widget();
        assert!(!widget.handle_key(key('z')));
    }

    #[test]
    fn test_toggles() {
        let mut widget = widget();
        widget.handle_key(key('t'));
        assert!(widget.state().transparent && widget.state().invert_colors);
        widget.handle_key(key('i'));
        assert!(!widget.state().invert_colors);
        widget.handle_key(key('g'));
        assert!(widget.state().grid_enabled);
    }

    #[test]
    fn test_screenshot_saves_png() {
        let mut widget = widget();
        let path = std::env::temp_dir().join(format!("screenruler-test-{}", std::process::id()));
        widget.platform_mut().save_path = Some(path.clone());

        let saved = widget.take_screenshot().unwrap().unwrap();
        assert_eq!(saved, with_png_extension(path));
        assert_eq!(widget.platform().visible_log, vec![false, true]);
        assert_eq!(widget.platform().capture_requests, vec![Geometry::new(615, 485, 690, 70)]);

        let data = std::fs::read(&saved).unwrap();
        assert_eq!(&data[1..4], b"PNG");
        std::fs::remove_file(saved).unwrap();
    }

    #[test]
    fn test_screenshot_cancel_is_not_an_error() {
        let mut widget = widget();
        assert_eq!(widget.take_screenshot().unwrap(), None);
        assert_eq!(widget.platform().visible_log, vec![false, true]);
    }

    #[test]
    fn test_screenshot_without_screen_aborts() {
        init_logger();
        let mut widget = RulerWidget::new(MockPlatform::default(), RulerConfig::default());
        assert_eq!(widget.take_screenshot().unwrap(), None);
        assert!(widget.platform().visible_log.is_empty());
    }

    #[test]
    fn test_aligned_edges_painted_while_moving() {
        let mut widget = widget();
        let start = widget.geometry();
        let press = PixelPoint::new(start.x + 300, start.y + 35);
        widget.pointer_down(press, MouseButton::Left);
        // Move close to the left screen edge so the snap makes it flush.
        widget.handle_pointer(PointerEvent::Move {
            position: PixelPoint::new(press.x - start.x - 4, press.y),
            modifiers: no_mods(),
        });
        assert_eq!(widget.geometry().x, 0);

        let mut list = DisplayList::new();
        widget.paint(&mut list);
        assert!(list.lines().any(|(_, _, width)| width == 2.0));

        widget.pointer_up(press, MouseButton::Left);
        let mut list = DisplayList::new();
        widget.paint(&mut list);
        assert!(list.lines().all(|(_, _, width)| width != 2.0));
    }

    #[test]
    fn test_leave_resets_cursor() {
        let mut widget = widget();
        let geo = widget.geometry();
        widget.handle_pointer(PointerEvent::Move {
            position: PixelPoint::new(geo.x + 2, geo.y + 35),
            modifiers: no_mods(),
        });
        assert_eq!(widget.platform().cursor, Some(CursorShape::ResizeHorizontal));
        widget.handle_pointer(PointerEvent::Leave);
        assert_eq!(widget.platform().cursor, Some(CursorShape::Arrow));
    }
}
