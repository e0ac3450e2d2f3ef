//! Translation of winit input into the ruler's input types.

use screenruler_core::geometry::PixelPoint;
use screenruler_core::input::{Key, KeyChord, Modifiers, MouseButton};
use winit::dpi::PhysicalPosition;
use winit::event::MouseButton as WinitButton;
use winit::keyboard::{Key as WinitKey, ModifiersState, NamedKey};

/// Map a winit mouse button; buttons the ruler ignores map to `None`.
pub fn mouse_button(button: WinitButton) -> Option<MouseButton> {
    match button {
        WinitButton::Left => Some(MouseButton::Left),
        WinitButton::Right => Some(MouseButton::Right),
        WinitButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}

pub fn modifiers(state: ModifiersState) -> Modifiers {
    Modifiers {
        shift: state.shift_key(),
        ctrl: state.control_key(),
        alt: state.alt_key(),
        meta: state.super_key(),
    }
}

/// Map a logical key; unbound keys map to `None`.
pub fn key(key: &WinitKey) -> Option<Key> {
    match key {
        WinitKey::Character(text) => text.chars().next().map(Key::char),
        WinitKey::Named(NamedKey::F1) => Some(Key::F1),
        _ => None,
    }
}

pub fn key_chord(logical: &WinitKey, state: ModifiersState) -> Option<KeyChord> {
    key(logical).map(|key| KeyChord::new(key, state.control_key(), state.shift_key()))
}

/// Truncate a window-relative cursor position and offset it by the window's
/// global origin.
pub fn global_position(local: PhysicalPosition<f64>, window_origin: PixelPoint) -> PixelPoint {
    PixelPoint::new(window_origin.x + local.x as i32, window_origin.y + local.y as i32)
}
