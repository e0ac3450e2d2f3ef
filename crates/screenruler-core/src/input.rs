//! Pointer and keyboard input types.

use serde::{Deserialize, Serialize};

use crate::geometry::PixelPoint;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Move or resize, depending on where the press lands.
    Left,
    /// Pick mode: live measurement to the pointer.
    Right,
    /// Pan the window regardless of the press position.
    Middle,
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl snaps moves and resizes to the medium tick spacing.
    pub fn grid_snap(&self) -> bool {
        self.ctrl
    }

    /// Shift turns off snapping to screen edges.
    pub fn edge_snap(&self) -> bool {
        !self.shift
    }
}

/// Pointer event in global screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: PixelPoint,
        button: MouseButton,
    },
    Up {
        position: PixelPoint,
        button: MouseButton,
    },
    Move {
        position: PixelPoint,
        modifiers: Modifiers,
    },
    /// The pointer left the widget.
    Leave,
}

/// A key identifier, independent of the windowing library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A printable key, stored uppercase.
    Char(char),
    F1,
}

impl Key {
    pub fn char(c: char) -> Self {
        Key::Char(c.to_ascii_uppercase())
    }
}

/// A key together with the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyChord {
    pub key: Key,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyChord {
    pub const fn new(key: Key, ctrl: bool, shift: bool) -> Self {
        Self { key, ctrl, shift }
    }

    pub const fn plain(key: Key) -> Self {
        Self::new(key, false, false)
    }

    pub const fn ctrl(key: Key) -> Self {
        Self::new(key, true, false)
    }

    /// Format the chord for display (e.g., "Ctrl+S").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl".to_string());
        }
        if self.shift {
            parts.push("Shift".to_string());
        }
        parts.push(match self.key {
            Key::Char(c) => c.to_string(),
            Key::F1 => "F1".to_string(),
        });
        parts.join("+")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_roles() {
        let mods = Modifiers {
            ctrl: true,
            ..Default::default()
        };
        assert!(mods.grid_snap());
        assert!(mods.edge_snap());

        let mods = Modifiers {
            shift: true,
            ..Default::default()
        };
        assert!(!mods.grid_snap());
        assert!(!mods.edge_snap());
    }

    #[test]
    fn test_key_char_is_uppercased() {
        assert_eq!(Key::char('q'), Key::Char('Q'));
    }

    #[test]
    fn test_chord_format() {
        assert_eq!(KeyChord::ctrl(Key::char('s')).format(), "Ctrl+S");
        assert_eq!(KeyChord::plain(Key::F1).format(), "F1");
        assert_eq!(KeyChord::new(Key::char('z'), true, true).format(), "Ctrl+Shift+Z");
    }
}
