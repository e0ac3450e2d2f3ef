//! Keyboard shortcut registry and documentation.

use screenruler_core::input::{Key, KeyChord};

/// Something a key binding can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Quit,
    Flip,
    SetGeometry,
    Reset,
    ToggleTransparency,
    InvertColors,
    ToggleClickThrough,
    ToggleAspectLock,
    CycleUnit,
    ToggleGrid,
    CopyDimensions,
    Screenshot,
    Help,
}

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub chord: KeyChord,
    pub command: Command,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(chord: KeyChord, command: Command, description: &'static str) -> Self {
        Self {
            chord,
            command,
            description,
        }
    }

    /// Whether a pressed chord triggers this shortcut. Shift is ignored
    /// unless the shortcut asks for it.
    pub fn matches(&self, pressed: KeyChord) -> bool {
        self.chord.key == pressed.key
            && self.chord.ctrl == pressed.ctrl
            && (!self.chord.shift || pressed.shift)
    }

    /// Format the shortcut for display (e.g., "Ctrl+S").
    pub fn format(&self) -> String {
        self.chord.format()
    }
}

/// Held modifiers that change pointer behavior, for the help text.
const MODIFIER_HINTS: &[(&str, &str)] = &[
    ("Ctrl", "Hold while dragging to snap to medium tick spacing"),
    ("Shift", "Hold while dragging to disable screen-edge snapping"),
];

const HELP_INTRO: &str = "Measure distances on your screen, such as the width of a banner on some website.\n\n\
Drag with the left button to move, or grab an edge or corner to resize. Drag with the middle button \
to move from anywhere. Hold the right button to measure from the top-left corner to the pointer. \
Click the size readout to enter an exact geometry.";

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        let c = Key::char;
        vec![
            Shortcut::new(KeyChord::plain(c('q')), Command::Quit, "Quit"),
            Shortcut::new(KeyChord::ctrl(c('q')), Command::Quit, "Quit"),
            Shortcut::new(KeyChord::plain(c('f')), Command::Flip, "Swap the X and Y axis dimensions"),
            Shortcut::new(
                KeyChord::plain(c('s')),
                Command::SetGeometry,
                "Set the window position and size to exact values",
            ),
            Shortcut::new(
                KeyChord::plain(c('r')),
                Command::Reset,
                "Reset the window size and position to defaults",
            ),
            Shortcut::new(KeyChord::plain(c('t')), Command::ToggleTransparency, "Make the window transparent"),
            Shortcut::new(KeyChord::plain(c('i')), Command::InvertColors, "Switch between light and dark colors"),
            Shortcut::new(KeyChord::plain(c('c')), Command::ToggleClickThrough, "Toggle clickthrough mode"),
            Shortcut::new(KeyChord::plain(c('l')), Command::ToggleAspectLock, "Lock/unlock aspect ratio while resizing"),
            Shortcut::new(KeyChord::plain(c('u')), Command::CycleUnit, "Toggle units (px, cm, in)"),
            Shortcut::new(KeyChord::plain(c('g')), Command::ToggleGrid, "Toggle full-window grid from tick marks"),
            Shortcut::new(
                KeyChord::ctrl(c('c')),
                Command::CopyDimensions,
                "Copy current dimensions to clipboard (123x456)",
            ),
            Shortcut::new(
                KeyChord::ctrl(c('s')),
                Command::Screenshot,
                "Take a screenshot of what's behind the ruler",
            ),
            Shortcut::new(KeyChord::plain(Key::F1), Command::Help, "Display this help"),
            Shortcut::new(KeyChord::plain(c('h')), Command::Help, "Display this help"),
        ]
    }

    /// The command bound to a pressed chord.
    pub fn lookup(pressed: KeyChord) -> Option<Command> {
        Self::all()
            .into_iter()
            .find(|shortcut| shortcut.matches(pressed))
            .map(|shortcut| shortcut.command)
    }

    /// Help text listing every command once, with all its key bindings.
    pub fn help_text() -> String {
        let mut lines: Vec<(String, &'static str)> = Vec::new();
        let mut seen: Vec<Command> = Vec::new();
        let all = Self::all();
        for shortcut in &all {
            if seen.contains(&shortcut.command) {
                continue;
            }
            seen.push(shortcut.command);
            let keys: Vec<String> = all
                .iter()
                .filter(|other| other.command == shortcut.command)
                .map(Shortcut::format)
                .collect();
            lines.push((keys.join(" / "), shortcut.description));
        }
        for &(keys, description) in MODIFIER_HINTS {
            lines.push((keys.to_string(), description));
        }

        let mut text = String::from(HELP_INTRO);
        text.push_str("\n\n");
        for (keys, description) in lines {
            text.push_str(&format!("{keys:12}\t{description}\n"));
        }
        text
    }
}
