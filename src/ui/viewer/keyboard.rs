// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts.
//!
//! | Key | Action |
//! |-----|--------|
//! | `Escape` | Close |
//! | `ArrowLeft` | Previous |
//! | `ArrowRight` | Next |
//! | `i` / `I` | Toggle info panel |
//! | `+` / `=` | Zoom in |
//! | `-` | Zoom out |
//! | `r` / `R` | Rotate |

/// A key as reported by the host, named after DOM `KeyboardEvent.key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Character(char),
    Other,
}

impl Key {
    /// Parses a DOM key name (`"Escape"`, `"ArrowLeft"`, `"r"`, ...).
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Self::Escape,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Character(c),
                    _ => Self::Other,
                }
            }
        }
    }
}

/// Viewer action bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Close,
    Previous,
    Next,
    ToggleInfo,
    ZoomIn,
    ZoomOut,
    Rotate,
}

/// Looks up the action bound to `key`.
#[must_use]
pub fn shortcut_for(key: Key) -> Option<Shortcut> {
    match key {
        Key::Escape => Some(Shortcut::Close),
        Key::ArrowLeft => Some(Shortcut::Previous),
        Key::ArrowRight => Some(Shortcut::Next),
        Key::Character('i' | 'I') => Some(Shortcut::ToggleInfo),
        Key::Character('+' | '=') => Some(Shortcut::ZoomIn),
        Key::Character('-') => Some(Shortcut::ZoomOut),
        Key::Character('r' | 'R') => Some(Shortcut::Rotate),
        Key::Character(_) | Key::Other => None,
    }
}
