//! Keyboard shortcut mapping.
//!
//! The presentation layer intercepts key events before the browser default
//! and resolves them here. Only save is bound out of the box; hosts may bind
//! the other sheet actions.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An action the sheet toolbar exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SheetAction {
    Save,
    Publish,
    Unpublish,
    Duplicate,
    Share,
    DownloadImage,
    ExportJson,
}

/// Error when parsing a chord string like `"ctrl+s"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChordParseError {
    #[error("Empty chord")]
    Empty,
    #[error("Unknown modifier: {0}")]
    UnknownModifier(String),
    #[error("Chord key must be a single character, got: {0}")]
    InvalidKey(String),
}

/// A modifier+key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub key: char,
}

impl KeyChord {
    pub fn ctrl(key: char) -> Self {
        Self {
            ctrl: true,
            alt: false,
            shift: false,
            key,
        }
    }
}

impl FromStr for KeyChord {
    type Err = ChordParseError;

    /// Parses `"ctrl+s"`, `"ctrl+shift+e"`, or a bare key like `"s"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ChordParseError::Empty);
        }

        let mut chord = Self {
            ctrl: false,
            alt: false,
            shift: false,
            key: '\0',
        };
        let mut key = None;
        for part in s.split('+').map(str::trim) {
            match part.to_lowercase().as_str() {
                "" => return Err(ChordParseError::Empty),
                "ctrl" | "control" | "cmd" | "meta" => chord.ctrl = true,
                "alt" => chord.alt = true,
                "shift" => chord.shift = true,
                other => {
                    let mut chars = other.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => key = Some(c),
                        _ => return Err(ChordParseError::InvalidKey(other.to_string())),
                    }
                }
            }
        }

        chord.key = key.ok_or(ChordParseError::Empty)?;
        Ok(chord)
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            write!(f, "ctrl+")?;
        }
        if self.alt {
            write!(f, "alt+")?;
        }
        if self.shift {
            write!(f, "shift+")?;
        }
        write!(f, "{}", self.key)
    }
}

/// Chord-to-action bindings.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<KeyChord, SheetAction>,
}

impl Keymap {
    /// An empty keymap with no bindings at all.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    pub fn bind(&mut self, chord: KeyChord, action: SheetAction) {
        self.bindings.insert(chord, action);
    }

    /// The action bound to `chord`, if any. Unbound chords fall through to
    /// the browser.
    pub fn resolve(&self, chord: KeyChord) -> Option<SheetAction> {
        self.bindings.get(&chord).copied()
    }
}

impl Default for Keymap {
    /// The reserved save shortcut, and nothing else.
    fn default() -> Self {
        let mut map = Self::empty();
        map.bind(KeyChord::ctrl('s'), SheetAction::Save);
        map
    }
}
