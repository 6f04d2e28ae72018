use serde::Serialize;

use crate::error::PianoError;
use crate::notes::{is_natural, PitchIndex};

/// Silhouette of a white key, set by where its black neighbours sit.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum KeyShape {
    /// Black key on the right only (C, F).
    NotchRight,
    /// Black keys on both sides (D, G, A).
    NotchBoth,
    /// Black key on the left only (E, B).
    NotchLeft,
    /// Plain rectangle; used for the top key of the keyboard.
    NoNotch,
}

impl KeyShape {
    /// Class name the stylesheet uses for this shape.
    pub fn css_class(self) -> &'static str {
        match self {
            KeyShape::NotchRight => "right-L",
            KeyShape::NotchBoth => "double-L",
            KeyShape::NotchLeft => "left-L",
            KeyShape::NoNotch => "",
        }
    }
}

/// Shape for the white key at `pitch`.
///
/// Only natural pitches are valid. Passing a sharp is a caller bug: it panics
/// in debug builds and yields `NoNotch` in release builds.
pub fn classify_white_key_shape(pitch: PitchIndex, is_highest_key: bool) -> KeyShape {
    if is_highest_key {
        return KeyShape::NoNotch;
    }
    debug_assert!(is_natural(pitch), "pitch {} is not a white key", pitch);

    match pitch % 12 {
        0 | 5 => KeyShape::NotchRight,
        2 | 7 | 9 => KeyShape::NotchBoth,
        4 | 11 => KeyShape::NotchLeft,
        _ => KeyShape::NoNotch,
    }
}

/// Variant of [`classify_white_key_shape`] for pitches from outside the crate,
/// reporting a sharp as an error instead of asserting.
pub fn checked_white_key_shape(pitch: PitchIndex, is_highest_key: bool) -> Result<KeyShape, PianoError> {
    if !is_natural(pitch) {
        return Err(PianoError::NotAWhiteKey(pitch));
    }
    Ok(classify_white_key_shape(pitch, is_highest_key))
}
