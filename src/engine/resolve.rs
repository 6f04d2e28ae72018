use std::borrow::Cow;

use serde::Serialize;

use super::transpose::{transpose_pitch, TransposeOffset};
use crate::keymap::{resolve_key, KeyBinding, KeyNote};
use crate::notes::{pitch_name, PitchIndex};

/// A keyboard event as the browser reports it: `code` is the physical
/// position ("Digit1", "KeyQ"), `key` is what the active layout produced ("1", "q", "Q").
#[derive(Clone, Copy, Debug)]
pub struct RawKey<'a> {
    pub code: &'a str,
    pub key: &'a str,
}

impl<'a> RawKey<'a> {
    pub fn new(code: &'a str, key: &'a str) -> Self {
        RawKey { code, key }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ResolvedNote {
    /// Pitch of the key that was pressed, before transposition.
    pub key_pitch: PitchIndex,
    /// Pitch that sounds.
    pub pitch_index: PitchIndex,
    pub pitch_name: &'static str,
    /// Label of the pressed key; transposition does not change it.
    pub display_char: &'static str,
}

fn is_digit_code(code: &str) -> bool {
    matches!(code.strip_prefix("Digit").map(str::as_bytes), Some([d]) if d.is_ascii_digit())
}

/// Identifier used to look a key up in the layout table.
///
/// Digit-row keys go by physical code, everything else by the lower-cased
/// character the layout produced.
pub fn normalize_identifier<'a>(raw: &RawKey<'a>) -> Cow<'a, str> {
    if is_digit_code(raw.code) {
        Cow::Borrowed(raw.code)
    } else if raw.key.chars().any(char::is_uppercase) {
        Cow::Owned(raw.key.to_lowercase())
    } else {
        Cow::Borrowed(raw.key)
    }
}

/// Sharp when the modifier is held and the key has one, natural otherwise.
pub fn select_note(binding: &KeyBinding, modifier_active: bool) -> KeyNote {
    match binding.sharp {
        Some(sharp) if modifier_active => sharp,
        _ => binding.natural,
    }
}

/// Resolve a key event to the note it plays, or `None` when the key is not
/// part of the instrument.
pub fn resolve_note_event(
    raw: &RawKey<'_>,
    modifier_active: bool,
    transpose: TransposeOffset,
) -> Option<ResolvedNote> {
    let binding = resolve_key(&normalize_identifier(raw))?;
    let note = select_note(binding, modifier_active);
    let shifted = transpose_pitch(note.pitch, transpose);

    Some(ResolvedNote {
        key_pitch: note.pitch,
        pitch_index: shifted,
        pitch_name: pitch_name(shifted),
        display_char: note.label,
    })
}
