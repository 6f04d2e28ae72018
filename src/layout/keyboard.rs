use serde::Serialize;

use super::shape::{classify_white_key_shape, KeyShape};
use crate::keymap::{bindings, highest_natural_pitch};
use crate::notes::{pitch_name, PitchIndex};

/// Black keys start this far into the white key they belong to, in white-key widths.
const BLACK_KEY_INSET: f64 = 0.7;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PianoKey {
    pub pitch: PitchIndex,
    pub pitch_name: &'static str,
    pub label: &'static str,
    pub is_white: bool,
    /// Position of the owning computer key in the layout.
    pub slot: usize,
    /// Left edge, in white-key widths from the left of the keyboard.
    pub offset: f64,
    /// Only set for white keys.
    pub shape: Option<KeyShape>,
    pub css_class: &'static str,
}

/// Every on-screen key in layout order, each white key followed by its black key.
pub fn keyboard_keys() -> Vec<PianoKey> {
    let top = highest_natural_pitch();

    let mut keys = Vec::new();
    for (slot, (_, binding)) in bindings().enumerate() {
        let white = binding.natural;
        let shape = classify_white_key_shape(white.pitch, white.pitch == top);
        keys.push(PianoKey {
            pitch: white.pitch,
            pitch_name: pitch_name(white.pitch),
            label: white.label,
            is_white: true,
            slot,
            offset: slot as f64,
            shape: Some(shape),
            css_class: shape.css_class(),
        });

        if let Some(black) = binding.sharp {
            keys.push(PianoKey {
                pitch: black.pitch,
                pitch_name: pitch_name(black.pitch),
                label: black.label,
                is_white: false,
                slot,
                offset: slot as f64 + BLACK_KEY_INSET,
                shape: None,
                css_class: "",
            });
        }
    }
    keys
}
