use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;

use crate::notes::PitchIndex;

/// Natural pitch bound to `Digit1`, the leftmost key.
pub const BASE_PITCH: PitchIndex = 12;

/// One playable note on a key: its pitch and the label shown on the key.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyNote {
    pub pitch: PitchIndex,
    pub label: &'static str,
}

/// A computer key: a natural note plus the sharp reached with shift.
/// Keys landing on E and B have no sharp, like the gaps between black keys.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyBinding {
    pub natural: KeyNote,
    pub sharp: Option<KeyNote>,
}

impl KeyBinding {
    const fn white(pitch: PitchIndex, label: &'static str) -> Self {
        KeyBinding {
            natural: KeyNote { pitch, label },
            sharp: None,
        }
    }

    const fn with_sharp(pitch: PitchIndex, label: &'static str, sharp_label: &'static str) -> Self {
        KeyBinding {
            natural: KeyNote { pitch, label },
            sharp: Some(KeyNote {
                pitch: pitch + 1,
                label: sharp_label,
            }),
        }
    }

    pub fn natural_pitch(&self) -> PitchIndex {
        self.natural.pitch
    }

    pub fn sharp_pitch(&self) -> Option<PitchIndex> {
        self.sharp.map(|s| s.pitch)
    }

    /// Both pitches this key can sound, natural first.
    pub fn pitches(&self) -> impl Iterator<Item = PitchIndex> {
        std::iter::once(self.natural.pitch).chain(self.sharp_pitch())
    }
}

// Digits are keyed by physical code ("Digit1") since the shifted symbol
// differs between language layouts. Letters are keyed by the lower-cased
// character the layout produces, since letter positions get remapped.
// Non-QWERTY users get a non-consecutive note order; the browser cannot
// tell us the layout.
const KEY_LAYOUT: [(&str, KeyBinding); 36] = [
    ("Digit1", KeyBinding::with_sharp(12, "1", "!")), // C2
    ("Digit2", KeyBinding::with_sharp(14, "2", "@")), // D2
    ("Digit3", KeyBinding::white(16, "3")),           // E2
    ("Digit4", KeyBinding::with_sharp(17, "4", "$")), // F2
    ("Digit5", KeyBinding::with_sharp(19, "5", "%")), // G2
    ("Digit6", KeyBinding::with_sharp(21, "6", "^")), // A2
    ("Digit7", KeyBinding::white(23, "7")),           // B2
    ("Digit8", KeyBinding::with_sharp(24, "8", "*")), // C3
    ("Digit9", KeyBinding::with_sharp(26, "9", "(")), // D3
    ("Digit0", KeyBinding::white(28, "0")),           // E3
    ("q", KeyBinding::with_sharp(29, "q", "Q")),      // F3
    ("w", KeyBinding::with_sharp(31, "w", "W")),      // G3
    ("e", KeyBinding::with_sharp(33, "e", "E")),      // A3
    ("r", KeyBinding::white(35, "r")),                // B3
    ("t", KeyBinding::with_sharp(36, "t", "T")),      // C4
    ("y", KeyBinding::with_sharp(38, "y", "Y")),      // D4
    ("u", KeyBinding::white(40, "u")),                // E4
    ("i", KeyBinding::with_sharp(41, "i", "I")),      // F4
    ("o", KeyBinding::with_sharp(43, "o", "O")),      // G4
    ("p", KeyBinding::with_sharp(45, "p", "P")),      // A4
    ("a", KeyBinding::white(47, "a")),                // B4
    ("s", KeyBinding::with_sharp(48, "s", "S")),      // C5
    ("d", KeyBinding::with_sharp(50, "d", "D")),      // D5
    ("f", KeyBinding::white(52, "f")),                // E5
    ("g", KeyBinding::with_sharp(53, "g", "G")),      // F5
    ("h", KeyBinding::with_sharp(55, "h", "H")),      // G5
    ("j", KeyBinding::with_sharp(57, "j", "J")),      // A5
    ("k", KeyBinding::white(59, "k")),                // B5
    ("l", KeyBinding::with_sharp(60, "l", "L")),      // C6
    ("z", KeyBinding::with_sharp(62, "z", "Z")),      // D6
    ("x", KeyBinding::white(64, "x")),                // E6
    ("c", KeyBinding::with_sharp(65, "c", "C")),      // F6
    ("v", KeyBinding::with_sharp(67, "v", "V")),      // G6
    ("b", KeyBinding::with_sharp(69, "b", "B")),      // A6
    ("n", KeyBinding::white(71, "n")),                // B6
    ("m", KeyBinding::white(72, "m")),                // C7
];

fn index() -> &'static HashMap<&'static str, usize> {
    static INDEX: OnceLock<HashMap<&'static str, usize>> = OnceLock::new();
    INDEX.get_or_init(|| {
        KEY_LAYOUT
            .iter()
            .enumerate()
            .map(|(slot, (id, _))| (*id, slot))
            .collect()
    })
}

/// Binding for a normalized identifier, or `None` if the key is not part of the instrument.
pub fn resolve_key(identifier: &str) -> Option<&'static KeyBinding> {
    index().get(identifier).map(|&slot| &KEY_LAYOUT[slot].1)
}

/// All bindings in physical order, left to right and top row first.
pub fn bindings() -> impl Iterator<Item = (&'static str, &'static KeyBinding)> {
    KEY_LAYOUT.iter().map(|(id, binding)| (*id, binding))
}

/// Label of whichever key (natural or shifted) plays `pitch`.
pub fn label_for_pitch(pitch: PitchIndex) -> Option<&'static str> {
    bindings()
        .flat_map(|(_, b)| std::iter::once(b.natural).chain(b.sharp))
        .find(|note| note.pitch == pitch)
        .map(|note| note.label)
}

/// Pitch of the rightmost white key.
pub fn highest_natural_pitch() -> PitchIndex {
    bindings()
        .map(|(_, b)| b.natural_pitch())
        .max()
        .unwrap_or(BASE_PITCH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_resolve_known_keys() {
        let digit1 = resolve_key("Digit1").unwrap();
        assert_eq!(digit1.natural_pitch(), 12);
        assert_eq!(digit1.sharp_pitch(), Some(13));
        assert_eq!(digit1.natural.label, "1");
        assert_eq!(digit1.sharp.unwrap().label, "!");

        let q = resolve_key("q").unwrap();
        assert_eq!(q.natural_pitch(), 29);
        assert_eq!(q.sharp.unwrap().label, "Q");

        let m = resolve_key("m").unwrap();
        assert_eq!(m.natural_pitch(), 72);
        assert!(m.sharp.is_none());
    }

    #[test]
    fn test_unbound_keys() {
        assert!(resolve_key("F13").is_none());
        assert!(resolve_key("Q").is_none()); // identifiers are already lower-cased
        assert!(resolve_key("1").is_none()); // digits go by physical code
        assert!(resolve_key("").is_none());
    }

    #[test]
    fn test_layout_covers_digit_row_and_letters() {
        let ids: Vec<&str> = bindings().map(|(id, _)| id).collect();
        assert_eq!(ids.len(), 36);
        for d in 0..10 {
            assert!(ids.contains(&format!("Digit{}", d).as_str()), "Digit{} missing", d);
        }
        for c in 'a'..='z' {
            assert!(ids.contains(&c.to_string().as_str()), "{} missing", c);
        }
        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_naturals_strictly_increasing_from_base() {
        let naturals: Vec<PitchIndex> = bindings().map(|(_, b)| b.natural_pitch()).collect();
        assert_eq!(naturals[0], BASE_PITCH);
        for pair in naturals.windows(2) {
            assert!(pair[0] < pair[1], "{} not below {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_pitches_are_chromatic_without_gaps_or_duplicates() {
        let all: Vec<PitchIndex> = bindings().flat_map(|(_, b)| b.pitches()).collect();
        let expected: Vec<PitchIndex> = (BASE_PITCH..=72).collect();
        assert_eq!(all, expected);
    }

    #[test]
    fn test_sharp_is_one_semitone_above_natural() {
        for (id, binding) in bindings() {
            if let Some(sharp) = binding.sharp_pitch() {
                assert_eq!(sharp, binding.natural_pitch() + 1, "bad sharp on {}", id);
            }
        }
    }

    #[test]
    fn test_no_sharp_on_e_and_b() {
        for (id, binding) in bindings() {
            let step = binding.natural_pitch() % 12;
            if step == 4 || step == 11 {
                assert!(binding.sharp.is_none(), "{} should have no sharp", id);
            }
        }
    }

    #[test]
    fn test_label_for_pitch() {
        assert_eq!(label_for_pitch(12), Some("1"));
        assert_eq!(label_for_pitch(13), Some("!"));
        assert_eq!(label_for_pitch(30), Some("Q"));
        assert_eq!(label_for_pitch(72), Some("m"));
        assert_eq!(label_for_pitch(0), None);
        assert_eq!(label_for_pitch(73), None);
    }

    #[test]
    fn test_highest_natural_pitch() {
        assert_eq!(highest_natural_pitch(), 72);
    }
}
