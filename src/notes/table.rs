use crate::error::PianoError;

/// Semitone offset from C1. Valid values are `0..=MAX_PITCH`.
pub type PitchIndex = u8;

pub const MAX_PITCH: PitchIndex = 84;

const PITCH_NAMES: [&str; MAX_PITCH as usize + 1] = [
    "C1", "C#1", "D1", "D#1", "E1", "F1", "F#1", "G1", "G#1", "A1", "A#1", "B1",
    "C2", "C#2", "D2", "D#2", "E2", "F2", "F#2", "G2", "G#2", "A2", "A#2", "B2",
    "C3", "C#3", "D3", "D#3", "E3", "F3", "F#3", "G3", "G#3", "A3", "A#3", "B3",
    "C4", "C#4", "D4", "D#4", "E4", "F4", "F#4", "G4", "G#4", "A4", "A#4", "B4",
    "C5", "C#5", "D5", "D#5", "E5", "F5", "F#5", "G5", "G#5", "A5", "A#5", "B5",
    "C6", "C#6", "D6", "D#6", "E6", "F6", "F#6", "G6", "G#6", "A6", "A#6", "B6",
    "C7", "C#7", "D7", "D#7", "E7", "F7", "F#7", "G7", "G#7", "A7", "A#7", "B7",
    "C8",
];

/// Name of the pitch at `index`, e.g. 36 -> "C4".
///
/// Callers clamp before lookup. An out-of-range index trips a debug assertion
/// and otherwise resolves to the top of the table.
pub fn pitch_name(index: PitchIndex) -> &'static str {
    debug_assert!(index <= MAX_PITCH, "pitch index {} out of range", index);
    PITCH_NAMES[index.min(MAX_PITCH) as usize]
}

/// Reverse lookup of [`pitch_name`].
pub fn pitch_index(name: &str) -> Result<PitchIndex, PianoError> {
    let name = name.trim();
    PITCH_NAMES
        .iter()
        .position(|&n| n == name)
        .map(|i| i as PitchIndex)
        .ok_or_else(|| PianoError::UnknownPitchName(name.to_string()))
}

/// Range check for indices arriving from outside the crate (e.g. JS numbers).
pub fn checked_pitch(value: i32) -> Result<PitchIndex, PianoError> {
    if (0..=MAX_PITCH as i32).contains(&value) {
        Ok(value as PitchIndex)
    } else {
        Err(PianoError::PitchOutOfRange(value))
    }
}

/// Natural pitches are the white keys: C D E F G A B.
pub fn is_natural(index: PitchIndex) -> bool {
    matches!(index % 12, 0 | 2 | 4 | 5 | 7 | 9 | 11)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pitch_name_known_values() {
        assert_eq!(pitch_name(0), "C1");
        assert_eq!(pitch_name(12), "C2");
        assert_eq!(pitch_name(13), "C#2");
        assert_eq!(pitch_name(36), "C4");
        assert_eq!(pitch_name(45), "A4");
        assert_eq!(pitch_name(84), "C8");
    }

    #[test]
    fn test_pitch_names_are_injective() {
        let names: HashSet<&str> = (0..=MAX_PITCH).map(pitch_name).collect();
        assert_eq!(names.len(), MAX_PITCH as usize + 1);
    }

    #[test]
    fn test_pitch_names_follow_chromatic_order() {
        let letters = ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];
        for i in 0..=MAX_PITCH {
            let expected = format!("{}{}", letters[(i % 12) as usize], i / 12 + 1);
            assert_eq!(pitch_name(i), expected, "wrong name at index {}", i);
        }
    }

    #[test]
    fn test_pitch_index_reverse_lookup() {
        for i in 0..=MAX_PITCH {
            assert_eq!(pitch_index(pitch_name(i)).unwrap(), i);
        }
        assert_eq!(pitch_index(" F#4 ").unwrap(), 42);
    }

    #[test]
    fn test_pitch_index_unknown_name() {
        assert_eq!(
            pitch_index("H2"),
            Err(PianoError::UnknownPitchName("H2".to_string()))
        );
        assert!(pitch_index("C9").is_err());
        assert!(pitch_index("").is_err());
    }

    #[test]
    fn test_checked_pitch() {
        assert_eq!(checked_pitch(0), Ok(0));
        assert_eq!(checked_pitch(84), Ok(84));
        assert_eq!(checked_pitch(85), Err(PianoError::PitchOutOfRange(85)));
        assert_eq!(checked_pitch(-1), Err(PianoError::PitchOutOfRange(-1)));
    }

    #[test]
    fn test_is_natural() {
        let naturals: Vec<PitchIndex> = (0..12).filter(|&i| is_natural(i)).collect();
        assert_eq!(naturals, vec![0, 2, 4, 5, 7, 9, 11]);
        assert!(is_natural(84));
        assert!(!is_natural(13));
    }
}
