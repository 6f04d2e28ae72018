use serde::{Deserialize, Serialize};

use crate::notes::{PitchIndex, MAX_PITCH};

/// One octave in either direction.
pub const MAX_TRANSPOSE: i32 = 12;

/// Session-wide semitone shift, always within `-12..=12`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(from = "i32", into = "i32")]
pub struct TransposeOffset(i8);

impl TransposeOffset {
    pub const NONE: TransposeOffset = TransposeOffset(0);

    /// Clamps `semitones` into range rather than rejecting it.
    pub fn new(semitones: i32) -> Self {
        TransposeOffset(semitones.clamp(-MAX_TRANSPOSE, MAX_TRANSPOSE) as i8)
    }

    pub fn semitones(self) -> i32 {
        self.0 as i32
    }

    /// Step the offset, saturating at an octave.
    pub fn adjust(self, delta: i32) -> Self {
        TransposeOffset::new(self.semitones().saturating_add(delta))
    }
}

impl From<i32> for TransposeOffset {
    fn from(semitones: i32) -> Self {
        TransposeOffset::new(semitones)
    }
}

impl From<TransposeOffset> for i32 {
    fn from(offset: TransposeOffset) -> Self {
        offset.semitones()
    }
}

/// Shift `pitch` by `offset`, saturating at the edges of the note table.
pub fn transpose_pitch(pitch: PitchIndex, offset: TransposeOffset) -> PitchIndex {
    (pitch as i32 + offset.semitones()).clamp(0, MAX_PITCH as i32) as PitchIndex
}
