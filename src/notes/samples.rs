use std::collections::BTreeMap;

use super::table::{pitch_name, PitchIndex, MAX_PITCH};

/// Sample file for a pitch. `#` is not URL friendly, so "C#1" is stored as "Cs1.mp3".
pub fn sample_file_name(index: PitchIndex) -> String {
    format!("{}.mp3", pitch_name(index).replace('#', "s"))
}

/// Pitch name -> sample file for every pitch in the table, as the sampler expects it.
pub fn sample_urls() -> BTreeMap<&'static str, String> {
    (0..=MAX_PITCH)
        .map(|i| (pitch_name(i), sample_file_name(i)))
        .collect()
}
