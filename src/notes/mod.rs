pub mod samples;
pub mod table;

pub use table::{checked_pitch, is_natural, pitch_index, pitch_name, PitchIndex, MAX_PITCH};
