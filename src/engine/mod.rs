pub mod resolve;
pub mod transpose;

pub use resolve::{normalize_identifier, resolve_note_event, select_note, RawKey, ResolvedNote};
pub use transpose::{transpose_pitch, TransposeOffset, MAX_TRANSPOSE};
