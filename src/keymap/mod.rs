pub mod layout;

pub use layout::{bindings, label_for_pitch, highest_natural_pitch, resolve_key, KeyBinding, KeyNote, BASE_PITCH};
