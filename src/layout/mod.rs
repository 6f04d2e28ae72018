pub mod keyboard;
pub mod shape;

pub use keyboard::{keyboard_keys, PianoKey};
pub use shape::{checked_white_key_shape, classify_white_key_shape, KeyShape};
