use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod engine;
pub mod error;
pub mod keymap;
pub mod layout;
pub mod notes;
pub mod session;

use config::SessionConfig;
use engine::{RawKey, TransposeOffset};
use error::PianoError;
use session::PianoSession;

fn js_err(e: PianoError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Like `to_js`, but `None` becomes `null` rather than `undefined`.
fn option_to_js<T: Serialize>(value: Option<T>) -> Result<JsValue, JsValue> {
    match value {
        Some(v) => to_js(&v),
        None => Ok(JsValue::NULL),
    }
}

fn pitch_arg(value: i32) -> Result<notes::PitchIndex, JsValue> {
    notes::checked_pitch(value).map_err(js_err)
}

/// Pitch name for an index in 0..=84, e.g. 36 -> "C4".
#[wasm_bindgen]
pub fn pitch_name(index: i32) -> Result<String, JsValue> {
    Ok(notes::pitch_name(pitch_arg(index)?).to_string())
}

#[wasm_bindgen]
pub fn pitch_index(name: &str) -> Result<u8, JsValue> {
    notes::pitch_index(name).map_err(js_err)
}

/// Resolve a keyboard event without any session state. Returns `null` for
/// keys that are not part of the instrument.
#[wasm_bindgen]
pub fn resolve_note_event(code: &str, key: &str, shift: bool, transpose: i32) -> Result<JsValue, JsValue> {
    let resolved = engine::resolve_note_event(&RawKey::new(code, key), shift, TransposeOffset::new(transpose));
    option_to_js(resolved)
}

/// Every on-screen key, in the order the keyboard draws them.
#[wasm_bindgen]
pub fn keyboard_layout() -> Result<JsValue, JsValue> {
    to_js(&layout::keyboard_keys())
}

/// `{ "C1": "C1.mp3", "C#1": "Cs1.mp3", ... }` as a plain object for the sampler.
#[wasm_bindgen]
pub fn sample_urls() -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    notes::samples::sample_urls()
        .serialize(&serializer)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// CSS class for a white key's silhouette.
#[wasm_bindgen]
pub fn white_key_shape(pitch: i32, is_highest: bool) -> Result<String, JsValue> {
    let shape = layout::checked_white_key_shape(pitch_arg(pitch)?, is_highest).map_err(js_err)?;
    Ok(shape.css_class().to_string())
}

/// A piano on the page: held keys, sounding notes, transpose and volume.
#[wasm_bindgen]
pub struct Piano {
    session: PianoSession,
}

#[wasm_bindgen]
impl Piano {
    /// `config` is an optional object with any `SessionConfig` fields.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<Piano, JsValue> {
        let config: SessionConfig = if config.is_null() || config.is_undefined() {
            SessionConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        let session = PianoSession::new(config).map_err(js_err)?;
        Ok(Piano { session })
    }

    pub fn mark_audio_ready(&mut self) {
        self.session.mark_audio_ready();
    }

    #[wasm_bindgen(getter)]
    pub fn audio_ready(&self) -> bool {
        self.session.is_audio_ready()
    }

    /// Returns a note-on `{ key_pitch, pitch_index, pitch_name, display_char }` or `null`.
    pub fn key_down(&mut self, code: &str, key: &str, shift: bool) -> Result<JsValue, JsValue> {
        option_to_js(self.session.key_down(&RawKey::new(code, key), shift))
    }

    /// Returns the list of note-offs for the key, empty for unbound keys.
    pub fn key_up(&mut self, code: &str, key: &str) -> Result<JsValue, JsValue> {
        to_js(&self.session.key_up(&RawKey::new(code, key)))
    }

    pub fn pointer_down(&mut self, pitch: i32) -> Result<JsValue, JsValue> {
        let pitch = pitch_arg(pitch)?;
        option_to_js(self.session.pointer_down(pitch))
    }

    pub fn pointer_up(&mut self, pitch: i32) -> Result<JsValue, JsValue> {
        let pitch = pitch_arg(pitch)?;
        to_js(&self.session.pointer_up(pitch))
    }

    pub fn pointer_enter(&mut self, pitch: i32, primary_down: bool) -> Result<JsValue, JsValue> {
        let pitch = pitch_arg(pitch)?;
        option_to_js(self.session.pointer_enter(pitch, primary_down))
    }

    pub fn pointer_leave(&mut self, pitch: i32) -> Result<JsValue, JsValue> {
        let pitch = pitch_arg(pitch)?;
        option_to_js(self.session.pointer_leave(pitch))
    }

    pub fn adjust_transpose(&mut self, delta: i32) -> i32 {
        self.session.adjust_transpose(delta).semitones()
    }

    #[wasm_bindgen(getter)]
    pub fn transpose(&self) -> i32 {
        self.session.transpose().semitones()
    }

    pub fn set_volume_from_position(&mut self, position: f64) -> i32 {
        self.session.set_volume_from_position(position)
    }

    #[wasm_bindgen(getter)]
    pub fn volume_db(&self) -> i32 {
        self.session.volume_db()
    }

    pub fn volume_thumb_fraction(&self) -> f64 {
        self.session.volume_thumb_fraction()
    }

    pub fn is_active(&self, pitch: i32) -> bool {
        notes::checked_pitch(pitch).is_ok_and(|p| self.session.is_active(p))
    }

    /// Sounding key pitches, ascending.
    pub fn active_notes(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(self.session.active_notes().as_slice())
    }

    #[wasm_bindgen(getter)]
    pub fn history(&self) -> String {
        self.session.history().to_string()
    }

    pub fn clear_history(&mut self) {
        self.session.clear_history();
    }
}
