use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::config::SessionConfig;
use crate::engine::{normalize_identifier, resolve_note_event, transpose_pitch, RawKey, TransposeOffset};
use crate::error::PianoError;
use crate::keymap::{label_for_pitch, resolve_key};
use crate::notes::{pitch_name, PitchIndex};

/// Start sounding `pitch_name`; highlight `key_pitch`.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct NoteOn {
    pub key_pitch: PitchIndex,
    pub pitch_index: PitchIndex,
    pub pitch_name: &'static str,
    pub display_char: Option<&'static str>,
}

/// Stop sounding `pitch_name`; clear the highlight on `key_pitch`.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct NoteOff {
    pub key_pitch: PitchIndex,
    pub pitch_name: &'static str,
}

/// Mutable state of one piano on screen.
///
/// Active notes are keyed by the pitch of the key pressed, before
/// transposition, so highlighting follows the keys and not the sound. Each
/// remembers the pitch it started with, so a note-off matches its note-on
/// even if the transpose changed while the key was down.
pub struct PianoSession {
    config: SessionConfig,
    held_keys: HashSet<String>,
    pointer_pressed: HashSet<PitchIndex>,
    active_notes: BTreeMap<PitchIndex, PitchIndex>,
    transpose: TransposeOffset,
    volume_db: i32,
    history: String,
    audio_ready: bool,
}

impl Default for PianoSession {
    fn default() -> Self {
        PianoSession::from_valid_config(SessionConfig::default())
    }
}

impl PianoSession {
    pub fn new(config: SessionConfig) -> Result<Self, PianoError> {
        config.validate()?;
        Ok(PianoSession::from_valid_config(config))
    }

    fn from_valid_config(config: SessionConfig) -> Self {
        PianoSession {
            held_keys: HashSet::new(),
            pointer_pressed: HashSet::new(),
            active_notes: BTreeMap::new(),
            transpose: TransposeOffset::new(config.initial_transpose),
            volume_db: config.initial_volume_db,
            history: String::new(),
            audio_ready: false,
            config,
        }
    }

    /// Samples finished loading; notes sound from now on.
    pub fn mark_audio_ready(&mut self) {
        log::debug!("audio ready, volume {}dB", self.volume_db);
        self.audio_ready = true;
    }

    pub fn is_audio_ready(&self) -> bool {
        self.audio_ready
    }

    /// Handle a key press. Returns `None` for keys outside the instrument,
    /// for OS key-repeat of a key already held, and while audio is loading.
    pub fn key_down(&mut self, raw: &RawKey<'_>, shift: bool) -> Option<NoteOn> {
        let resolved = resolve_note_event(raw, shift, self.transpose)?;
        let identifier = normalize_identifier(raw);
        if self.held_keys.contains(&*identifier) {
            return None;
        }
        log::trace!("key down {} -> {}", identifier, resolved.pitch_name);
        self.held_keys.insert(identifier.into_owned());
        self.press(resolved.key_pitch)
    }

    /// Handle a key release. Both pitches of the key are released whichever
    /// one was sounding, so a release with a different shift state still
    /// clears the note.
    pub fn key_up(&mut self, raw: &RawKey<'_>) -> Vec<NoteOff> {
        let identifier = normalize_identifier(raw);
        let Some(binding) = resolve_key(&identifier) else {
            return Vec::new();
        };
        log::trace!("key up {}", identifier);
        self.held_keys.remove(&*identifier);
        binding.pitches().map(|p| self.release(p)).collect()
    }

    pub fn pointer_down(&mut self, pitch: PitchIndex) -> Option<NoteOn> {
        self.pointer_pressed.insert(pitch);
        self.press(pitch)
    }

    pub fn pointer_up(&mut self, pitch: PitchIndex) -> NoteOff {
        self.pointer_pressed.remove(&pitch);
        self.release(pitch)
    }

    /// Dragging onto a key with the primary button held presses it.
    pub fn pointer_enter(&mut self, pitch: PitchIndex, primary_down: bool) -> Option<NoteOn> {
        if primary_down {
            self.pointer_down(pitch)
        } else {
            None
        }
    }

    /// Dragging off a key releases it, but only if the pointer pressed it.
    pub fn pointer_leave(&mut self, pitch: PitchIndex) -> Option<NoteOff> {
        if self.pointer_pressed.remove(&pitch) {
            Some(self.release(pitch))
        } else {
            None
        }
    }

    fn press(&mut self, key_pitch: PitchIndex) -> Option<NoteOn> {
        let shifted = transpose_pitch(key_pitch, self.transpose);
        self.active_notes.insert(key_pitch, shifted);
        if !self.audio_ready {
            return None;
        }

        let display_char = label_for_pitch(key_pitch);
        if let Some(label) = display_char {
            self.push_history(label);
        }
        Some(NoteOn {
            key_pitch,
            pitch_index: shifted,
            pitch_name: pitch_name(shifted),
            display_char,
        })
    }

    /// Pitches that are not sounding (the other half of a key) get a
    /// note-off under the current transpose.
    fn release(&mut self, key_pitch: PitchIndex) -> NoteOff {
        let sounding = self
            .active_notes
            .remove(&key_pitch)
            .unwrap_or_else(|| transpose_pitch(key_pitch, self.transpose));
        NoteOff {
            key_pitch,
            pitch_name: pitch_name(sounding),
        }
    }

    fn push_history(&mut self, label: &str) {
        self.history.push_str(label);
        if let Some(limit) = self.config.history_limit {
            let excess = self.history.chars().count().saturating_sub(limit);
            if excess > 0 {
                let cut = self
                    .history
                    .char_indices()
                    .nth(excess)
                    .map_or(self.history.len(), |(i, _)| i);
                self.history.drain(..cut);
            }
        }
    }

    /// Step the transpose by `delta` semitones. Ignored until audio is ready.
    pub fn adjust_transpose(&mut self, delta: i32) -> TransposeOffset {
        if self.audio_ready {
            self.transpose = self.transpose.adjust(delta);
            log::debug!("transpose {}", self.transpose.semitones());
        }
        self.transpose
    }

    pub fn transpose(&self) -> TransposeOffset {
        self.transpose
    }

    /// Map a slider position (0 = bottom, 1 = top) to the nearest whole dB step.
    pub fn set_volume_from_position(&mut self, position: f64) -> i32 {
        let position = if position.is_nan() { 0.0 } else { position.clamp(0.0, 1.0) };
        let step = (position * (self.config.volume_steps() - 1) as f64).round() as i32;
        self.set_volume_db(self.config.volume_min_db + step)
    }

    pub fn set_volume_db(&mut self, db: i32) -> i32 {
        let db = db.clamp(self.config.volume_min_db, self.config.volume_max_db);
        if db != self.volume_db {
            log::debug!("volume {}dB", db);
        }
        self.volume_db = db;
        db
    }

    pub fn volume_db(&self) -> i32 {
        self.volume_db
    }

    /// Where the slider thumb sits for the current volume, 0.0 to 1.0.
    pub fn volume_thumb_fraction(&self) -> f64 {
        (self.volume_db - self.config.volume_min_db) as f64 / (self.config.volume_steps() - 1) as f64
    }

    pub fn is_active(&self, pitch: PitchIndex) -> bool {
        self.active_notes.contains_key(&pitch)
    }

    /// Sounding key pitches in ascending order.
    pub fn active_notes(&self) -> Vec<PitchIndex> {
        self.active_notes.keys().copied().collect()
    }

    pub fn is_held(&self, identifier: &str) -> bool {
        self.held_keys.contains(identifier)
    }

    pub fn history(&self) -> &str {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
