use serde::{Deserialize, Serialize};

use crate::engine::MAX_TRANSPOSE;
use crate::error::PianoError;

/// Startup settings for a [`PianoSession`](crate::session::PianoSession).
/// Every field is optional when deserialized from JS.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    pub initial_volume_db: i32,
    pub volume_min_db: i32,
    pub volume_max_db: i32,
    pub initial_transpose: i32,
    /// Maximum number of characters kept in the on-screen note history.
    pub history_limit: Option<usize>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            initial_volume_db: -7,
            volume_min_db: -15,
            volume_max_db: -4,
            initial_transpose: 0,
            history_limit: None,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), PianoError> {
        if self.volume_min_db >= self.volume_max_db {
            return Err(PianoError::InvalidConfig(format!(
                "volume_min_db ({}) must be below volume_max_db ({})",
                self.volume_min_db, self.volume_max_db
            )));
        }
        if !(self.volume_min_db..=self.volume_max_db).contains(&self.initial_volume_db) {
            return Err(PianoError::InvalidConfig(format!(
                "initial_volume_db ({}) outside {}..={}",
                self.initial_volume_db, self.volume_min_db, self.volume_max_db
            )));
        }
        if self.initial_transpose.abs() > MAX_TRANSPOSE {
            return Err(PianoError::InvalidConfig(format!(
                "initial_transpose ({}) exceeds one octave",
                self.initial_transpose
            )));
        }
        Ok(())
    }

    /// Number of discrete volume positions on the slider, both ends included.
    pub fn volume_steps(&self) -> i32 {
        self.volume_max_db - self.volume_min_db + 1
    }
}
