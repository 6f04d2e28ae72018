#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PianoError {
    #[error("unknown pitch name: {0}")]
    UnknownPitchName(String),
    #[error("pitch index {0} is outside the playable range")]
    PitchOutOfRange(i32),
    #[error("pitch {0} is not a white key")]
    NotAWhiteKey(u8),
    #[error("invalid session config: {0}")]
    InvalidConfig(String),
}
