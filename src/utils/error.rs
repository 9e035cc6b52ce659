use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("word list must contain at least one word")]
    EmptyWordList,

    #[error("fade delay {fade_ms}ms must be shorter than the rotation period {period_ms}ms")]
    FadeExceedsPeriod { fade_ms: u32, period_ms: u32 },

    #[error("timer error: {0}")]
    Timer(String),

    #[error("unrecognized form value: {0}")]
    UnrecognizedValue(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
