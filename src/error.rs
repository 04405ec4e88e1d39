use crate::domain::language::ResolveError;

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    BadRequest(String),

    #[error("Language resolution failed: {0}")]
    Language(#[from] ResolveError),

    #[error("Translation service error: {0}")]
    Translation(String),

    #[error("Speech synthesis error: {0}")]
    Synthesis(String),

    #[error("No voice available for language: {0}")]
    UnsupportedVoice(String),

    #[error("Audio playback error: {0}")]
    Playback(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Process exit status for this error. Usage mistakes share clap's code.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::BadRequest(_) => 2,
            Self::Language(_)
            | Self::Translation(_)
            | Self::Synthesis(_)
            | Self::UnsupportedVoice(_)
            | Self::Playback(_)
            | Self::Config(_)
            | Self::Io(_) => 1,
        }
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
