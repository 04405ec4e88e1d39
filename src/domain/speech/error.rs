use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SpeechServiceError {
    #[error("synthesis failed: {0}")]
    Synthesis(String),
    #[error("no voice available for language '{0}'")]
    UnsupportedVoice(String),
    #[error("speech is not supported on {0}")]
    UnsupportedPlatform(String),
    #[error("playback failed: {0}")]
    Playback(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("audio cache error: {0}")]
    Cache(#[from] std::io::Error),
}

impl From<SpeechServiceError> for AppError {
    fn from(err: SpeechServiceError) -> Self {
        match err {
            SpeechServiceError::Synthesis(msg) => AppError::Synthesis(msg),
            SpeechServiceError::UnsupportedVoice(lang) => AppError::UnsupportedVoice(lang),
            SpeechServiceError::UnsupportedPlatform(platform) => {
                AppError::Synthesis(format!("speech is not supported on {}", platform))
            }
            SpeechServiceError::Playback(msg) => AppError::Playback(msg),
            SpeechServiceError::Invalid(msg) => AppError::BadRequest(msg),
            SpeechServiceError::Cache(e) => AppError::Io(e),
        }
    }
}
