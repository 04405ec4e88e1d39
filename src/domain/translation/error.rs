use crate::domain::language::ResolveError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum TranslationServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error(transparent)]
    Language(#[from] ResolveError),
}

impl From<TranslationServiceError> for AppError {
    fn from(err: TranslationServiceError) -> Self {
        match err {
            TranslationServiceError::Invalid(msg) => AppError::BadRequest(msg),
            TranslationServiceError::Language(e) => AppError::Language(e),
            TranslationServiceError::Dependency(msg) => AppError::Translation(msg),
        }
    }
}
