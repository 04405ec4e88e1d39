pub mod error;
pub mod service;

pub use error::TranslationServiceError;
pub use service::{TranslationService, TranslationServiceApi};

use crate::domain::language::ResolvedLanguage;
use serde::{Deserialize, Serialize};

/// Source language sent when the caller does not name one.
pub const AUTO_DETECT: &str = "auto";

/// A translation request as typed by the user: both languages are raw,
/// unresolved tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub language: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// What the translation provider returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_source: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TranslationResult {
    pub language: ResolvedLanguage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ResolvedLanguage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_source: Option<String>,
    pub original_text: String,
    pub text: String,
}
