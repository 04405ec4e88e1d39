use super::error::TranslationServiceError;
use super::{TranslationRequest, TranslationResult, AUTO_DETECT};
use crate::domain::language::{LanguageCatalog, LanguageResolver, ResolvedLanguage};
use crate::infrastructure::repositories::TranslationRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub struct TranslationService {
    catalog: &'static LanguageCatalog,
    resolver: LanguageResolver,
    translation_repo: Arc<dyn TranslationRepository>,
}

impl TranslationService {
    pub fn new(
        catalog: &'static LanguageCatalog,
        resolver: LanguageResolver,
        translation_repo: Arc<dyn TranslationRepository>,
    ) -> Self {
        Self {
            catalog,
            resolver,
            translation_repo,
        }
    }

    pub fn catalog(&self) -> &'static LanguageCatalog {
        self.catalog
    }
}

#[async_trait]
pub trait TranslationServiceApi: Send + Sync {
    /// Map a raw language token to a catalog code. Never fails for lack of
    /// a good match; the best guess is always returned.
    fn resolve_language(&self, query: &str) -> Result<ResolvedLanguage, TranslationServiceError>;

    /// Translate text into the language named by the request
    ///
    /// This operation:
    /// - Rejects empty text
    /// - Resolves the target (and optional source) language
    /// - Calls the translation provider
    async fn translate(
        &self,
        request: TranslationRequest,
    ) -> Result<TranslationResult, TranslationServiceError>;
}

#[async_trait]
impl TranslationServiceApi for TranslationService {
    fn resolve_language(&self, query: &str) -> Result<ResolvedLanguage, TranslationServiceError> {
        let result = self.catalog.resolve_with(&self.resolver, query)?;
        let resolved = ResolvedLanguage::from_match(query, result, self.catalog);

        tracing::debug!(
            query = %resolved.query,
            code = %resolved.code,
            name = ?resolved.name,
            score = resolved.score,
            "Language resolved"
        );

        Ok(resolved)
    }

    async fn translate(
        &self,
        request: TranslationRequest,
    ) -> Result<TranslationResult, TranslationServiceError> {
        let text = request.text.trim();
        if text.is_empty() {
            return Err(TranslationServiceError::Invalid(
                "Text cannot be empty".to_string(),
            ));
        }

        // 1. Resolve languages before any network call
        let language = self.resolve_language(&request.language)?;
        let source = request
            .source
            .as_deref()
            .map(|query| self.resolve_language(query))
            .transpose()?;
        let source_code = source.as_ref().map_or(AUTO_DETECT, |s| s.code.as_str());

        tracing::info!(
            source = source_code,
            dest = %language.code,
            text_length = text.len(),
            "Translation request"
        );

        // 2. Call provider
        let translation = self
            .translation_repo
            .translate(text, source_code, &language.code)
            .await
            .map_err(TranslationServiceError::Dependency)?;

        let translated = translation.text.trim().to_string();
        if translated.is_empty() {
            return Err(TranslationServiceError::Dependency(
                "translation service returned no text".to_string(),
            ));
        }

        tracing::info!(
            dest = %language.code,
            detected_source = ?translation.detected_source,
            translated_length = translated.len(),
            "Translation completed"
        );

        Ok(TranslationResult {
            language,
            source,
            detected_source: translation.detected_source,
            original_text: text.to_string(),
            text: translated,
        })
    }
}
