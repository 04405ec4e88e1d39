use crate::domain::translation::Translation;
use async_trait::async_trait;

/// Repository for machine translation.
/// Abstracts the underlying provider (Google Translate, DeepL, etc.)
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    /// Translate `text` from `source` into `dest`
    ///
    /// # Arguments
    /// * `text` - Non-empty text to translate
    /// * `source` - Source language code, or `auto` to let the provider detect it
    /// * `dest` - Target language code from the catalog
    ///
    /// # Errors
    /// Returns error if the provider is unreachable or answers with something
    /// that is not a translation
    async fn translate(&self, text: &str, source: &str, dest: &str) -> Result<Translation, String>;
}
