use super::translation_repository::TranslationRepository;
use crate::domain::translation::Translation;
use async_trait::async_trait;
use serde_json::Value;

const TRANSLATE_PATH: &str = "/translate_a/single";

/// Google Translate implementation of the translation repository, using the
/// public `gtx` web client endpoint.
pub struct GoogleTranslationRepository {
    http_client: reqwest::Client,
    base_url: String,
}

impl GoogleTranslationRepository {
    pub fn new(http_client: reqwest::Client, base_url: String) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Extract the translation from the nested-array response.
    ///
    /// `body[0]` holds one `[translated, original, ...]` row per sentence;
    /// `body[2]` is the detected source language.
    fn parse_translation(body: &Value) -> Result<Translation, String> {
        let sentences = body
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| "Unexpected Google Translate response: missing sentences".to_string())?;

        let text: String = sentences
            .iter()
            .filter_map(|sentence| sentence.get(0).and_then(Value::as_str))
            .collect();

        let detected_source = body
            .get(2)
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Translation {
            text,
            detected_source,
        })
    }
}

#[async_trait]
impl TranslationRepository for GoogleTranslationRepository {
    async fn translate(&self, text: &str, source: &str, dest: &str) -> Result<Translation, String> {
        let start_time = std::time::Instant::now();
        let url = format!("{}{}", self.base_url, TRANSLATE_PATH);

        tracing::debug!(
            url = %url,
            source = source,
            dest = dest,
            text_length = text.len(),
            "Calling Google Translate"
        );

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", dest),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, dest = dest, "Google Translate request failed");
                format!("Google Translate request failed: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                status = status.as_u16(),
                body = %error_text,
                "Google Translate returned an error"
            );
            return Err(format!(
                "Google Translate returned {}: {}",
                status,
                error_text.trim()
            ));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse Google Translate response: {}", e))?;

        let translation = Self::parse_translation(&body)?;

        tracing::debug!(
            provider = "google",
            latency_ms = start_time.elapsed().as_millis(),
            detected_source = ?translation.detected_source,
            translated_length = translation.text.len(),
            "Google Translate completed"
        );

        Ok(translation)
    }
}
