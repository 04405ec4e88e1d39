use std::io::Write;
use std::sync::Arc;

use super::cli::TranslateCommand;
use crate::{
    domain::{
        speech::{SpeechOutcome, SpeechRequest, SpeechServiceApi},
        translation::{TranslationRequest, TranslationResult, TranslationServiceApi},
    },
    error::{AppError, AppResult},
};

/// Matches scoring below this are called out on stderr
const LOW_CONFIDENCE_SCORE: f64 = 50.0;

pub struct TranslateController {
    translation_service: Arc<dyn TranslationServiceApi>,
    speech_service: Arc<dyn SpeechServiceApi>,
}

impl TranslateController {
    pub fn new(
        translation_service: Arc<dyn TranslationServiceApi>,
        speech_service: Arc<dyn SpeechServiceApi>,
    ) -> Self {
        Self {
            translation_service,
            speech_service,
        }
    }

    /// `glt <lang> [-s] <text...>` - translate, print, optionally speak
    pub async fn translate(
        &self,
        command: TranslateCommand,
        out: &mut (dyn Write + Send),
    ) -> AppResult<TranslationResult> {
        // Validate input
        if command.text.trim().is_empty() {
            return Err(AppError::BadRequest("Text cannot be empty".to_string()));
        }

        // Echo the resolved language before the network call so a wrong
        // guess is visible
        let language = self
            .translation_service
            .resolve_language(&command.language)?;
        if language.score < LOW_CONFIDENCE_SCORE {
            tracing::warn!(
                query = %language.query,
                code = %language.code,
                score = language.score,
                "Low confidence language match"
            );
        }
        writeln!(out, "Lang: {}", language.code)?;
        out.flush()?;

        let result = self
            .translation_service
            .translate(TranslationRequest {
                language: command.language,
                text: command.text,
                source: command.source,
            })
            .await?;

        writeln!(out, "Text: {}", result.text)?;
        out.flush()?;

        if command.speak {
            let outcome = self
                .speech_service
                .speak(SpeechRequest {
                    text: result.text.clone(),
                    language: result.language.code.clone(),
                    play: command.play,
                })
                .await?;

            match outcome {
                SpeechOutcome::Played { path, cached } => {
                    tracing::debug!(path = %path.display(), cached, "Speech played");
                }
                SpeechOutcome::Saved { path, .. } => {
                    writeln!(out, "Audio: {}", path.display())?;
                }
                SpeechOutcome::Skipped { reason } => {
                    writeln!(out, "Speech skipped: {}", reason)?;
                }
            }
        }

        Ok(result)
    }
}
