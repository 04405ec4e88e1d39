use super::error::SpeechServiceError;
use super::{SpeechOutcome, SpeechRequest};
use crate::infrastructure::audio::{AudioCache, AudioPlayer};
use crate::infrastructure::repositories::SpeechSynthesizer;
use async_trait::async_trait;
use std::sync::Arc;

pub struct SpeechService {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    player: Arc<dyn AudioPlayer>,
    cache: AudioCache,
}

impl SpeechService {
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesizer>,
        player: Arc<dyn AudioPlayer>,
        cache: AudioCache,
    ) -> Self {
        Self {
            synthesizer,
            player,
            cache,
        }
    }
}

#[async_trait]
pub trait SpeechServiceApi: Send + Sync {
    /// Speak text in a language
    ///
    /// This operation:
    /// - Reuses cached audio for the same backend, language and text
    /// - Otherwise synthesizes and stores it
    /// - Plays it back when requested, waiting for playback to finish
    ///
    /// Returns `Skipped` instead of failing when no backend exists for the
    /// platform
    async fn speak(&self, request: SpeechRequest) -> Result<SpeechOutcome, SpeechServiceError>;
}

#[async_trait]
impl SpeechServiceApi for SpeechService {
    async fn speak(&self, request: SpeechRequest) -> Result<SpeechOutcome, SpeechServiceError> {
        if !self.synthesizer.is_available() {
            tracing::warn!(
                backend = self.synthesizer.name(),
                "No speech backend for this platform, skipping speech"
            );
            return Ok(SpeechOutcome::Skipped {
                reason: "no speech backend for this platform".to_string(),
            });
        }

        let text = request.text.trim();
        if text.is_empty() {
            return Err(SpeechServiceError::Invalid(
                "Text to speak cannot be empty".to_string(),
            ));
        }

        let backend = self.synthesizer.name();
        let format = self.synthesizer.format();
        let key = AudioCache::key(backend, &request.language, text);

        // 1. Check cache first
        let (path, cached) = match self.cache.lookup(&key, format) {
            Some(path) => {
                tracing::info!(
                    path = %path.display(),
                    language = %request.language,
                    "Audio cache hit - skipping synthesis"
                );
                (path, true)
            }
            None => {
                // 2. Synthesize and store
                let audio = self.synthesizer.synthesize(text, &request.language).await?;
                let path = self.cache.store(&key, format, &audio)?;
                tracing::info!(
                    path = %path.display(),
                    backend = backend,
                    audio_size = audio.len(),
                    "Audio synthesized and cached"
                );
                (path, false)
            }
        };

        if !request.play {
            return Ok(SpeechOutcome::Saved { path, cached });
        }

        // 3. Play and wait
        tracing::info!(player = self.player.name(), path = %path.display(), "Playing audio");
        self.player.play(&path).await?;

        Ok(SpeechOutcome::Played { path, cached })
    }
}
