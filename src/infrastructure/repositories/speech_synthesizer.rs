use super::{LinuxSynthesizer, NullSynthesizer, WindowsSynthesizer};
use crate::domain::speech::{AudioFormat, Platform, SpeechServiceError};
use crate::infrastructure::config::{Config, SpeechBackend};
use async_trait::async_trait;
use std::sync::Arc;

/// Turns text into audio for a language.
///
/// One implementation is chosen at startup by [`synthesizer_for`]; callers
/// never branch on the platform themselves.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Stable backend name, part of the audio cache key
    fn name(&self) -> &str;

    fn format(&self) -> AudioFormat;

    fn is_available(&self) -> bool {
        true
    }

    /// Synthesize `text` in `language` (a catalog code)
    ///
    /// # Errors
    /// `UnsupportedVoice` when no voice speaks `language`, `Synthesis` when
    /// the backend fails
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, SpeechServiceError>;
}

/// Pick the synthesizer for this process.
pub fn synthesizer_for(
    platform: &Platform,
    config: &Config,
    http_client: reqwest::Client,
) -> Arc<dyn SpeechSynthesizer> {
    let backend = match config.speech_backend {
        SpeechBackend::Auto => match platform {
            Platform::Linux => SpeechBackend::Google,
            Platform::Windows => SpeechBackend::Windows,
            Platform::MacOs | Platform::Other(_) => SpeechBackend::None,
        },
        explicit => explicit,
    };

    tracing::debug!(
        platform = %platform,
        configured = ?config.speech_backend,
        selected = ?backend,
        "Speech backend selected"
    );

    match backend {
        SpeechBackend::Google => Arc::new(LinuxSynthesizer::new(
            http_client,
            config.tts_url.clone(),
            config.tts_slow,
        )),
        SpeechBackend::Windows => Arc::new(WindowsSynthesizer::new()),
        SpeechBackend::None | SpeechBackend::Auto => {
            Arc::new(NullSynthesizer::new(platform.to_string()))
        }
    }
}
