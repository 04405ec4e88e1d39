use super::speech_synthesizer::SpeechSynthesizer;
use crate::domain::speech::{AudioFormat, SpeechServiceError};
use async_trait::async_trait;

/// Stand-in for platforms without a speech backend
pub struct NullSynthesizer {
    platform: String,
}

impl NullSynthesizer {
    pub fn new(platform: String) -> Self {
        Self { platform }
    }
}

#[async_trait]
impl SpeechSynthesizer for NullSynthesizer {
    fn name(&self) -> &str {
        "none"
    }

    fn format(&self) -> AudioFormat {
        AudioFormat::Mp3
    }

    fn is_available(&self) -> bool {
        false
    }

    async fn synthesize(&self, _text: &str, _language: &str) -> Result<Vec<u8>, SpeechServiceError> {
        Err(SpeechServiceError::UnsupportedPlatform(self.platform.clone()))
    }
}
