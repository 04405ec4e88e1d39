pub mod error;
pub mod platform;
pub mod service;

pub use error::SpeechServiceError;
pub use platform::Platform;
pub use service::{SpeechService, SpeechServiceApi};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Container format produced by a synthesizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    Mp3,
    Wav,
}

impl AudioFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Wav => "wav",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechRequest {
    pub text: String,
    pub language: String,
    /// Play the audio once it is available; otherwise only cache it
    pub play: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SpeechOutcome {
    Played { path: PathBuf, cached: bool },
    Saved { path: PathBuf, cached: bool },
    Skipped { reason: String },
}
