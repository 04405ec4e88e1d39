use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_TRANSLATE_URL: &str = "https://translate.googleapis.com";
pub const DEFAULT_TTS_URL: &str = "https://translate.google.com";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub translate_url: String,
    pub tts_url: String,
    pub audio_dir: PathBuf,
    pub http_timeout_secs: u64,
    pub speech_backend: SpeechBackend,
    /// Player binary overriding the platform default
    pub player: Option<String>,
    pub tts_slow: bool,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Which synthesizer to build. `Auto` follows the detected platform.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SpeechBackend {
    Auto,
    Google,
    Windows,
    None,
}

impl FromStr for SpeechBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" | "" => Ok(SpeechBackend::Auto),
            "google" | "linux" => Ok(SpeechBackend::Google),
            "windows" | "sapi" => Ok(SpeechBackend::Windows),
            "none" | "off" => Ok(SpeechBackend::None),
            other => Err(anyhow!(
                "unknown speech backend '{}' (expected auto, google, windows or none)",
                other
            )),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translate_url: DEFAULT_TRANSLATE_URL.to_string(),
            tts_url: DEFAULT_TTS_URL.to_string(),
            audio_dir: default_audio_dir(),
            http_timeout_secs: 10,
            speech_backend: SpeechBackend::Auto,
            player: None,
            tts_slow: false,
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Config::default();
        let config = Config {
            translate_url: env::var("GLT_TRANSLATE_URL").unwrap_or(defaults.translate_url),
            tts_url: env::var("GLT_TTS_URL").unwrap_or(defaults.tts_url),
            audio_dir: env::var_os("GLT_AUDIO_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.audio_dir),
            http_timeout_secs: env::var("GLT_HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| defaults.http_timeout_secs.to_string())
                .parse()
                .context("GLT_HTTP_TIMEOUT_SECS must be a whole number of seconds")?,
            speech_backend: env::var("GLT_SPEECH_BACKEND")
                .unwrap_or_else(|_| "auto".to_string())
                .parse()?,
            player: env::var("GLT_PLAYER").ok().filter(|p| !p.trim().is_empty()),
            tts_slow: env::var("GLT_TTS_SLOW")
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(false),
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
        };

        Ok(config)
    }
}

fn default_audio_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(env::temp_dir)
        .join("glt")
        .join("audio")
}
