use super::speech_synthesizer::SpeechSynthesizer;
use crate::domain::speech::{AudioFormat, SpeechServiceError};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

/// Google's TTS endpoint rejects requests longer than 100 characters
const MAX_BATCH_SIZE: usize = 100;

const TTS_PATH: &str = "/translate_tts";

/// Languages Google TTS has a voice for, as sent in `tl`
const VOICE_LANGUAGES: &[&str] = &[
    "af", "am", "ar", "bg", "bn", "bs", "ca", "cs", "cy", "da", "de", "el", "en", "es", "et",
    "eu", "fi", "fr", "gl", "gu", "ha", "he", "hi", "hr", "hu", "id", "is", "it", "ja", "jw",
    "km", "kn", "ko", "la", "lt", "lv", "ml", "mr", "ms", "my", "ne", "nl", "no", "pa", "pl",
    "pt", "ro", "ru", "si", "sk", "sq", "sr", "su", "sv", "sw", "ta", "te", "th", "tl", "tr",
    "uk", "ur", "vi", "yue", "zh-CN", "zh-TW",
];

static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?;:,。！？；，、]+\s*").expect("sentence pattern is valid"));

/// Google Translate text-to-speech over HTTP, the default backend on Linux.
pub struct LinuxSynthesizer {
    http_client: reqwest::Client,
    base_url: String,
    slow: bool,
}

impl LinuxSynthesizer {
    pub fn new(http_client: reqwest::Client, base_url: String, slow: bool) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            slow,
        }
    }

    /// Voice language for a catalog code, e.g. `zh-cn` -> `zh-CN`.
    pub fn voice_language(language: &str) -> Option<&'static str> {
        let language = match language.to_lowercase().as_str() {
            "iw" => "he".to_string(),
            "zh" => "zh-cn".to_string(),
            other => other.to_string(),
        };
        VOICE_LANGUAGES
            .iter()
            .copied()
            .find(|voice| voice.eq_ignore_ascii_case(&language))
    }

    /// Split text into batches that respect sentence boundaries, then word
    /// boundaries. Each batch is at most MAX_BATCH_SIZE characters.
    pub fn split_into_batches(text: &str) -> Vec<String> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }
        if char_len(text) <= MAX_BATCH_SIZE {
            return vec![text.to_string()];
        }

        let mut batches = Vec::new();
        let mut current_batch = String::new();

        for sentence in sentences(text) {
            for fragment in fit_fragments(sentence) {
                if !current_batch.is_empty()
                    && char_len(&current_batch) + char_len(&fragment) > MAX_BATCH_SIZE
                {
                    push_batch(&mut batches, &current_batch);
                    current_batch.clear();
                }
                current_batch.push_str(&fragment);
            }
        }

        push_batch(&mut batches, &current_batch);
        batches
    }

    /// Call Google TTS for a single batch
    async fn call_google(
        &self,
        text: &str,
        language: &str,
        index: usize,
        total: usize,
    ) -> Result<Vec<u8>, SpeechServiceError> {
        let url = format!("{}{}", self.base_url, TTS_PATH);
        let speed = if self.slow { "0.24" } else { "1" };
        let index_param = index.to_string();
        let total_param = total.to_string();
        let length_param = char_len(text).to_string();

        tracing::debug!(
            language = language,
            batch_index = index,
            batch_count = total,
            text_length = text.len(),
            slow = self.slow,
            "Calling Google TTS"
        );

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language),
                ("q", text),
                ("idx", index_param.as_str()),
                ("total", total_param.as_str()),
                ("textlen", length_param.as_str()),
                ("ttsspeed", speed),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, language = language, "Google TTS request failed");
                SpeechServiceError::Synthesis(format!("Google TTS request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(
                status = status.as_u16(),
                language = language,
                batch_index = index,
                "Google TTS returned an error"
            );
            return Err(SpeechServiceError::Synthesis(format!(
                "Google TTS returned {}",
                status
            )));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SpeechServiceError::Synthesis(format!("Failed to read audio: {}", e)))?;

        if audio.is_empty() {
            return Err(SpeechServiceError::Synthesis(
                "Google TTS returned no audio".to_string(),
            ));
        }

        Ok(audio.to_vec())
    }
}

#[async_trait]
impl SpeechSynthesizer for LinuxSynthesizer {
    fn name(&self) -> &str {
        "google"
    }

    fn format(&self) -> AudioFormat {
        AudioFormat::Mp3
    }

    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, SpeechServiceError> {
        let start_time = std::time::Instant::now();

        let voice = Self::voice_language(language)
            .ok_or_else(|| SpeechServiceError::UnsupportedVoice(language.to_string()))?;

        let batches = Self::split_into_batches(text);
        if batches.is_empty() {
            return Err(SpeechServiceError::Invalid(
                "Text to speak cannot be empty".to_string(),
            ));
        }

        tracing::info!(
            language = voice,
            batch_count = batches.len(),
            text_length = text.len(),
            "Starting Google TTS synthesis"
        );

        // MP3 frames concatenate cleanly, so batches are merged in order
        let mut merged_audio = Vec::new();
        for (index, batch) in batches.iter().enumerate() {
            let audio = self.call_google(batch, voice, index, batches.len()).await?;
            merged_audio.extend(audio);
        }

        tracing::info!(
            provider = "google",
            latency_ms = start_time.elapsed().as_millis(),
            batch_count = batches.len(),
            audio_size_bytes = merged_audio.len(),
            "TTS synthesis completed"
        );

        Ok(merged_audio)
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn push_batch(batches: &mut Vec<String>, batch: &str) {
    let batch = batch.trim();
    if !batch.is_empty() {
        batches.push(batch.to_string());
    }
}

/// Sentences with their trailing punctuation and whitespace kept.
fn sentences(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut last_end = 0;
    for mat in SENTENCE_END.find_iter(text) {
        pieces.push(&text[last_end..mat.end()]);
        last_end = mat.end();
    }
    if last_end < text.len() {
        pieces.push(&text[last_end..]);
    }
    pieces
}

/// Break a sentence into pieces of at most MAX_BATCH_SIZE characters,
/// preferring whitespace and cutting inside a word only when it is longer
/// than a whole batch.
fn fit_fragments(sentence: &str) -> Vec<String> {
    if char_len(sentence) <= MAX_BATCH_SIZE {
        return vec![sentence.to_string()];
    }

    let mut fragments = Vec::new();
    for word in sentence.split_inclusive(char::is_whitespace) {
        if char_len(word) <= MAX_BATCH_SIZE {
            fragments.push(word.to_string());
        } else {
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(MAX_BATCH_SIZE) {
                fragments.push(chunk.iter().collect());
            }
        }
    }
    fragments
}
