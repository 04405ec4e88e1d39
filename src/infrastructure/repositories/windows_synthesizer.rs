use super::speech_synthesizer::SpeechSynthesizer;
use crate::domain::speech::{AudioFormat, SpeechServiceError};
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;

/// Exit status the script uses when no installed voice matches
const NO_VOICE_EXIT_CODE: i32 = 3;

/// Windows speech through PowerShell and `System.Speech`.
///
/// The first installed voice whose culture has the requested two-letter
/// language is used, and the audio is rendered to a WAV file.
pub struct WindowsSynthesizer {
    program: String,
}

impl WindowsSynthesizer {
    pub fn new() -> Self {
        Self::with_program("powershell")
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Two-letter ISO language of a catalog code, e.g. `zh-tw` -> `zh`.
    pub fn voice_language(language: &str) -> String {
        let primary = language.split('-').next().unwrap_or(language).to_lowercase();
        match primary.as_str() {
            "iw" => "he".to_string(),
            "jw" => "jv".to_string(),
            _ => primary,
        }
    }

    pub fn build_script(text: &str, language: &str, output: &Path) -> String {
        let text = quote(&text.replace(['\r', '\n'], " "));
        let language = quote(&Self::voice_language(language));
        let output = quote(&output.display().to_string());

        format!(
            "Add-Type -AssemblyName System.Speech; \
             $synth = New-Object System.Speech.Synthesis.SpeechSynthesizer; \
             $voice = $synth.GetInstalledVoices() | \
             Where-Object {{ $_.Enabled -and $_.VoiceInfo.Culture.TwoLetterISOLanguageName -eq {language} }} | \
             Select-Object -First 1; \
             if (-not $voice) {{ $synth.Dispose(); exit {code} }}; \
             $synth.SelectVoice($voice.VoiceInfo.Name); \
             $synth.SetOutputToWaveFile({output}); \
             $synth.Speak({text}); \
             $synth.Dispose()",
            language = language,
            code = NO_VOICE_EXIT_CODE,
            output = output,
            text = text,
        )
    }
}

impl Default for WindowsSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechSynthesizer for WindowsSynthesizer {
    fn name(&self) -> &str {
        "windows"
    }

    fn format(&self) -> AudioFormat {
        AudioFormat::Wav
    }

    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, SpeechServiceError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SpeechServiceError::Invalid(
                "Text to speak cannot be empty".to_string(),
            ));
        }

        // Removed on drop, once the bytes have been read back
        let output = tempfile::Builder::new()
            .prefix("glt-")
            .suffix(".wav")
            .tempfile()?;
        let script = Self::build_script(text, language, output.path());

        tracing::info!(
            language = language,
            text_length = text.len(),
            "Starting Windows speech synthesis"
        );

        let result = tokio::process::Command::new(&self.program)
            .args(["-NoProfile", "-NonInteractive", "-Command", &script])
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                SpeechServiceError::Synthesis(format!("failed to start {}: {}", self.program, e))
            })?;

        match result.status.code() {
            Some(0) => {}
            Some(NO_VOICE_EXIT_CODE) => {
                return Err(SpeechServiceError::UnsupportedVoice(language.to_string()));
            }
            _ => {
                let stderr = String::from_utf8_lossy(&result.stderr);
                tracing::error!(
                    status = ?result.status.code(),
                    stderr = %stderr.trim(),
                    "Windows speech synthesis failed"
                );
                return Err(SpeechServiceError::Synthesis(format!(
                    "System.Speech exited with {}: {}",
                    result.status,
                    stderr.trim()
                )));
            }
        }

        let audio = tokio::fs::read(output.path()).await?;
        if audio.is_empty() {
            return Err(SpeechServiceError::Synthesis(
                "System.Speech produced no audio".to_string(),
            ));
        }

        tracing::info!(
            provider = "windows",
            audio_size_bytes = audio.len(),
            "TTS synthesis completed"
        );

        Ok(audio)
    }
}

/// PowerShell single-quoted literal
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
