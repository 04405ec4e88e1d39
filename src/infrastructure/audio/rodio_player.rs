use super::player::AudioPlayer;
use crate::domain::speech::SpeechServiceError;
use async_trait::async_trait;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Output device held for one playback. Dropping it closes the stream.
struct OutputDevice {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl OutputDevice {
    fn open() -> Result<Self, SpeechServiceError> {
        let (stream, handle) = OutputStream::try_default()
            .map_err(|e| SpeechServiceError::Playback(format!("no audio output device: {}", e)))?;
        tracing::debug!("Audio output opened");
        Ok(Self {
            _stream: stream,
            handle,
        })
    }
}

impl Drop for OutputDevice {
    fn drop(&mut self) {
        tracing::debug!("Audio output released");
    }
}

/// In-process playback through the default output device.
#[derive(Debug, Default, Clone)]
pub struct RodioPlayer;

impl RodioPlayer {
    pub fn new() -> Self {
        Self
    }

    fn play_blocking(path: &Path) -> Result<(), SpeechServiceError> {
        let device = OutputDevice::open()?;

        let file = File::open(path).map_err(|e| {
            SpeechServiceError::Playback(format!("cannot open {}: {}", path.display(), e))
        })?;
        let source = Decoder::new(BufReader::new(file))
            .map_err(|e| SpeechServiceError::Playback(format!("cannot decode audio: {}", e)))?;
        let sink = Sink::try_new(&device.handle)
            .map_err(|e| SpeechServiceError::Playback(e.to_string()))?;

        sink.append(source);
        while !sink.empty() {
            std::thread::sleep(POLL_INTERVAL);
        }

        Ok(())
    }
}

#[async_trait]
impl AudioPlayer for RodioPlayer {
    fn name(&self) -> &str {
        "rodio"
    }

    async fn play(&self, path: &Path) -> Result<(), SpeechServiceError> {
        let path: PathBuf = path.to_path_buf();
        tracing::debug!(path = %path.display(), "Starting audio playback");

        // OutputStream is not Send, so the whole playback stays on one
        // blocking thread
        tokio::task::spawn_blocking(move || Self::play_blocking(&path))
            .await
            .map_err(|e| SpeechServiceError::Playback(format!("playback task failed: {}", e)))?
    }
}
