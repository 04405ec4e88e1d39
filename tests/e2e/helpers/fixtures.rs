use async_trait::async_trait;
use glt::domain::speech::SpeechServiceError;
use glt::infrastructure::audio::AudioPlayer;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Player that records what it was asked to play instead of opening a device
#[derive(Default)]
pub struct RecordingPlayer {
    pub played: Mutex<Vec<PathBuf>>,
}

impl RecordingPlayer {
    pub fn played(&self) -> Vec<PathBuf> {
        self.played.lock().unwrap().clone()
    }
}

#[async_trait]
impl AudioPlayer for RecordingPlayer {
    fn name(&self) -> &str {
        "recording"
    }

    async fn play(&self, path: &Path) -> Result<(), SpeechServiceError> {
        assert!(path.is_file(), "played file should exist: {}", path.display());
        self.played.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}
