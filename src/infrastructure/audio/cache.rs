use crate::domain::speech::AudioFormat;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Hex characters kept from the digest for file names
const KEY_LENGTH: usize = 32;

/// Directory of synthesized audio, one file per (backend, language, text).
///
/// Files are named by content hash so concurrent invocations never race
/// over a shared counter. Writes land in a temporary file in the same
/// directory and are renamed into place, so a reader sees either nothing
/// or a complete file.
#[derive(Debug, Clone)]
pub struct AudioCache {
    dir: PathBuf,
}

impl AudioCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn key(backend: &str, language: &str, text: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(backend.as_bytes());
        hasher.update([0u8]);
        hasher.update(language.to_lowercase().as_bytes());
        hasher.update([0u8]);
        hasher.update(text.as_bytes());
        let mut key = hex::encode(hasher.finalize());
        key.truncate(KEY_LENGTH);
        key
    }

    pub fn path_for(&self, key: &str, format: AudioFormat) -> PathBuf {
        self.dir.join(format!("{}.{}", key, format.extension()))
    }

    /// Path of a previously stored, non-empty file for `key`.
    pub fn lookup(&self, key: &str, format: AudioFormat) -> Option<PathBuf> {
        let path = self.path_for(key, format);
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() && meta.len() > 0 => Some(path),
            _ => None,
        }
    }

    pub fn store(&self, key: &str, format: AudioFormat, audio: &[u8]) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key, format);

        let mut partial = tempfile::Builder::new()
            .prefix(".partial-")
            .suffix(&format!(".{}", format.extension()))
            .tempfile_in(&self.dir)?;
        partial.write_all(audio)?;
        partial.flush()?;
        partial.persist(&path).map_err(|e| e.error)?;

        tracing::debug!(
            path = %path.display(),
            audio_size = audio.len(),
            "Audio stored in cache"
        );

        Ok(path)
    }
}
