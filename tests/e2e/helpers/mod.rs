use glt::controllers::{Cli, Command, TranslateCommand, TranslateController};
use glt::domain::language::{EmptyQueryPolicy, LanguageCatalog, LanguageResolver};
use glt::domain::speech::{Platform, SpeechService};
use glt::domain::translation::TranslationService;
use glt::error::AppResult;
use glt::infrastructure::audio::AudioCache;
use glt::infrastructure::config::{Config, LogFormat, SpeechBackend};
use glt::infrastructure::http::create_http_client;
use glt::infrastructure::repositories::{synthesizer_for, GoogleTranslationRepository};
use std::sync::Arc;
use tempfile::TempDir;

pub mod fixtures;
pub mod mock_google;

use clap::Parser;
use fixtures::RecordingPlayer;
use mock_google::MockGoogle;

pub struct TestContext {
    pub google: MockGoogle,
    pub config: Config,
    pub player: Arc<RecordingPlayer>,
    pub controller: TranslateController,
    _audio_dir: TempDir,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::with_backend(SpeechBackend::Google, false).await
    }

    pub async fn with_backend(speech_backend: SpeechBackend, tts_slow: bool) -> Self {
        let google = MockGoogle::start().await;
        let audio_dir = tempfile::tempdir().expect("Failed to create audio dir");

        // Create test configuration
        let config = Config {
            translate_url: google.base_url.clone(),
            tts_url: google.base_url.clone(),
            audio_dir: audio_dir.path().to_path_buf(),
            http_timeout_secs: 5,
            speech_backend,
            player: None,
            tts_slow,
            log_format: LogFormat::Pretty,
        };

        let http_client = create_http_client(config.http_timeout_secs).expect("Failed to build client");
        let player = Arc::new(RecordingPlayer::default());

        let translation_service = Arc::new(TranslationService::new(
            LanguageCatalog::global(),
            LanguageResolver::with_policy(EmptyQueryPolicy::Reject),
            Arc::new(GoogleTranslationRepository::new(
                http_client.clone(),
                config.translate_url.clone(),
            )),
        ));
        let speech_service = Arc::new(SpeechService::new(
            synthesizer_for(&Platform::Linux, &config, http_client),
            player.clone(),
            AudioCache::new(config.audio_dir.clone()),
        ));

        Self {
            google,
            player,
            controller: TranslateController::new(translation_service, speech_service),
            config,
            _audio_dir: audio_dir,
        }
    }

    /// Run a command line as the binary would and capture stdout
    pub async fn run(&self, args: &[&str]) -> (AppResult<()>, String) {
        let cli = Cli::try_parse_from(std::iter::once("glt").chain(args.iter().copied()))
            .expect("arguments should parse");
        let command = match cli.action() {
            Command::Translate(command) => command,
            Command::ListLanguages => panic!("use LanguagesController for -l"),
        };
        self.translate(command).await
    }

    pub async fn translate(&self, command: TranslateCommand) -> (AppResult<()>, String) {
        let mut out = Vec::new();
        let result = self.controller.translate(command, &mut out).await.map(|_| ());
        (result, String::from_utf8(out).expect("stdout should be UTF-8"))
    }

    pub fn cached_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.config.audio_dir)
            .map(|entries| {
                entries
                    .filter_map(Result::ok)
                    .map(|e| e.file_name().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();
        names.sort();
        names
    }
}
