use clap::Parser;
use glt::controllers::{Cli, Command, LanguagesController, TranslateController};
use glt::domain::language::{EmptyQueryPolicy, LanguageCatalog, LanguageResolver};
use glt::domain::speech::{Platform, SpeechService};
use glt::domain::translation::TranslationService;
use glt::error::{AppError, AppResult};
use glt::infrastructure::audio::{AudioCache, AudioPlayer, CommandPlayer};
use glt::infrastructure::config::{Config, LogFormat};
use glt::infrastructure::http::create_http_client;
use glt::infrastructure::repositories::{synthesizer_for, GoogleTranslationRepository};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Parse arguments; clap exits on its own for help, version and usage errors
    let cli = Cli::parse();

    // Load configuration
    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", AppError::Config(format!("{:#}", e)));
            return ExitCode::from(1);
        }
    };
    if cli.slow {
        config.tts_slow = true;
    }

    // Initialize logging
    init_logging(&config, cli.log_filter());

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, exit_code = e.exit_code(), "glt failed");
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: Cli, config: Config) -> AppResult<()> {
    let catalog = LanguageCatalog::global();
    let mut stdout = std::io::stdout();

    let command = match cli.action() {
        Command::ListLanguages => {
            return LanguagesController::new(catalog).list(&mut stdout);
        }
        Command::Translate(command) => command,
    };

    let platform = Platform::detect();
    tracing::debug!(
        platform = %platform,
        translate_url = %config.translate_url,
        audio_dir = %config.audio_dir.display(),
        "Starting glt"
    );

    let http_client = create_http_client(config.http_timeout_secs)
        .map_err(|e| AppError::Config(format!("failed to build HTTP client: {}", e)))?;

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Repositories and backends
    let translation_repo = Arc::new(GoogleTranslationRepository::new(
        http_client.clone(),
        config.translate_url.clone(),
    ));
    let synthesizer = synthesizer_for(&platform, &config, http_client);
    let player = build_player(&platform, &config);

    // 2. Services
    let translation_service = Arc::new(TranslationService::new(
        catalog,
        LanguageResolver::with_policy(EmptyQueryPolicy::Reject),
        translation_repo,
    ));
    let speech_service = Arc::new(SpeechService::new(
        synthesizer,
        player,
        AudioCache::new(config.audio_dir.clone()),
    ));

    // 3. Controller
    let controller = TranslateController::new(translation_service, speech_service);
    controller.translate(command, &mut stdout).await?;

    Ok(())
}

#[cfg(feature = "rodio")]
fn build_player(platform: &Platform, config: &Config) -> Arc<dyn AudioPlayer> {
    if config.player.is_some() {
        return Arc::new(CommandPlayer::for_platform(platform, config.player.as_deref()));
    }
    Arc::new(glt::infrastructure::audio::RodioPlayer::new())
}

#[cfg(not(feature = "rodio"))]
fn build_player(platform: &Platform, config: &Config) -> Arc<dyn AudioPlayer> {
    Arc::new(CommandPlayer::for_platform(platform, config.player.as_deref()))
}

fn init_logging(config: &Config, default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
