use crate::helpers::{mock_google::MP3_HEADER, TestContext};
use axum::http::StatusCode;
use glt::domain::speech::AudioFormat;
use glt::error::AppError;
use glt::infrastructure::audio::AudioCache;
use glt::infrastructure::config::SpeechBackend;
use pretty_assertions::assert_eq;

fn mock_audio(batches: &[&str]) -> Vec<u8> {
    batches
        .iter()
        .flat_map(|batch| MP3_HEADER.iter().copied().chain(batch.bytes()))
        .collect()
}

#[tokio::test]
async fn it_should_speak_the_translation() {
    let ctx = TestContext::new().await;

    let (result, stdout) = ctx.run(&["french", "-s", "hello"]).await;

    result.unwrap();
    assert_eq!(stdout, "Lang: fr\nText: [fr] hello\n");

    let requests = ctx.google.tts_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["client"], "tw-ob");
    assert_eq!(requests[0]["tl"], "fr");
    assert_eq!(requests[0]["q"], "[fr] hello");
    assert_eq!(requests[0]["idx"], "0");
    assert_eq!(requests[0]["total"], "1");
    assert_eq!(requests[0]["ttsspeed"], "1");

    let expected = AudioCache::new(&ctx.config.audio_dir)
        .path_for(&AudioCache::key("google", "fr", "[fr] hello"), AudioFormat::Mp3);
    assert_eq!(ctx.player.played(), vec![expected.clone()]);
    assert_eq!(std::fs::read(&expected).unwrap(), mock_audio(&["[fr] hello"]));
}

#[tokio::test]
async fn it_should_reuse_cached_audio() {
    let ctx = TestContext::new().await;

    ctx.run(&["de", "-s", "good", "morning"]).await.0.unwrap();
    ctx.run(&["german", "-s", "good", "morning"]).await.0.unwrap();

    assert_eq!(ctx.google.translate_requests().len(), 2);
    assert_eq!(ctx.google.tts_requests().len(), 1);
    let played = ctx.player.played();
    assert_eq!(played.len(), 2);
    assert_eq!(played[0], played[1]);
    assert_eq!(ctx.cached_files().len(), 1);
}

#[tokio::test]
async fn it_should_split_long_text_into_ordered_batches() {
    let ctx = TestContext::new().await;
    let text = "This sentence is long enough to matter. ".repeat(6);

    ctx.run(&["it", "-s", text.trim()]).await.0.unwrap();

    let requests = ctx.google.tts_requests();
    assert!(requests.len() > 1, "expected several batches, got {}", requests.len());

    let total = requests.len().to_string();
    let mut batches = Vec::new();
    for (i, request) in requests.iter().enumerate() {
        assert_eq!(request["idx"], i.to_string());
        assert_eq!(request["total"], total);
        assert!(request["q"].chars().count() <= 100, "batch too long: {:?}", request["q"]);
        batches.push(request["q"].as_str());
    }

    let cached = ctx.cached_files();
    assert_eq!(cached.len(), 1);
    let audio = std::fs::read(ctx.config.audio_dir.join(&cached[0])).unwrap();
    assert_eq!(audio, mock_audio(&batches));
}

#[tokio::test]
async fn it_should_request_slow_speech() {
    let ctx = TestContext::with_backend(SpeechBackend::Google, true).await;

    ctx.run(&["es", "-s", "--slow", "hola"]).await.0.unwrap();

    assert_eq!(ctx.google.tts_requests()[0]["ttsspeed"], "0.24");
}

#[tokio::test]
async fn it_should_save_without_playing() {
    let ctx = TestContext::new().await;

    let (result, stdout) = ctx.run(&["-s", "-n", "pt", "thanks"]).await;

    result.unwrap();
    let cached = ctx.cached_files();
    assert_eq!(cached.len(), 1);
    assert!(cached[0].ends_with(".mp3"));
    let path = ctx.config.audio_dir.join(&cached[0]);
    assert_eq!(
        stdout,
        format!("Lang: pt\nText: [pt] thanks\nAudio: {}\n", path.display())
    );
    assert!(ctx.player.played().is_empty());
}

#[tokio::test]
async fn it_should_fail_for_a_language_without_a_voice() {
    let ctx = TestContext::new().await;

    let (result, stdout) = ctx.run(&["hawaiian", "-s", "hello"]).await;

    let err = result.unwrap_err();
    assert!(matches!(&err, AppError::UnsupportedVoice(lang) if lang == "haw"), "{err:?}");
    assert_eq!(err.exit_code(), 1);
    // Translation is still printed
    assert_eq!(stdout, "Lang: haw\nText: [haw] hello\n");
    assert!(ctx.google.tts_requests().is_empty());
    assert!(ctx.cached_files().is_empty());
}

#[tokio::test]
async fn it_should_not_cache_audio_when_synthesis_fails() {
    let ctx = TestContext::new().await;
    ctx.google.fail_tts_with(StatusCode::INTERNAL_SERVER_ERROR);

    let (result, _) = ctx.run(&["fr", "-s", "hello"]).await;

    assert!(matches!(result.unwrap_err(), AppError::Synthesis(_)));
    assert!(ctx.cached_files().is_empty());
    assert!(ctx.player.played().is_empty());
}

#[tokio::test]
async fn it_should_skip_speech_when_no_backend_is_available() {
    let ctx = TestContext::with_backend(SpeechBackend::None, false).await;

    let (result, stdout) = ctx.run(&["fr", "-s", "hello"]).await;

    result.unwrap();
    assert_eq!(
        stdout,
        "Lang: fr\nText: [fr] hello\nSpeech skipped: no speech backend for this platform\n"
    );
    assert!(ctx.google.tts_requests().is_empty());
}
