use crate::helpers::{mock_google::FAILING_TEXT, TestContext};
use glt::controllers::TranslateCommand;
use glt::error::AppError;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn it_should_print_resolved_language_and_translation() {
    let ctx = TestContext::new().await;

    let (result, stdout) = ctx.run(&["frnch", "hello", "world"]).await;

    result.unwrap();
    assert_eq!(stdout, "Lang: fr\nText: [fr] hello world\n");

    let requests = ctx.google.translate_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["client"], "gtx");
    assert_eq!(requests[0]["sl"], "auto");
    assert_eq!(requests[0]["tl"], "fr");
    assert_eq!(requests[0]["dt"], "t");
    assert_eq!(requests[0]["q"], "hello world");
}

#[tokio::test]
async fn it_should_join_sentences_from_the_response() {
    let ctx = TestContext::new().await;

    let (result, stdout) = ctx.run(&["de", "One. Two. Three."]).await;

    result.unwrap();
    assert_eq!(stdout, "Lang: de\nText: [de] One. Two. Three.\n");
}

#[tokio::test]
async fn it_should_send_resolved_source_language() {
    let ctx = TestContext::new().await;

    let (result, stdout) = ctx.run(&["--from", "englsh", "spanish", "good", "night"]).await;

    result.unwrap();
    assert_eq!(stdout, "Lang: es\nText: [es] good night\n");
    let requests = ctx.google.translate_requests();
    assert_eq!(requests[0]["sl"], "en");
    assert_eq!(requests[0]["tl"], "es");
}

#[tokio::test]
async fn it_should_accept_language_codes() {
    let ctx = TestContext::new().await;

    let (result, stdout) = ctx.run(&["JA", "thank", "you"]).await;

    result.unwrap();
    assert!(stdout.starts_with("Lang: ja\n"));
}

#[tokio::test]
async fn it_should_fail_with_exit_code_1_when_the_service_errors() {
    let ctx = TestContext::new().await;

    let (result, stdout) = ctx.run(&["fr", FAILING_TEXT]).await;

    let err = result.unwrap_err();
    assert!(matches!(&err, AppError::Translation(msg) if msg.contains("503")), "{err:?}");
    assert_eq!(err.exit_code(), 1);
    // The language is echoed before the request goes out
    assert_eq!(stdout, "Lang: fr\n");
}

#[tokio::test]
async fn it_should_reject_empty_text_without_calling_the_service() {
    let ctx = TestContext::new().await;

    let (result, stdout) = ctx
        .translate(TranslateCommand {
            language: "fr".to_string(),
            source: None,
            text: "   ".to_string(),
            speak: false,
            play: true,
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    assert_eq!(err.exit_code(), 2);
    assert!(stdout.is_empty());
    assert!(ctx.google.translate_requests().is_empty());
}

#[tokio::test]
async fn it_should_reject_an_empty_language() {
    let ctx = TestContext::new().await;

    let (result, stdout) = ctx
        .translate(TranslateCommand {
            language: " ".to_string(),
            source: None,
            text: "hello".to_string(),
            speak: false,
            play: true,
        })
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Language(_)));
    assert!(stdout.is_empty());
    assert!(ctx.google.translate_requests().is_empty());
}
