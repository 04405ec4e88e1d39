use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// Text that makes the mock translation endpoint fail
pub const FAILING_TEXT: &str = "please fail";

/// Minimal MP3 frame header every mock audio response starts with
pub const MP3_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x00];

pub type Params = HashMap<String, String>;

#[derive(Default)]
pub struct MockState {
    pub translate_requests: Mutex<Vec<Params>>,
    pub tts_requests: Mutex<Vec<Params>>,
    pub tts_status: Mutex<Option<StatusCode>>,
}

pub struct MockGoogle {
    pub base_url: String,
    pub state: Arc<MockState>,
}

impl MockGoogle {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new()
            .route("/translate_a/single", get(translate))
            .route("/translate_tts", get(translate_tts))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind listener");
        let addr = listener.local_addr().expect("Failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn translate_requests(&self) -> Vec<Params> {
        self.state.translate_requests.lock().unwrap().clone()
    }

    pub fn tts_requests(&self) -> Vec<Params> {
        self.state.tts_requests.lock().unwrap().clone()
    }

    pub fn fail_tts_with(&self, status: StatusCode) {
        *self.state.tts_status.lock().unwrap() = Some(status);
    }
}

/// Mimics the gtx endpoint: the "translation" is the input tagged with the
/// target language, split into one row per sentence.
async fn translate(State(state): State<Arc<MockState>>, Query(params): Query<Params>) -> Response {
    state.translate_requests.lock().unwrap().push(params.clone());

    let text = params.get("q").cloned().unwrap_or_default();
    if text == FAILING_TEXT {
        return (StatusCode::SERVICE_UNAVAILABLE, "backend overloaded").into_response();
    }

    let target = params.get("tl").cloned().unwrap_or_default();
    let rows: Vec<_> = text
        .split_inclusive(". ")
        .enumerate()
        .map(|(i, sentence)| {
            let translated = if i == 0 {
                format!("[{}] {}", target, sentence)
            } else {
                sentence.to_string()
            };
            json!([translated, sentence, null, null, 10])
        })
        .collect();

    Json(json!([rows, null, "en"])).into_response()
}

async fn translate_tts(State(state): State<Arc<MockState>>, Query(params): Query<Params>) -> Response {
    state.tts_requests.lock().unwrap().push(params.clone());

    if let Some(status) = *state.tts_status.lock().unwrap() {
        return status.into_response();
    }

    let mut audio = MP3_HEADER.to_vec();
    audio.extend(params.get("q").cloned().unwrap_or_default().into_bytes());
    ([(header::CONTENT_TYPE, "audio/mpeg")], audio).into_response()
}
