// End-to-end tests for glt
//
// The Google translation and speech endpoints are replaced by an axum mock
// server bound to an ephemeral port. Each test starts its own server and
// audio cache directory, so tests run in parallel without sharing state.
//
// Architecture:
// - helpers::mock_google serves /translate_a/single and /translate_tts and
//   records every query it receives
// - helpers::TestContext wires the real repositories, services and
//   controllers against that server

mod helpers;
mod test_speech;
mod test_translate;
