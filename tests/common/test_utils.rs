use es_translator::{
    api::{HttpTranslationApi, TranslationApi},
    config::ApiConfig,
    ui::TranslationController,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tempfile::TempDir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

use super::mocks::{MockTranslationApi, RecordingView};

/// API client pointed at a wiremock server's `/api` prefix
pub fn http_api(server: &MockServer) -> HttpTranslationApi {
    HttpTranslationApi::new(&ApiConfig {
        base_url: format!("{}/api", server.uri()),
        ..ApiConfig::default()
    })
    .expect("Failed to build HTTP client")
}

/// Base URL on a local port nothing is listening on
pub async fn dead_base_url() -> String {
    let listener =
        std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind ephemeral port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/api", port)
}

pub fn controller_with_mock(
    view: RecordingView,
    api: MockTranslationApi,
) -> TranslationController<RecordingView> {
    TranslationController::new(view, Arc::new(api))
}

pub fn controller_with_http(
    view: RecordingView,
    server: &MockServer,
) -> TranslationController<RecordingView> {
    let api: Arc<dyn TranslationApi> = Arc::new(http_api(server));
    TranslationController::new(view, api)
}

/// Mounts a `/api/translate` responder that must be hit exactly `times` times
pub async fn mount_translate(server: &MockServer, status: u16, body: Value, times: u64) {
    Mock::given(method("POST"))
        .and(path("/api/translate"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(times)
        .mount(server)
        .await;
}

pub async fn mount_translation(server: &MockServer, translated: &str) {
    mount_translate(
        server,
        200,
        json!({ "original_text": "ignored", "translated_text": translated }),
        1,
    )
    .await;
}

/// Number of translate requests the server has seen
pub async fn translate_request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.url.path() == "/api/translate")
        .count()
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Write a config YAML file and return its path
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> String {
    let config_path = dir.path().join("config.yaml");
    tokio::fs::write(&config_path, content)
        .await
        .expect("Failed to write config file");
    config_path.to_string_lossy().to_string()
}

pub const SAMPLE_CONFIG_YAML: &str = r#"
api:
  base_url: "http://translator.internal:8000/api"
  user_agent: "integration-tests/1.0"
logs:
  level: "debug"
  file: "/tmp/es-translator-test.log"
"#;

pub const INVALID_CONFIG_YAML: &str = r#"
api:
  base_url: "not a url"
"#;
