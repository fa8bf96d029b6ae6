use api::routes::routes;
use api::state::AppState;
use axum::{body::Body, http::Request, response::Response};
use common::AppConfig;
use std::convert::Infallible;
use tower::ServiceExt;
use tower::util::BoxCloneService;

pub type TestApp = BoxCloneService<Request<Body>, Response, Infallible>;

fn test_config(photo_storage_root: &str) -> AppConfig {
    AppConfig {
        env: "test".into(),
        project_name: "sekolah-api".into(),
        log_level: "api=info".into(),
        log_file: "api.log".into(),
        log_to_stdout: false,
        database_path: "sqlite::memory:".into(),
        host: "127.0.0.1".into(),
        port: 8080,
        photo_storage_root: photo_storage_root.into(),
        public_base_url: "http://localhost:8080".into(),
    }
}

/// Builds an app backed by a fresh in-memory database. Each call is fully
/// isolated from every other test.
pub async fn make_test_app() -> (TestApp, AppState) {
    let pool = db::test_utils::setup_test_db().await;
    let app_state = AppState::new(pool, test_config("tmp/foto"));
    let app = routes(app_state.clone()).into_service().boxed_clone();
    (app, app_state)
}

/// Like [`make_test_app`], but with photo storage rooted in a temp directory
/// that lives as long as the returned guard.
pub async fn make_test_app_with_storage() -> (TestApp, AppState, tempfile::TempDir) {
    let tmp = tempfile::tempdir().expect("Failed to create temp dir");
    let pool = db::test_utils::setup_test_db().await;
    let app_state = AppState::new(pool, test_config(tmp.path().to_str().unwrap()));
    let app = routes(app_state.clone()).into_service().boxed_clone();
    (app, app_state, tmp)
}

pub async fn get_json_body(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Builds a JSON request with the given method, URI and body.
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn delete_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
