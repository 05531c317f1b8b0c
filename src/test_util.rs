//! Helpers shared by the router-level tests.

use std::{
    net::SocketAddr,
    path::Path,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use axum::{
    body::Body,
    extract::{Path as UrlPath, State},
    http::{header, HeaderMap, Method, Request, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::{
    app::env::Envy, settings::models::key_store::KeyStore, AppState,
};

pub fn test_envy(dir: &Path, replicate_api_url: &str) -> Envy {
    Envy {
        app_env: "test".to_string(),
        port: None,
        storage_path: Some(dir.join("keys.json").to_string_lossy().to_string()),
        replicate_api_url: Some(replicate_api_url.to_string()),
        replicate_poll_interval_secs: Some(0),
        replicate_timeout_secs: Some(5),
    }
}

pub async fn test_state(dir: &Path, replicate_api_url: &str) -> AppState {
    let envy = test_envy(dir, replicate_api_url);
    let key_store = KeyStore::open(envy.storage_path()).await.unwrap();

    AppState {
        envy: Arc::new(envy),
        key_store: Arc::new(key_store),
    }
}

pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = router.oneshot(request).await.unwrap();
    let code = response.status();
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();

    (code, String::from_utf8(bytes.to_vec()).unwrap())
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn json_request(method: Method, uri: &str, value: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(value.to_string()))
        .unwrap()
}

#[derive(Clone)]
pub enum MockOutcome {
    Succeeded(Vec<String>),
    Failed,
    Processing,
    Rejected,
    /// The first poll answers 503, later polls succeed with these urls.
    FlakyPoll(Vec<String>),
    PollNotFound,
}

#[derive(Debug, Clone)]
pub struct RecordedPrediction {
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct MockState {
    outcome: MockOutcome,
    created: Arc<Mutex<Vec<RecordedPrediction>>>,
    polls: Arc<AtomicUsize>,
}

/// In-process stand-in for the Replicate predictions API.
pub struct MockReplicate {
    pub url: String,
    state: MockState,
}

impl MockReplicate {
    pub async fn start(outcome: MockOutcome) -> Self {
        let state = MockState {
            outcome,
            created: Arc::new(Mutex::new(Vec::new())),
            polls: Arc::new(AtomicUsize::new(0)),
        };

        let app = Router::new()
            .route("/predictions", post(mock_create_prediction))
            .route("/predictions/:id", get(mock_get_prediction))
            .with_state(state.clone());

        let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
            .serve(app.into_make_service());
        let addr = server.local_addr();

        tokio::spawn(async move {
            let _ = server.await;
        });

        Self {
            url: format!("http://{}", addr),
            state,
        }
    }

    pub fn created(&self) -> Vec<RecordedPrediction> {
        self.state.created.lock().unwrap().clone()
    }

    pub fn polls(&self) -> usize {
        self.state.polls.load(Ordering::SeqCst)
    }
}

async fn mock_create_prediction(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    state
        .created
        .lock()
        .unwrap()
        .push(RecordedPrediction { authorization, body });

    match state.outcome {
        MockOutcome::Rejected => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "Invalid token." })),
        ),
        _ => (
            StatusCode::CREATED,
            Json(json!({
                "id": "pred-1",
                "version": "zeroscope",
                "status": "starting",
                "output": null,
                "error": null,
                "logs": "",
                "urls": {
                    "get": "https://api.replicate.com/v1/predictions/pred-1",
                    "cancel": "https://api.replicate.com/v1/predictions/pred-1/cancel",
                },
            })),
        ),
    }
}

async fn mock_get_prediction(
    State(state): State<MockState>,
    UrlPath(id): UrlPath<String>,
) -> (StatusCode, Json<Value>) {
    let poll = state.polls.fetch_add(1, Ordering::SeqCst);

    match state.outcome {
        MockOutcome::Succeeded(urls) => (
            StatusCode::OK,
            Json(json!({ "id": id, "status": "succeeded", "output": urls })),
        ),
        MockOutcome::Failed => (
            StatusCode::OK,
            Json(json!({
                "id": id,
                "status": "failed",
                "output": null,
                "error": "CUDA out of memory",
                "logs": "Traceback (most recent call last):",
            })),
        ),
        MockOutcome::Processing | MockOutcome::Rejected => (
            StatusCode::OK,
            Json(json!({ "id": id, "status": "processing", "output": null })),
        ),
        MockOutcome::FlakyPoll(_) if poll == 0 => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "detail": "Service unavailable." })),
        ),
        MockOutcome::FlakyPoll(urls) => (
            StatusCode::OK,
            Json(json!({ "id": id, "status": "succeeded", "output": urls })),
        ),
        MockOutcome::PollNotFound => (
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": "Not found." })),
        ),
    }
}
