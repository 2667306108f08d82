use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tempfile::TempDir;

use client::config::ApiConfig;
use client::{FileSessionStore, HttpReviewApi, ViewController};

pub const ADMIN_PASSWORD: &str = "letmein";
pub const ADMIN_TOKEN: &str = "tok-1";

pub mod routes {
    pub const APPLY_QUIZ: &str = "/api/apply-quiz";
    pub const APPLY_COMP: &str = "/api/apply-comp";
    pub const STATUS: &str = "/api/status/{id}";
    pub const ADMIN_LOGIN: &str = "/api/admin/login";
    pub const ADMIN_APPLICATIONS: &str = "/api/admin/applications";
}

/// What the mock API saw.
#[derive(Default)]
pub struct Received {
    /// `(path, body)` of every application POST.
    pub applications: Vec<(String, Value)>,
    pub status_ids: Vec<String>,
    pub bearer_tokens: Vec<Option<String>>,
}

/// How the application endpoints answer.
#[derive(Clone, Copy, Default)]
enum ApplyMode {
    #[default]
    Accept,
    /// 500 with no body.
    ServerError,
    /// 200 with a body that has no `id`.
    Malformed,
}

#[derive(Clone, Default)]
struct MockState {
    received: Arc<Mutex<Received>>,
    applies: ApplyMode,
}

fn apply_response(state: &MockState, accepted: Value) -> Response {
    match state.applies {
        ApplyMode::Accept => Json(accepted).into_response(),
        ApplyMode::ServerError => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        ApplyMode::Malformed => Json(json!({})).into_response(),
    }
}

async fn apply_quiz(State(state): State<MockState>, Json(body): Json<Value>) -> Response {
    record_application(&state, routes::APPLY_QUIZ, body);
    apply_response(&state, json!({"id": "Q123"}))
}

async fn apply_comp(State(state): State<MockState>, Json(body): Json<Value>) -> Response {
    record_application(&state, routes::APPLY_COMP, body);
    apply_response(&state, json!({"id": 9}))
}

fn record_application(state: &MockState, path: &str, body: Value) {
    state
        .received
        .lock()
        .unwrap()
        .applications
        .push((path.to_string(), body));
}

async fn status(State(state): State<MockState>, Path(id): Path<String>) -> Response {
    state.received.lock().unwrap().status_ids.push(id.clone());
    match id.as_str() {
        "Q123" => Json(json!({
            "id": "Q123",
            "type": "quiz",
            "status": "under review",
            "name": "Ada",
            "email": "ada@example.com",
            "answers": "42"
        }))
        .into_response(),
        "C9" => Json(json!({
            "id": "C9",
            "type": "comp",
            "status": "approved",
            "members": ["A", "B"]
        }))
        .into_response(),
        "a b/c" => Json(json!({"id": id, "type": "quiz", "status": "pending"})).into_response(),
        _ => (StatusCode::NOT_FOUND, Json(json!({"error": "not found"}))).into_response(),
    }
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["password"] == ADMIN_PASSWORD {
        Json(json!({"sessionKey": ADMIN_TOKEN})).into_response()
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({"error": "bad password"}))).into_response()
    }
}

async fn applications(State(state): State<MockState>, headers: HeaderMap) -> Response {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string);
    state
        .received
        .lock()
        .unwrap()
        .bearer_tokens
        .push(token.clone());

    if token.as_deref() != Some(ADMIN_TOKEN) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!([
        {"id": "Q1", "type": "quiz", "status": "pending", "name": "Ada", "email": "ada@example.com", "answers": "42"},
        {"id": 2, "type": "comp", "status": "approved", "name": "Crabs", "members": ["A", "B"], "competitionDetails": "finals"}
    ]))
    .into_response()
}

pub struct TestApp {
    pub addr: SocketAddr,
    received: Arc<Mutex<Received>>,
    /// Holds the session file for controllers built from this app.
    pub data_dir: TempDir,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(ApplyMode::Accept).await
    }

    /// Mock API whose application endpoints always answer 500.
    pub async fn spawn_failing() -> Self {
        Self::spawn_with(ApplyMode::ServerError).await
    }

    /// Mock API whose application endpoints answer 200 without an `id`.
    pub async fn spawn_malformed() -> Self {
        Self::spawn_with(ApplyMode::Malformed).await
    }

    async fn spawn_with(applies: ApplyMode) -> Self {
        let state = MockState {
            received: Arc::default(),
            applies,
        };
        let received = Arc::clone(&state.received);

        let app = Router::new()
            .route(routes::APPLY_QUIZ, post(apply_quiz))
            .route(routes::APPLY_COMP, post(apply_comp))
            .route(routes::STATUS, get(status))
            .route(routes::ADMIN_LOGIN, post(login))
            .route(routes::ADMIN_APPLICATIONS, get(applications))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            received,
            data_dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: format!("http://{}/api", self.addr),
            timeout_secs: 5,
        }
    }

    pub fn api(&self) -> Arc<HttpReviewApi> {
        Arc::new(HttpReviewApi::new(&self.api_config()).expect("Failed to build API client"))
    }

    pub fn store(&self) -> Arc<FileSessionStore> {
        Arc::new(FileSessionStore::new(
            self.data_dir.path().join("session.json"),
        ))
    }

    /// A controller as it looks right after startup. Building a second one
    /// over the same app simulates a reload.
    pub async fn controller(&self) -> ViewController {
        ViewController::new(self.api(), self.store(), Duration::from_secs(3)).await
    }

    /// A controller whose API points at a port nothing listens on.
    pub async fn unreachable_controller(&self) -> ViewController {
        let mut config = self.api_config();
        config.base_url = "http://127.0.0.1:1/api".into();
        let api = Arc::new(HttpReviewApi::new(&config).expect("Failed to build API client"));
        ViewController::new(api, self.store(), Duration::from_secs(3)).await
    }

    pub fn received<T>(&self, f: impl FnOnce(&Received) -> T) -> T {
        f(&self.received.lock().unwrap())
    }
}
