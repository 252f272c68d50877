#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use coach_core::{Admin, AdminBuilder, DecodeMode, RecordingNotifier};
use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::net::TcpListener;

/// A canned answer for one method and path.
#[derive(Debug, Clone)]
pub struct Route {
    pub method: Method,
    pub path: String,
    pub status: StatusCode,
    pub body: Value,
}

impl Route {
    pub fn new(method: Method, path: &str, body: Value) -> Self {
        Self {
            method,
            path: path.to_string(),
            status: StatusCode::OK,
            body,
        }
    }

    pub fn get(path: &str, body: Value) -> Self {
        Self::new(Method::GET, path, body)
    }

    pub fn post(path: &str, body: Value) -> Self {
        Self::new(Method::POST, path, body)
    }

    pub fn put(path: &str, body: Value) -> Self {
        Self::new(Method::PUT, path, body)
    }

    pub fn delete(path: &str, body: Value) -> Self {
        Self::new(Method::DELETE, path, body)
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}

/// A request the stub received.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl Recorded {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[derive(Clone)]
struct StubState {
    routes: Arc<Vec<Route>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

/// In-process stand-in for the admin backend.
pub struct StubBackend {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl StubBackend {
    pub async fn start(routes: Vec<Route>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            routes: Arc::new(routes),
            requests: requests.clone(),
        };
        let app = Router::new().fallback(respond).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub backend");
        let addr = listener.local_addr().expect("Failed to read stub address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Stub backend failed");
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().expect("poisoned").clone()
    }

    /// Requests that were not plain GETs.
    pub fn mutations(&self) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method != Method::GET)
            .collect()
    }

    pub fn last(&self, method: Method, path: &str) -> Recorded {
        self.requests()
            .into_iter()
            .rev()
            .find(|r| r.method == method && r.path == path)
            .unwrap_or_else(|| panic!("no {method} {path} was received"))
    }
}

async fn respond(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    state.requests.lock().expect("poisoned").push(Recorded {
        method: method.clone(),
        path: path.clone(),
        content_type,
        body,
    });

    match state
        .routes
        .iter()
        .find(|route| route.method == method && route.path == path)
    {
        Some(route) => (route.status, Json(route.body.clone())).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": format!("No route for {method} {path}")})),
        )
            .into_response(),
    }
}

/// Helper function to create a test admin bound to `base_url`
pub async fn create_test_admin(base_url: &str) -> (TempDir, Admin, Arc<RecordingNotifier>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let notifier = Arc::new(RecordingNotifier::new());
    let admin = AdminBuilder::new()
        .with_base_url(Some(base_url))
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_decode_mode(Some(DecodeMode::Strict))
        .with_notifier(notifier.clone())
        .build()
        .await
        .expect("Failed to create admin");
    (temp_dir, admin, notifier)
}

pub fn exercise_json(id: &str, name: &str, group: &str, created_at: &str) -> Value {
    json!({
        "_id": id,
        "name": name,
        "muscleGroup": group,
        "setType": "straight",
        "reps": 12,
        "createdAt": created_at,
    })
}

pub fn exercise_catalog() -> Value {
    json!({
        "workouts": [
            exercise_json("e1", "Bench Press", "Chest", "2024-01-01T00:00:00Z"),
            exercise_json("e2", "Push Up", "Chest", "2024-02-01T00:00:00Z"),
            exercise_json("e3", "Squat", "Legs", "2024-03-01T00:00:00Z"),
        ]
    })
}
