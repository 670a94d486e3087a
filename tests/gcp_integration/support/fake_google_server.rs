use std::{
    collections::{HashMap, VecDeque},
    sync::{Arc, Mutex},
};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, Method, StatusCode, Uri, header::AUTHORIZATION},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub authorization: Option<String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn query_values(&self, name: &str) -> Vec<&str> {
        self.query
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .collect()
    }
}

#[derive(Default)]
struct FakeGoogleServerState {
    responses: HashMap<String, VecDeque<(u16, Value)>>,
    requests: Vec<RecordedRequest>,
}

type SharedState = Arc<Mutex<FakeGoogleServerState>>;

#[derive(Clone)]
pub struct FakeGoogleServer {
    state: SharedState,
    base_url: String,
}

impl FakeGoogleServer {
    pub async fn start() -> Self {
        let state: SharedState = Arc::new(Mutex::new(FakeGoogleServerState::default()));
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("fake server bind");
        let addr = listener.local_addr().expect("fake server address");

        let app = Router::new().fallback(respond).with_state(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fake server stopped");
        });

        Self {
            state,
            base_url: format!("http://{addr}"),
        }
    }

    pub fn base_url(&self) -> String {
        self.base_url.clone()
    }

    pub fn respond(&self, method: &str, path: &str, status: u16, body: Value) {
        self.state
            .lock()
            .expect("mutex poisoned")
            .responses
            .entry(format!("{method} {path}"))
            .or_default()
            .push_back((status, body));
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .requests
            .iter()
            .filter(|request| request.path == path)
            .cloned()
            .collect()
    }
}

async fn respond(
    State(state): State<SharedState>,
    method: Method,
    uri: Uri,
    Query(query): Query<Vec<(String, String)>>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, Json<Value>) {
    let key = format!("{} {}", method.as_str(), uri.path());
    let mut state = state.lock().expect("mutex poisoned");

    state.requests.push(RecordedRequest {
        method: method.as_str().to_string(),
        path: uri.path().to_string(),
        query,
        authorization: headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
        body,
    });

    let (status, body) = match state.responses.get_mut(&key) {
        Some(queue) if queue.len() > 1 => queue.pop_front().expect("queued response"),
        Some(queue) if !queue.is_empty() => queue[0].clone(),
        _ => (
            404,
            json!({"error": {"code": 404, "message": format!("no fake response for {key}"), "status": "NOT_FOUND"}}),
        ),
    };

    (
        StatusCode::from_u16(status).expect("valid status code"),
        Json(body),
    )
}
