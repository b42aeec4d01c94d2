//! Shared fixtures: an in-process inference stub and a memory-backed `AppState`.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use crate::llm_client::LlmClient;
use crate::state::AppState;
use crate::store::MemoryStore;

/// Canned reply served for every generate call.
#[derive(Debug, Clone)]
pub struct StubReply {
    status: StatusCode,
    body: Value,
    delay: Option<Duration>,
}

impl StubReply {
    pub fn json(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body,
            delay: None,
        }
    }

    pub fn text(response: &str) -> Self {
        Self::json(serde_json::json!({ "response": response, "done": true }))
    }

    pub fn error(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            body,
            delay: None,
        }
    }

    /// Holds the reply back for `delay` after the request arrives.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[derive(Clone)]
struct StubState {
    reply: Arc<StubReply>,
    requests: Arc<Mutex<Vec<Value>>>,
}

pub struct InferenceStub {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl InferenceStub {
    pub fn url(&self) -> String {
        format!("http://{}/api/generate", self.addr)
    }

    /// Request bodies received so far.
    pub async fn requests(&self) -> Vec<Value> {
        self.requests.lock().await.clone()
    }
}

async fn handle_generate(
    State(state): State<StubState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.requests.lock().await.push(body);
    if let Some(delay) = state.reply.delay {
        tokio::time::sleep(delay).await;
    }
    (state.reply.status, Json(state.reply.body.clone()))
}

pub async fn spawn_inference_stub(reply: StubReply) -> InferenceStub {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/api/generate", post(handle_generate))
        .with_state(StubState {
            reply: Arc::new(reply),
            requests: requests.clone(),
        });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    InferenceStub { addr, requests }
}

/// A URL on a local port that nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api/generate")
}

pub fn test_state(inference_url: &str) -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState {
        store: store.clone(),
        llm: LlmClient::new(inference_url, "test-model").unwrap(),
    };
    (state, store)
}
