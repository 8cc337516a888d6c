use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, Method, Uri},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

pub use axum::http::StatusCode;

pub const PLANT_INFO_PATH: &str = "/abby/plant/plantInfo";
pub const GCL_PATH: &str = "/v5/gcl";
pub const REQUESTS_PATH: &str = "/_requests";

/// One request as the server saw it. Header names are lower-case.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// The canned answer for both endpoints.
#[derive(Clone, Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

impl Default for Reply {
    fn default() -> Self {
        Self {
            status: StatusCode::OK,
            body: r#"{"code":0}"#.to_string(),
        }
    }
}

pub type Log = Arc<RwLock<Vec<RecordedRequest>>>;

#[derive(Clone, Debug, Default)]
pub struct MockState {
    reply: Reply,
    log: Log,
}

impl MockState {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            log: Log::default(),
        }
    }

    pub async fn recorded(&self) -> Vec<RecordedRequest> {
        self.log.read().await.clone()
    }
}

pub fn app(state: MockState) -> Router {
    Router::new()
        .route(PLANT_INFO_PATH, post(record))
        .route(GCL_PATH, post(record))
        .route(REQUESTS_PATH, get(list_requests))
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: MockState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let headers = headers
        .iter()
        .map(|(name, value)| {
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            (name.as_str().to_string(), value)
        })
        .collect();
    let request = RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        headers,
        body,
    };
    tracing::debug!(path = %request.path, body_len = request.body.len(), "recorded request");
    state.log.write().await.push(request);
    (state.reply.status, state.reply.body.clone())
}

async fn list_requests(State(state): State<MockState>) -> Json<Vec<RecordedRequest>> {
    Json(state.recorded().await)
}
