//! In-process mock of the View REST API
//!
//! Every request is recorded. Responses are looked up by `"{METHOD} {path?query}"`;
//! anything unregistered gets a 404 carrying an `ApiErrorResponse` body.

#![allow(dead_code)]

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use uuid::Uuid;
use view_sdk::{SdkConfig, ViewSdk};

pub const ACCESS_KEY: &str = "test-access-key";

pub const NOT_FOUND_BODY: &str =
    r#"{"Error":"NotFound","StatusCode":404,"Description":"The requested resource was not found."}"#;

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub uri: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

#[derive(Default)]
struct MockState {
    routes: HashMap<String, (u16, String)>,
    requests: Vec<Recorded>,
}

type Shared = Arc<Mutex<MockState>>;

#[derive(Clone)]
pub struct MockServer {
    pub base_url: String,
    state: Shared,
}

impl MockServer {
    pub async fn start() -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let state: Shared = Arc::new(Mutex::new(MockState::default()));
        let app = Router::new().fallback(handle).with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    /// Register a canned response for `method` on `uri` (path plus query).
    pub fn respond(&self, method: &str, uri: &str, status: u16, body: impl Into<String>) {
        self.state
            .lock()
            .unwrap()
            .routes
            .insert(format!("{} {}", method, uri), (status, body.into()));
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests().pop().expect("no request recorded")
    }

    pub fn config(&self, tenant: Uuid) -> SdkConfig {
        SdkConfig::new(&self.base_url, tenant, ACCESS_KEY)
    }

    pub fn sdk(&self, tenant: Uuid) -> ViewSdk {
        ViewSdk::new(self.config(tenant)).unwrap()
    }

    pub fn strict_sdk(&self, tenant: Uuid) -> ViewSdk {
        ViewSdk::new(self.config(tenant).with_strict(true)).unwrap()
    }
}

async fn handle(State(state): State<Shared>, method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    let uri = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_default();
    let key = format!("{} {}", method, uri);

    let mut state = state.lock().unwrap();
    state.requests.push(Recorded {
        method: method.to_string(),
        uri,
        headers,
        body,
    });

    let (status, body) = state
        .routes
        .get(&key)
        .cloned()
        .unwrap_or_else(|| (404, NOT_FOUND_BODY.to_string()));

    (
        StatusCode::from_u16(status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

/// `/v1.0/tenants/{tenant}/{rest}`
pub fn v1(tenant: Uuid, rest: &str) -> String {
    format!("/v1.0/tenants/{}/{}", tenant, rest)
}

/// `/v2.0/tenants/{tenant}/{rest}`
pub fn v2(tenant: Uuid, rest: &str) -> String {
    format!("/v2.0/tenants/{}/{}", tenant, rest)
}
