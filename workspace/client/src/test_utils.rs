//! Test doubles for the Prediction Service.
//!
//! Available to this crate's tests and, through the `test-utils` feature, to
//! dependants that exercise a real HTTP round trip.

use std::cell::RefCell;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[cfg(feature = "http")]
use crate::ForecastClient;
use crate::error::{RequestError, Result};
#[cfg(feature = "http")]
use crate::http::ReqwestTransport;
use crate::transport::{PredictionTransport, RawResponse};

/// One request seen by [`RecordingTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub url: String,
    pub body: Option<String>,
}

/// In-memory transport answering every request with the same canned
/// outcome and recording what was sent.
pub struct RecordingTransport {
    outcome: Result<RawResponse>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl RecordingTransport {
    pub fn respond(status: u16, body: &str) -> Self {
        Self {
            outcome: Ok(RawResponse::new(status, body)),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn ok(body: &str) -> Self {
        Self::respond(200, body)
    }

    pub fn fail(message: &str) -> Self {
        Self {
            outcome: Err(RequestError::transport(message)),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl PredictionTransport for RecordingTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<RawResponse> {
        self.calls.borrow_mut().push(RecordedCall {
            method: "POST",
            url: url.to_string(),
            body: Some(body),
        });
        self.outcome.clone()
    }

    async fn get(&self, url: &str) -> Result<RawResponse> {
        self.calls.borrow_mut().push(RecordedCall {
            method: "GET",
            url: url.to_string(),
            body: None,
        });
        self.outcome.clone()
    }
}

/// Request captured by the stub Prediction Service.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    reply: Value,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Stub Prediction Service listening on an ephemeral local port.
pub struct StubService {
    pub addr: SocketAddr,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl StubService {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn captured(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }

    /// Bodies posted to `/predict`, in arrival order.
    pub fn received(&self) -> Vec<Value> {
        self.captured().into_iter().map(|request| request.body).collect()
    }

    #[cfg(feature = "http")]
    pub fn client(&self) -> ForecastClient<ReqwestTransport> {
        ForecastClient::new(ReqwestTransport::new(), self.base_url())
    }
}

async fn predict(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    state.captured.lock().unwrap().push(CapturedRequest {
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });
    (state.status, Json(state.reply.clone()))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "message": "Sales Forecaster API is running"
    }))
}

/// Starts a stub service whose `/predict` answers with `status` and `reply`.
pub async fn spawn_stub_service(status: StatusCode, reply: Value) -> StubService {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        status,
        reply,
        captured: captured.clone(),
    };
    let app = Router::new()
        .route("/", get(health))
        .route("/predict", post(predict))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub service");
    let addr = listener.local_addr().expect("Failed to read stub address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Stub service failed");
    });
    println!("Stub prediction service listening on {}", addr);

    StubService { addr, captured }
}

/// Stub answering every forecast with 12345.6 / 0.873.
pub async fn spawn_healthy_stub() -> StubService {
    spawn_stub_service(
        StatusCode::OK,
        json!({ "predicted_revenue": 12345.6, "confidence_score": 0.873 }),
    )
    .await
}

/// Origin with nothing listening on it.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    format!("http://{}", listener.local_addr().expect("Failed to read probe address"))
}

/// Initialize tracing for tests with output to STDERR.
///
/// The log level is taken from RUST_LOG, defaulting to WARN.
pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_default(subscriber)
}
