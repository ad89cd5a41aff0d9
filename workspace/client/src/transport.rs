//! Seam between the forecast client and the HTTP stack.
//!
//! Implementors carry transport details only: they send one request and hand
//! back the raw status and body. Status handling and decoding live in
//! [`crate::ForecastClient`] so every transport behaves the same way.
//!
//! The trait is `?Send` because browser futures are not `Send`.

use async_trait::async_trait;

use crate::error::Result;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// An interface for issuing single HTTP requests to the Prediction Service.
#[async_trait(?Send)]
pub trait PredictionTransport {
    /// POST `body` to `url` with `Content-Type: application/json`.
    async fn post_json(&self, url: &str, body: String) -> Result<RawResponse>;

    /// GET `url`.
    async fn get(&self, url: &str) -> Result<RawResponse>;
}
