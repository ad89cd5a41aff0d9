//! Native transport backed by `reqwest`.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::{error, trace};

use crate::error::{RequestError, Result};
use crate::transport::{PredictionTransport, RawResponse};

/// Transport for native targets.
///
/// The underlying client is built without a timeout so that a request only
/// ends when the service answers or the connection fails.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    async fn finish(response: reqwest::Response) -> Result<RawResponse> {
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read response body: {}", e);
            RequestError::transport(e.to_string())
        })?;
        trace!(status, bytes = body.len(), "Response received");
        Ok(RawResponse { status, body })
    }
}

#[async_trait(?Send)]
impl PredictionTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<RawResponse> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                error!("POST {} - Request failed: {}", url, e);
                RequestError::transport(e.to_string())
            })?;
        Self::finish(response).await
    }

    async fn get(&self, url: &str) -> Result<RawResponse> {
        let response = self.client.get(url).send().await.map_err(|e| {
            error!("GET {} - Request failed: {}", url, e);
            RequestError::transport(e.to_string())
        })?;
        Self::finish(response).await
    }
}
