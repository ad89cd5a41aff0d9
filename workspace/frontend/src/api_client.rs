use async_trait::async_trait;
use client::{ForecastClient, PredictionTransport, RawResponse, RequestError, Result};
use gloo_net::http::{Request, Response};

use crate::settings;

/// Browser transport backed by the Fetch API.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

async fn into_raw(method: &str, url: &str, response: Response) -> Result<RawResponse> {
    let status = response.status();
    log::trace!("{} {} - Response received ({})", method, url, status);
    let body = response.text().await.map_err(|e| {
        log::error!("{} {} - Failed to read body: {}", method, url, e);
        RequestError::transport(e.to_string())
    })?;
    Ok(RawResponse { status, body })
}

#[async_trait(?Send)]
impl PredictionTransport for GlooTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<RawResponse> {
        log::debug!("POST request to: {}", url);
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| {
                log::error!("POST {} - Failed to build request: {}", url, e);
                RequestError::transport(e.to_string())
            })?
            .send()
            .await
            .map_err(|e| {
                log::error!("POST {} - Request failed: {}", url, e);
                RequestError::transport(e.to_string())
            })?;
        into_raw("POST", url, response).await
    }

    async fn get(&self, url: &str) -> Result<RawResponse> {
        log::debug!("GET request to: {}", url);
        let response = Request::get(url).send().await.map_err(|e| {
            log::error!("GET {} - Request failed: {}", url, e);
            RequestError::transport(e.to_string())
        })?;
        into_raw("GET", url, response).await
    }
}

/// Forecast client pointed at the configured Prediction Service.
pub fn forecast_client() -> ForecastClient<GlooTransport> {
    ForecastClient::new(GlooTransport, settings::get_settings().api_base_url)
}
