use common::{ForecastRequest, ForecastResult, HEALTH_PATH, HealthStatus, PREDICT_PATH};
use serde_json::Value;
use tracing::{debug, error, info, instrument, trace};
use validator::Validate;

use crate::error::{RequestError, Result};
use crate::transport::PredictionTransport;

/// Client for the Prediction Service.
///
/// Each call issues exactly one request through the transport. There are no
/// retries and no client-side timeout.
#[derive(Debug, Clone)]
pub struct ForecastClient<T> {
    transport: T,
    base_url: String,
}

impl<T: PredictionTransport> ForecastClient<T> {
    /// Creates a client for the service at `base_url` (e.g. `http://localhost:8000`).
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        debug!("Forecast client targeting {}", base_url);
        Self { transport, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Requests a revenue forecast for `ad_spend`.
    #[instrument(skip(self))]
    pub async fn submit_forecast(&self, ad_spend: f64) -> Result<ForecastResult> {
        let url = self.url(PREDICT_PATH);
        let body = serde_json::to_string(&ForecastRequest::new(ad_spend))
            .map_err(|e| {
                error!("Failed to serialize request: {}", e);
                RequestError::transport(format!("Failed to serialize request: {}", e))
            })?;
        debug!("POST request to: {}", url);

        let response = self.transport.post_json(&url, body).await?;
        if !response.is_success() {
            return Err(RequestError::status(response.status));
        }

        trace!("POST {} - Response received, parsing JSON", url);
        let result = decode_forecast(&response.body)?;
        info!(
            predicted_revenue = result.predicted_revenue,
            confidence_score = result.confidence_score,
            "Forecast received"
        );
        Ok(result)
    }

    /// Queries the service health check.
    #[instrument(skip(self))]
    pub async fn check_health(&self) -> Result<HealthStatus> {
        let url = self.url(HEALTH_PATH);
        debug!("GET request to: {}", url);

        let response = self.transport.get(&url).await?;
        if !response.is_success() {
            return Err(RequestError::status(response.status));
        }

        let value = parse_json(&response.body)?;
        let status: HealthStatus =
            serde_json::from_value(value).map_err(|e| RequestError::malformed(e.to_string()))?;
        info!(status = %status.status, "Health check completed");
        Ok(status)
    }
}

fn parse_json(body: &str) -> Result<Value> {
    serde_json::from_str(body).map_err(|e| {
        error!("Response body is not JSON: {}", e);
        RequestError::transport(e.to_string())
    })
}

/// Decodes a prediction body, rejecting missing or out-of-range fields.
fn decode_forecast(body: &str) -> Result<ForecastResult> {
    let value = parse_json(body)?;
    let result = ForecastResult::new(
        number_field(&value, "predicted_revenue")?,
        number_field(&value, "confidence_score")?,
    );
    result.validate().map_err(|_| {
        RequestError::malformed(format!(
            "confidence_score {} is outside [0, 1]",
            result.confidence_score
        ))
    })?;
    // A forecast the result region cannot display is not a usable forecast
    result
        .formatted_revenue()
        .map_err(|e| RequestError::malformed(format!("predicted_revenue: {}", e)))?;
    Ok(result)
}

fn number_field(value: &Value, name: &str) -> Result<f64> {
    match value.get(name) {
        None | Some(Value::Null) => Err(RequestError::malformed(format!("missing field `{}`", name))),
        Some(field) => field
            .as_f64()
            .ok_or_else(|| RequestError::malformed(format!("field `{}` is not a number", name))),
    }
}
