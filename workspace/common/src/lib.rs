//! Transport-layer types shared between the forecast client, the browser
//! frontend and the terminal front-end.
//! These structs mirror the Prediction Service payloads so every surface
//! deserializes responses without duplicating shapes.

mod format;

pub use format::{FormatError, format_percentage, format_usd};

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Path of the prediction endpoint, relative to the service origin.
pub const PREDICT_PATH: &str = "/predict";

/// Path of the service health check, relative to the service origin.
pub const HEALTH_PATH: &str = "/";

/// Origin used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

// ===================== Forecast =====================

/// Request body for `POST /predict`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate, PartialEq)]
pub struct ForecastRequest {
    /// Advertising spend, must be strictly positive.
    #[validate(range(exclusive_min = 0.0))]
    pub ad_spend: f64,
}

impl ForecastRequest {
    pub fn new(ad_spend: f64) -> Self {
        Self { ad_spend }
    }
}

/// Forecast returned by the Prediction Service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate, PartialEq)]
pub struct ForecastResult {
    /// Predicted revenue in US dollars.
    pub predicted_revenue: f64,
    /// Forecast certainty in `[0, 1]`.
    #[validate(range(min = 0.0, max = 1.0))]
    pub confidence_score: f64,
}

impl ForecastResult {
    pub fn new(predicted_revenue: f64, confidence_score: f64) -> Self {
        Self {
            predicted_revenue,
            confidence_score,
        }
    }

    /// Revenue rendered as US-locale currency, e.g. `$12,345.60`.
    pub fn formatted_revenue(&self) -> Result<String, FormatError> {
        format_usd(self.predicted_revenue)
    }

    /// Confidence rendered as a percentage with one decimal, e.g. `87.3%`.
    pub fn formatted_confidence(&self) -> Result<String, FormatError> {
        format_percentage(self.confidence_score)
    }
}

// ===================== Health =====================

/// Response of the service health check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}
