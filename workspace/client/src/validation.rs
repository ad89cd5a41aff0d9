use common::ForecastRequest;
use tracing::{debug, trace};
use validator::Validate;

use crate::error::ValidationError;

/// Parses and checks the raw ad spend input.
///
/// Surrounding whitespace is ignored. Returns the positive, finite spend or
/// the reason the input was rejected.
pub fn validate(input: &str) -> Result<f64, ValidationError> {
    trace!(input, "Validating ad spend input");
    let input = input.trim();
    if input.is_empty() {
        debug!("Rejected ad spend: empty input");
        return Err(ValidationError::Empty);
    }

    let value: f64 = input.parse().map_err(|_| {
        debug!(input, "Rejected ad spend: not a number");
        ValidationError::NotANumber
    })?;

    if value.is_nan() {
        debug!(input, "Rejected ad spend: NaN");
        return Err(ValidationError::NotANumber);
    }
    if value.is_infinite() {
        debug!(input, "Rejected ad spend: infinite");
        return Err(ValidationError::NotFinite);
    }

    ForecastRequest::new(value).validate().map_err(|e| {
        debug!(input, error = %e, "Rejected ad spend: not positive");
        ValidationError::NotPositive
    })?;

    Ok(value)
}
