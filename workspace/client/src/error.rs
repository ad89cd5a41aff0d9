use thiserror::Error;
use tracing::{error, warn};

/// Message shown for every rejected ad spend input.
pub const VALIDATION_MESSAGE: &str = "Please enter a valid ad spend amount";

/// Message shown when the service answers with a non-success status.
pub const STATUS_FAILURE_MESSAGE: &str = "Failed to get prediction";

/// Message shown when a transport error carries no text of its own.
pub const FALLBACK_MESSAGE: &str = "An error occurred while fetching the prediction";

/// Error types for user input validation.
///
/// Every variant displays the same user-facing message; the variant records
/// why the input was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Input was empty or whitespace
    #[error("Please enter a valid ad spend amount")]
    Empty,

    /// Input is not a number
    #[error("Please enter a valid ad spend amount")]
    NotANumber,

    /// Input parsed to an infinite value
    #[error("Please enter a valid ad spend amount")]
    NotFinite,

    /// Input parsed to zero or a negative value
    #[error("Please enter a valid ad spend amount")]
    NotPositive,
}

/// Error types for a forecast or health request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RequestError {
    /// The service answered with a non-success HTTP status.
    /// The status is kept for logs and never displayed.
    #[error("Failed to get prediction")]
    Status { status: u16 },

    /// Network failure or undecodable body
    #[error("{0}")]
    Transport(String),

    /// Body was JSON but not a usable forecast
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl RequestError {
    /// Builds a transport error, substituting the generic fallback when the
    /// underlying error has no message.
    ///
    /// Not logged here: transports log the failure with the request URL.
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            RequestError::Transport(FALLBACK_MESSAGE.to_string())
        } else {
            RequestError::Transport(message)
        }
    }

    pub fn status(status: u16) -> Self {
        let err = RequestError::Status { status };
        warn!(status, "Prediction service returned non-success status");
        err
    }

    pub fn malformed(detail: impl Into<String>) -> Self {
        let err = RequestError::MalformedResponse(detail.into());
        error!(?err, "Malformed response");
        err
    }
}

/// Type alias for Result with RequestError
pub type Result<T> = std::result::Result<T, RequestError>;
