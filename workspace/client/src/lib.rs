//! Forecast client core shared by the terminal and browser front-ends.
//!
//! - [`validate`] checks the raw ad spend input.
//! - [`ForecastClient`] talks to the Prediction Service through a
//!   [`PredictionTransport`].
//! - [`ForecastForm`] holds the form state machine and [`FormView`] the
//!   presentation derived from it.

mod client;
mod error;
pub mod form;
#[cfg(feature = "http")]
pub mod http;
pub mod transport;
mod validation;
pub mod view;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use client::ForecastClient;
pub use error::{
    FALLBACK_MESSAGE, RequestError, Result, STATUS_FAILURE_MESSAGE, VALIDATION_MESSAGE,
    ValidationError,
};
pub use form::{ForecastForm, PendingSubmission, SubmitOutcome, Ticket, Trigger, UiState};
#[cfg(feature = "http")]
pub use http::ReqwestTransport;
pub use transport::{PredictionTransport, RawResponse};
pub use validation::validate;
pub use view::{BUSY_LABEL, FormView, ResultView, SUBMIT_LABEL};
