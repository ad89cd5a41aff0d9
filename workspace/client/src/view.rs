//! Presentation model derived from a [`ForecastForm`].
//!
//! Both the browser page and the terminal front-end render from [`FormView`],
//! so labels and number formatting stay identical across surfaces.

use common::{FormatError, ForecastResult};
use tracing::warn;

use crate::form::{ForecastForm, UiState};

pub const SUBMIT_LABEL: &str = "Forecast Revenue";
pub const BUSY_LABEL: &str = "Forecasting...";

/// Formatted forecast values for the result region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub predicted_revenue: String,
    pub confidence_score: String,
}

impl ResultView {
    /// Formats a result, failing when a value cannot be rendered.
    pub fn from_result(result: &ForecastResult) -> Result<Self, FormatError> {
        Ok(Self {
            predicted_revenue: result.formatted_revenue()?,
            confidence_score: result.formatted_confidence()?,
        })
    }
}

/// Everything a surface needs to draw the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub input: String,
    pub submit_label: &'static str,
    /// Input and submit control are disabled while loading.
    pub busy: bool,
    /// Text of the error region.
    pub error: Option<String>,
    pub result: Option<ResultView>,
}

impl FormView {
    pub fn from_form(form: &ForecastForm) -> Self {
        let busy = form.is_in_flight();
        let mut failure = form.state().error().map(str::to_string);
        let result = match form.state() {
            UiState::Success(result) => match ResultView::from_result(result) {
                Ok(view) => Some(view),
                Err(e) => {
                    warn!("Unable to format forecast result: {}", e);
                    failure = Some(e.to_string());
                    None
                }
            },
            _ => None,
        };

        Self {
            input: form.input().to_string(),
            submit_label: if busy { BUSY_LABEL } else { SUBMIT_LABEL },
            busy,
            error: form.notice().map(|notice| notice.to_string()).or(failure),
            result,
        }
    }
}

impl ForecastForm {
    pub fn view(&self) -> FormView {
        FormView::from_form(self)
    }
}
