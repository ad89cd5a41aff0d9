pub mod forecast;
pub mod health;
pub mod interactive;

pub use forecast::forecast;
pub use health::health;
pub use interactive::interactive;

use std::io::Write;

use anyhow::Result;
use client::{ForecastClient, ForecastForm, FormView, PredictionTransport, SubmitOutcome, Trigger};
use tracing::{debug, trace};

use crate::render::render_view;

/// Submit the form once and render every state it passes through.
///
/// Returns the view left after the submission settled.
pub(crate) async fn run_submission<T, W>(
    client: &ForecastClient<T>,
    form: &mut ForecastForm,
    trigger: Trigger,
    out: &mut W,
) -> Result<FormView>
where
    T: PredictionTransport,
    W: Write,
{
    match form.submit(trigger) {
        SubmitOutcome::Dispatched(pending) => {
            render_view(&form.view(), out)?;
            trace!("Awaiting prediction service");
            let outcome = client.submit_forecast(pending.ad_spend()).await;
            form.complete(pending.ticket(), outcome);
        }
        SubmitOutcome::Invalid(reason) => {
            debug!(?reason, "Input rejected, no request issued");
        }
        SubmitOutcome::Busy => {
            debug!("Submission already in flight");
        }
    }

    let view = form.view();
    render_view(&view, out)?;
    Ok(view)
}
