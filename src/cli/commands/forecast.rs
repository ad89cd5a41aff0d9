use std::io::Write;

use anyhow::{Result, bail};
use client::{ForecastClient, ForecastForm, PredictionTransport, Trigger};
use tracing::{debug, info};

use super::run_submission;

/// Validate `ad_spend`, request one forecast and print the outcome.
///
/// Fails after printing the error region when validation or the request fails.
pub async fn forecast<T, W>(client: &ForecastClient<T>, ad_spend: &str, out: &mut W) -> Result<()>
where
    T: PredictionTransport,
    W: Write,
{
    info!("Requesting forecast from {}", client.base_url());
    debug!(ad_spend, "Raw ad spend input");

    let mut form = ForecastForm::new();
    form.set_input(ad_spend);
    let view = run_submission(client, &mut form, Trigger::Button, out).await?;

    if let Some(error) = view.error {
        bail!(error);
    }
    Ok(())
}
