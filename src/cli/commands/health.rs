use std::io::Write;

use anyhow::{Result, bail};
use client::{ForecastClient, PredictionTransport};
use tracing::{error, info};

/// Query the Prediction Service health check and print its answer.
pub async fn health<T, W>(client: &ForecastClient<T>, out: &mut W) -> Result<()>
where
    T: PredictionTransport,
    W: Write,
{
    info!("Checking prediction service at {}", client.base_url());

    match client.check_health().await {
        Ok(status) => {
            writeln!(out, "{}: {} ({})", client.base_url(), status.status, status.message)?;
            if !status.is_healthy() {
                bail!("Prediction service reports status `{}`", status.status);
            }
            Ok(())
        }
        Err(e) => {
            error!("Health check failed: {}", e);
            writeln!(out, "{}: unreachable ({})", client.base_url(), e)?;
            Err(e.into())
        }
    }
}
