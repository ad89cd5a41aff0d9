use std::io::Write;

use anyhow::Result;
use client::{ForecastClient, ForecastForm, PredictionTransport, Trigger};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use super::run_submission;
use crate::render::{PROMPT, TITLE};

/// Prompt for ad spend values until `quit`, `exit` or end of input.
///
/// Each line is the form input followed by an Enter key press. The last
/// result stays on the form when a later line is rejected.
pub async fn interactive<T, R, W>(client: &ForecastClient<T>, input: R, out: &mut W) -> Result<()>
where
    T: PredictionTransport,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    info!("Interactive session against {}", client.base_url());
    writeln!(out, "{}", TITLE)?;
    writeln!(out, "Enter an ad spend amount and press Enter. Type `quit` to leave.")?;

    let mut form = ForecastForm::new();
    let mut lines = input.lines();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };
        let line = line.trim();
        if matches!(line, "quit" | "exit") {
            break;
        }

        debug!(input = line, "Line entered");
        form.set_input(line);
        run_submission(client, &mut form, Trigger::EnterKey, out).await?;
    }

    info!("Interactive session ended");
    Ok(())
}
