use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use client::{ForecastClient, ReqwestTransport};
use tokio::io::BufReader;

pub mod commands;

use crate::config::AppConfig;
use commands::{forecast, health, interactive};

#[derive(Parser)]
#[command(name = "forecaster")]
#[command(about = "Sales revenue forecaster: submit an ad spend and get a revenue forecast")]
#[command(version)]
pub struct Cli {
    /// Path to a configuration file
    ///
    /// TOML, YAML and JSON are accepted. Without this flag `forecaster.toml`
    /// (or .yaml/.json) in the working directory is used when present.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Prediction Service origin, e.g. http://localhost:8000
    ///
    /// Overrides `api_base_url` from the configuration file and the
    /// FORECASTER_API_BASE_URL environment variable.
    #[arg(long, global = true, env = "FORECASTER_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Request a single revenue forecast
    Forecast {
        /// Ad spend amount in US dollars
        #[arg(allow_hyphen_values = true)]
        ad_spend: String,
    },
    /// Prompt for ad spend values; press Enter to forecast, type `quit` to leave
    Interactive,
    /// Check that the Prediction Service is reachable
    Health,
}

impl Cli {
    /// Resolve configuration from file, environment and command-line overrides.
    pub fn load_config(&self) -> Result<AppConfig> {
        Ok(AppConfig::load(self.config.as_deref())?.with_api_base_url(self.api_url.clone()))
    }

    pub async fn run(self, config: AppConfig) -> Result<()> {
        let client = ForecastClient::new(ReqwestTransport::new(), config.api_base_url);
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        match self.command {
            Commands::Forecast { ad_spend } => {
                forecast(&client, &ad_spend, &mut out).await?;
            }
            Commands::Interactive => {
                let input = BufReader::new(tokio::io::stdin());
                interactive(&client, input, &mut out).await?;
            }
            Commands::Health => {
                health(&client, &mut out).await?;
            }
        }
        Ok(())
    }
}
