//! `azcog sentiment` – sentiment analysis over a folder of comments.

use anyhow::Result;
use azcog_core::config::AzcogConfig;
use azcog_core::credentials::EndpointKey;
use azcog_core::http::HttpClient;
use azcog_core::sentiment::{self, SentimentClient};
use std::path::PathBuf;

pub fn run_sentiment(
    cfg: &AzcogConfig,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let input_dir = input.unwrap_or_else(|| cfg.sentiment.input_dir.clone());
    let output_dir = output.unwrap_or_else(|| cfg.sentiment.output_dir.clone());
    let client = SentimentClient::new(
        EndpointKey::text_analytics_from_env()?,
        HttpClient::from_config(&cfg.http),
    );

    let run = sentiment::run_folder(&client, &input_dir, &output_dir)?;
    for path in &run.skipped_empty {
        println!("Skipped empty file: {}", path.display());
    }
    for path in &run.written {
        println!("Saved: {}", path.display());
    }
    Ok(())
}
