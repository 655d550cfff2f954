//! `azcog translate-csv` – translate a CSV column row by row.

use anyhow::Result;
use azcog_core::config::AzcogConfig;
use azcog_core::credentials::TranslatorCredentials;
use azcog_core::http::HttpClient;
use azcog_core::translate::{self, CsvJob, TranslatorClient};
use std::path::PathBuf;
use std::time::Duration;

pub fn run_translate_csv(
    cfg: &AzcogConfig,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    to: Option<String>,
    column: Option<String>,
) -> Result<()> {
    let csv_cfg = &cfg.translate_csv;
    let input = input.unwrap_or_else(|| csv_cfg.input.clone());
    let output = output.unwrap_or_else(|| csv_cfg.output.clone());
    let to = to.unwrap_or_else(|| csv_cfg.to.clone());
    let column = column.unwrap_or_else(|| csv_cfg.source_column.clone());

    let client = TranslatorClient::new(
        TranslatorCredentials::csv_from_env()?,
        HttpClient::from_config(&cfg.http),
    );
    let job = CsvJob {
        source_column: &column,
        target_column: &csv_cfg.target_column,
        from: &csv_cfg.from,
        to: &to,
        delay: Duration::from_millis(csv_cfg.delay_ms),
    };

    println!("Translating {} ...", input.display());
    let run = translate::translate_csv(&client, &input, &output, &job)?;
    println!(
        "Translated {} of {} row(s) ({} failed).",
        run.translated, run.rows, run.failed
    );
    println!("Translation complete. File saved as '{}'.", output.display());
    Ok(())
}
