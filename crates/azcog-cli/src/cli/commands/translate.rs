//! `azcog translate` – translate one text into one or more languages.

use anyhow::Result;
use azcog_core::config::AzcogConfig;
use azcog_core::credentials::TranslatorCredentials;
use azcog_core::http::HttpClient;
use azcog_core::translate::{self, TextTranslator, TranslatorClient};

pub fn run_translate(
    cfg: &AzcogConfig,
    text: &str,
    from: Option<String>,
    to: Vec<String>,
) -> Result<()> {
    let from = from.unwrap_or_else(|| cfg.translate.from.clone());
    let targets = if to.is_empty() {
        cfg.translate.to.clone()
    } else {
        to
    };
    if targets.is_empty() {
        anyhow::bail!("no target language given (use --to or set translate.to in config)");
    }

    let client = TranslatorClient::new(
        TranslatorCredentials::from_env()?,
        HttpClient::from_config(&cfg.http),
    );
    let targets: Vec<&str> = targets.iter().map(String::as_str).collect();
    let response = client.translate(&[text], &from, &targets)?;
    println!("{}", translate::to_pretty_json(&response)?);
    Ok(())
}
