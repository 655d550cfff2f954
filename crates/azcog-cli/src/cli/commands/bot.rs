//! `azcog bot` – one Direct Line exchange.

use anyhow::Result;
use azcog_core::bot::DirectLineClient;
use azcog_core::config::AzcogConfig;
use azcog_core::credentials::DirectLineSecret;
use azcog_core::http::HttpClient;

pub fn run_bot(cfg: &AzcogConfig, message: &str) -> Result<()> {
    let client = DirectLineClient::new(
        DirectLineSecret::from_env()?,
        &cfg.bot,
        HttpClient::from_config(&cfg.http),
    );

    let exchange = client.converse(message, &mut |line: &str| println!("{line}"))?;
    if exchange.replies.is_empty() {
        println!("No reply from bot.");
    }
    for reply in &exchange.replies {
        println!("Bot replied: {reply}");
    }
    Ok(())
}
