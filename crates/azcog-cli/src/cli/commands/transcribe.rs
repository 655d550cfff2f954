//! `azcog transcribe` – speech-to-text for a folder of WAV files.

use anyhow::Result;
use azcog_core::config::AzcogConfig;
use azcog_core::credentials::SpeechCredentials;
use azcog_core::http::HttpClient;
use azcog_core::speech::{self, SpeechClient};
use std::path::PathBuf;

pub fn run_transcribe(
    cfg: &AzcogConfig,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let audio_dir = input.unwrap_or_else(|| cfg.speech.audio_dir.clone());
    let output_dir = output.unwrap_or_else(|| cfg.speech.output_dir.clone());
    let client = SpeechClient::new(
        SpeechCredentials::from_env()?,
        cfg.speech.endpoint.as_deref(),
        HttpClient::from_config(&cfg.http),
    );

    let run = speech::run_folder(
        &client,
        &audio_dir,
        &output_dir,
        &cfg.speech.languages,
        &mut |line: &str| println!("{line}"),
    )?;
    if run.outputs.is_empty() {
        println!("No .wav files found in {}", audio_dir.display());
    }
    Ok(())
}
