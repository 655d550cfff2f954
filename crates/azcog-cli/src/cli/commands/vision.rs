//! `azcog vision` – analyze a folder of images and save renamed copies.

use anyhow::Result;
use azcog_core::config::AzcogConfig;
use azcog_core::credentials::EndpointKey;
use azcog_core::http::HttpClient;
use azcog_core::vision::{self, VisionClient};
use std::path::PathBuf;

pub fn run_vision(cfg: &AzcogConfig, input: Option<PathBuf>) -> Result<()> {
    let images_dir = input.unwrap_or_else(|| cfg.vision.images_dir.clone());
    let client = VisionClient::new(
        EndpointKey::vision_from_env()?,
        HttpClient::from_config(&cfg.http),
    );

    let run = vision::run_folder(&client, &images_dir, &mut |line: &str| println!("{line}"))?;

    println!(
        "Processed {} image(s): {} saved, {} skipped.",
        run.processed(),
        run.saved.len(),
        run.skipped.len()
    );
    println!("Analysis results saved to: {}", run.report_path.display());
    println!("Renamed images saved to: {}", run.output_dir.display());
    Ok(())
}
