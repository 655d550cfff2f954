//! `azcog name` – derive a filename from a saved analysis (offline).

use anyhow::{Context, Result};
use azcog_core::naming;
use azcog_core::vision::AnalysisResult;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub fn run_name(analysis: &Path, ext: &str, dir: Option<&Path>) -> Result<()> {
    let raw = fs::read_to_string(analysis)
        .with_context(|| format!("read {}", analysis.display()))?;
    let result: AnalysisResult = serde_json::from_str(&raw)
        .with_context(|| format!("parse analysis JSON in {}", analysis.display()))?;

    let ext = normalize_ext(ext);
    let candidate = naming::derive_filename(&result, &ext);
    let existing = match dir {
        Some(d) => naming::existing_names_in(d)
            .with_context(|| format!("list {}", d.display()))?,
        None => HashSet::new(),
    };
    println!("{}", naming::unique_filename_among(&candidate, &ext, &existing));
    Ok(())
}

/// `jpg` → `.jpg`; empty stays empty.
fn normalize_ext(ext: &str) -> String {
    if ext.is_empty() || ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}
