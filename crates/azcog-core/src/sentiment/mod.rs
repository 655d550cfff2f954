//! Sentiment of comment files via Azure Text Analytics.
//!
//! Each `*.txt` file in the input folder is analyzed as one document and a
//! plain-text summary is written next to it in the output folder.

mod client;

pub use client::{
    ConfidenceScores, DocumentSentiment, SentimentAnalyzer, SentimentClient, SentimentOutcome,
};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// One-line mood for an overall sentiment label.
pub fn mood_summary(sentiment: &str) -> &'static str {
    match sentiment {
        "positive" => "The overall mood is optimistic and favorable.",
        "negative" => "The overall mood is critical or unfavorable.",
        _ => "The overall mood is neutral or mixed.",
    }
}

/// Output text for one input file.
pub fn format_outcome(file_name: &str, outcome: &SentimentOutcome) -> String {
    match outcome {
        SentimentOutcome::Failed { message } => {
            format!("Error processing {file_name}:\n{message}\n")
        }
        SentimentOutcome::Analyzed(doc) => {
            let s = &doc.confidence_scores;
            format!(
                "File: {}\nOverall Sentiment: {}\nScores:\n  Positive: {:.2}\n  Neutral : {:.2}\n  Negative: {:.2}\n\nSummary: {}\n",
                file_name,
                doc.sentiment,
                s.positive,
                s.neutral,
                s.negative,
                mood_summary(&doc.sentiment)
            )
        }
    }
}

/// `comment_42.txt` → `sentiment_42.txt`; other names are kept.
pub fn output_file_name(input_name: &str) -> String {
    input_name.replace("comment_", "sentiment_")
}

/// Result of a folder run.
#[derive(Debug, Default)]
pub struct SentimentRun {
    pub written: Vec<PathBuf>,
    pub skipped_empty: Vec<PathBuf>,
}

/// Analyzes every `*.txt` in `input_dir` and writes results into `output_dir`.
///
/// Fails when the input folder holds no `.txt` files. Empty files are skipped.
pub fn run_folder(
    analyzer: &dyn SentimentAnalyzer,
    input_dir: &Path,
    output_dir: &Path,
) -> Result<SentimentRun> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;

    let inputs = list_text_files(input_dir)?;
    if inputs.is_empty() {
        anyhow::bail!("no .txt files found in {}", input_dir.display());
    }

    let mut run = SentimentRun::default();
    for path in inputs {
        let text = fs::read_to_string(&path)
            .with_context(|| format!("read {}", path.display()))?;
        let text = text.trim();
        if text.is_empty() {
            tracing::info!("skipping {}: file is empty", path.display());
            run.skipped_empty.push(path);
            continue;
        }

        tracing::info!("processing {} as a single document", path.display());
        let outcome = analyzer
            .analyze(text)
            .with_context(|| format!("analyze {}", path.display()))?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let out_path = output_dir.join(output_file_name(&file_name));
        fs::write(&out_path, format_outcome(&file_name, &outcome))
            .with_context(|| format!("write {}", out_path.display()))?;
        tracing::debug!(output = %out_path.display(), "sentiment written");
        run.written.push(out_path);
    }
    Ok(run)
}

fn list_text_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == "txt") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
