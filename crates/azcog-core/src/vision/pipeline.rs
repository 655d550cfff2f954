//! Folder run: analyze every image, report, and save a renamed copy.
//!
//! Layout under the input folder:
//! - `analysis/analysis_results.txt` – the report
//! - `analysis/updated_images/` – renamed copies

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::client::{ImageAnalyzer, VisionError};
use super::report::report_lines;
use crate::naming;

pub const ANALYSIS_DIR: &str = "analysis";
pub const UPDATED_IMAGES_DIR: &str = "updated_images";
pub const REPORT_FILE: &str = "analysis_results.txt";

/// Outcome of one folder run.
#[derive(Debug, Default)]
pub struct VisionRun {
    /// `(source file name, saved file name)` in processing order.
    pub saved: Vec<(String, String)>,
    /// Source file names that were skipped.
    pub skipped: Vec<String>,
    pub report_path: PathBuf,
    pub output_dir: PathBuf,
}

impl VisionRun {
    pub fn processed(&self) -> usize {
        self.saved.len() + self.skipped.len()
    }
}

/// Collects report lines and echoes them as they are produced.
struct Report<'a> {
    lines: Vec<String>,
    echo: &'a mut dyn FnMut(&str),
}

impl Report<'_> {
    fn line(&mut self, text: String) {
        (self.echo)(&text);
        self.lines.push(text);
    }

    /// Separator between images; written to the file only.
    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn contents(&self) -> String {
        let mut s = String::new();
        for line in &self.lines {
            s.push_str(line);
            s.push('\n');
        }
        s
    }
}

/// Runs the analysis over every regular file directly inside `images_dir`.
///
/// Files are processed in name order. A failing image is reported as skipped
/// and the run continues. `echo` receives each report line as it is produced.
pub fn run_folder(
    analyzer: &dyn ImageAnalyzer,
    images_dir: &Path,
    echo: &mut dyn FnMut(&str),
) -> Result<VisionRun> {
    let analysis_dir = images_dir.join(ANALYSIS_DIR);
    let output_dir = analysis_dir.join(UPDATED_IMAGES_DIR);
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;

    let images = list_images(images_dir)?;
    tracing::info!(
        dir = %images_dir.display(),
        count = images.len(),
        "starting vision run"
    );

    let mut report = Report {
        lines: Vec::new(),
        echo,
    };
    let mut run = VisionRun {
        output_dir: output_dir.clone(),
        report_path: analysis_dir.join(REPORT_FILE),
        ..Default::default()
    };

    for path in images {
        let name = file_name_string(&path);
        report.line(format!("Processing image: {name}"));

        match process_image(analyzer, &path, &output_dir, &mut report) {
            Ok(saved_as) => {
                report.line(format!(" Image saved as: {saved_as}"));
                tracing::debug!(source = %name, saved = %saved_as, "image renamed");
                run.saved.push((name, saved_as));
            }
            Err(e) => {
                let msg = skip_message(&e);
                tracing::warn!(source = %name, "skipped: {:#}", e);
                report.line(msg);
                run.skipped.push(name);
            }
        }
        report.blank();
    }

    fs::write(&run.report_path, report.contents())
        .with_context(|| format!("write {}", run.report_path.display()))?;
    tracing::info!(
        saved = run.saved.len(),
        skipped = run.skipped.len(),
        "vision run finished"
    );
    Ok(run)
}

fn process_image(
    analyzer: &dyn ImageAnalyzer,
    path: &Path,
    output_dir: &Path,
    report: &mut Report<'_>,
) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let analysis = analyzer.analyze(&bytes)?;

    for line in report_lines(&analysis) {
        report.line(line);
    }

    let extension = extension_of(path);
    let candidate = naming::derive_filename(&analysis, &extension);
    // Listing is re-read per image so earlier copies in this run count.
    let existing = naming::existing_names_in(output_dir)
        .with_context(|| format!("list {}", output_dir.display()))?;
    let final_name = naming::unique_filename_among(&candidate, &extension, &existing);

    let dest = output_dir.join(&final_name);
    fs::copy(path, &dest)
        .with_context(|| format!("copy {} to {}", path.display(), dest.display()))?;
    Ok(final_name)
}

fn skip_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<VisionError>() {
        Some(VisionError::Service { message, .. }) => format!(
            "  Skipped: Invalid image or unsupported format. ({message})"
        ),
        _ => format!("  Skipped: Unexpected error: {err:#}"),
    }
}

/// `.ext` of the source file with its original case, or empty.
fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default()
}

fn file_name_string(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn list_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
