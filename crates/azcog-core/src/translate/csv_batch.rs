//! Row-by-row translation of one CSV column into a new column.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::thread;
use std::time::Duration;

use super::client::{first_translation, TextTranslator};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// What to translate and where to put it.
#[derive(Debug, Clone)]
pub struct CsvJob<'a> {
    pub source_column: &'a str,
    pub target_column: &'a str,
    pub from: &'a str,
    pub to: &'a str,
    /// Pause between service calls.
    pub delay: Duration,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CsvRun {
    pub rows: usize,
    pub translated: usize,
    pub failed: usize,
}

/// Reads `input`, appends `job.target_column`, and writes `output` (UTF-8 with BOM).
///
/// A row whose translation fails or comes back malformed gets an empty cell.
/// Empty source cells are not sent.
pub fn translate_csv(
    translator: &dyn TextTranslator,
    input: &Path,
    output: &Path,
    job: &CsvJob<'_>,
) -> Result<CsvRun> {
    // Rows may be ragged; a missing source cell counts as empty.
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(input)
        .with_context(|| format!("open {}", input.display()))?;
    let headers = reader.headers()?.clone();
    let col = headers
        .iter()
        .position(|h| h.trim_start_matches('\u{feff}') == job.source_column)
        .with_context(|| {
            format!(
                "column '{}' not found in {}",
                job.source_column,
                input.display()
            )
        })?;

    let mut out_headers = headers.clone();
    out_headers.push_field(job.target_column);

    let mut rows = Vec::new();
    let mut run = CsvRun::default();
    for (i, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("read row {}", i + 1))?;
        if i > 0 && !job.delay.is_zero() {
            thread::sleep(job.delay);
        }
        let text = record.get(col).unwrap_or("");
        let translation = if text.trim().is_empty() {
            None
        } else {
            match translator.translate(&[text], job.from, &[job.to]) {
                Ok(value) => first_translation(&value),
                Err(e) => {
                    tracing::warn!(row = i + 1, "translation failed: {}", e);
                    None
                }
            }
        };

        run.rows += 1;
        match &translation {
            Some(_) => run.translated += 1,
            None => run.failed += 1,
        }
        let mut out = record.clone();
        while out.len() < headers.len() {
            out.push_field("");
        }
        out.push_field(translation.as_deref().unwrap_or(""));
        rows.push(out);
    }

    let mut file = File::create(output).with_context(|| format!("create {}", output.display()))?;
    file.write_all(UTF8_BOM)?;
    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(file);
    writer.write_record(&out_headers)?;
    for row in &rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    tracing::info!(
        rows = run.rows,
        translated = run.translated,
        failed = run.failed,
        "csv translation written to {}",
        output.display()
    );
    Ok(run)
}
