//! Filename derivation from image analysis results.
//!
//! Picks a human-readable stem from the analysis using a fixed priority
//! chain (objects, categories, tags, caption, default), normalizes it, and
//! resolves collisions against the names already present in the output
//! directory.

mod clean;
mod unique;

pub use clean::clean_filename;
pub use unique::{existing_names_in, unique_filename_among};

use crate::vision::AnalysisResult;

/// Stem used when no rule yields anything.
pub const DEFAULT_STEM: &str = "image";

/// Tags too generic to name an image after.
pub const TAG_STOPLIST: [&str; 8] = [
    "indoor", "outdoor", "person", "people", "man", "woman", "street", "road",
];

const MAX_TAGS: usize = 3;
const MAX_CAPTION_WORDS: usize = 3;

/// Derives a filename (stem + `extension`) for an analyzed image.
///
/// First matching rule wins:
/// 1. highest-confidence object label
/// 2. highest-score category name
/// 3. first three non-stoplisted tags, joined with `_`
/// 4. first three words of the first caption, joined with `_`
/// 5. `image`
///
/// Ties keep the first entry in service order. `extension` includes the
/// leading dot (e.g. `.jpg`) and is appended unchanged.
///
/// # Examples
///
/// - objects `[("Dog", 0.7), ("Cat", 0.9)]` with `.jpg` → `"cat.jpg"`
/// - tags `["indoor", "Sofa", "Cushion"]` with `.png` → `"sofa_cushion.png"`
pub fn derive_filename(result: &AnalysisResult, extension: &str) -> String {
    let stem = clean_filename(&base_name(result));
    if stem.is_empty() {
        format!("{DEFAULT_STEM}{extension}")
    } else {
        format!("{stem}{extension}")
    }
}

fn base_name(result: &AnalysisResult) -> String {
    if let Some(obj) = first_max_by(&result.objects, |o| o.confidence) {
        return obj.label.clone();
    }

    if let Some(cat) = first_max_by(&result.categories, |c| c.score) {
        return cat.name.clone();
    }

    let kept: Vec<&str> = result
        .tags
        .iter()
        .map(|t| t.name.as_str())
        .filter(|name| !TAG_STOPLIST.contains(name))
        .take(MAX_TAGS)
        .collect();
    if !kept.is_empty() {
        return kept.join("_");
    }

    if let Some(caption) = result.captions().first() {
        let words: Vec<&str> = caption
            .text
            .split_whitespace()
            .take(MAX_CAPTION_WORDS)
            .collect();
        return words.join("_");
    }

    DEFAULT_STEM.to_string()
}

/// Like `Iterator::max_by` but keeps the first of equal maxima.
fn first_max_by<T>(items: &[T], key: impl Fn(&T) -> f64) -> Option<&T> {
    let mut best: Option<(&T, f64)> = None;
    for item in items {
        let k = key(item);
        let replace = match best {
            None => true,
            Some((_, best_k)) => k > best_k || best_k.is_nan(),
        };
        if replace {
            best = Some((item, k));
        }
    }
    best.map(|(item, _)| item)
}
