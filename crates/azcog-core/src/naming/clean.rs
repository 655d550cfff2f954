//! Filename stem normalization.

/// Normalizes text into a filename stem.
///
/// - Lowercases the input
/// - Replaces every run of characters outside `[a-z0-9]` with a single `_`
/// - Strips leading/trailing underscores
///
/// Non-ASCII letters count as "outside" and collapse into the separator, so
/// the result is always ASCII.
pub fn clean_filename(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push('_');
            in_run = true;
        }
    }

    out.trim_matches('_').to_string()
}
