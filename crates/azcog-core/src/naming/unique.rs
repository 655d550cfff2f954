//! Collision avoidance against names already present in an output directory.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Returns `candidate` if unused, otherwise the first free `stem_N{extension}` (N = 1, 2, …).
///
/// `extension` is the one appended by [`derive_filename`](super::derive_filename),
/// so multi-dot extensions stay whole: `image.tar.gz` → `image_1.tar.gz`. If
/// `candidate` does not end with it, the extension is taken from the last `.`.
pub fn unique_filename_among(
    candidate: &str,
    extension: &str,
    existing: &HashSet<String>,
) -> String {
    if !existing.contains(candidate) {
        return candidate.to_string();
    }

    let (stem, ext) = match candidate.strip_suffix(extension) {
        Some(stem) if !extension.is_empty() && !stem.is_empty() => (stem, extension),
        _ => split_extension(candidate),
    };
    let mut counter: u32 = 1;
    loop {
        let name = format!("{stem}_{counter}{ext}");
        if !existing.contains(&name) {
            return name;
        }
        counter += 1;
    }
}

/// File names currently present in `dir`. A missing directory is an empty listing.
///
/// Re-query per file when writing incrementally: the listing grows as copies land.
pub fn existing_names_in(dir: &Path) -> io::Result<HashSet<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HashSet::new()),
        Err(e) => return Err(e),
    };

    let mut names = HashSet::new();
    for entry in entries {
        let entry = entry?;
        if let Some(name) = entry.file_name().to_str() {
            names.insert(name.to_string());
        }
    }
    Ok(names)
}

fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name.split_at(idx),
        _ => (name, ""),
    }
}
