//! Path resolution: expands user-supplied file and directory arguments into a
//! flat, ordered list of image paths to process.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Filename suffixes accepted when expanding a directory. Explicitly named
/// files are never filtered.
const SUPPORTED_SUFFIXES: [&str; 5] = [".png", ".jpg", ".jpeg", ".bmp", ".tiff"];

/// Outcome of resolving the argument list.
///
/// `images` preserves argument order: each directory argument contributes a
/// contiguous, lexicographically sorted block at its position, while file
/// arguments pass through unsorted. `skipped` holds arguments that named
/// neither a file nor a directory, in the order they were encountered.
#[derive(Debug, Default)]
pub struct Resolution {
    pub images: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Expand the given paths into the list of images to run OCR on.
///
/// Invalid arguments are recorded in [`Resolution::skipped`] and never abort
/// resolution of the remaining arguments.
pub fn resolve_paths(paths: &[PathBuf]) -> Resolution {
    let mut resolution = Resolution::default();

    for path in paths {
        if path.is_dir() {
            let entries = image_files_in_dir(path);
            debug!(dir = %path.display(), count = entries.len(), "expanded directory");
            resolution.images.extend(entries);
        } else if path.is_file() {
            resolution.images.push(path.clone());
        } else {
            warn!(path = %path.display(), "argument is neither a file nor a directory");
            resolution.skipped.push(path.clone());
        }
    }

    resolution
}

/// List the image files directly inside `dir` (non-recursive), filtered to the
/// supported extensions and sorted lexicographically by filename.
fn image_files_in_dir(dir: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            // Unreadable directory degrades to an empty expansion, matching
            // the resolver's never-fatal contract.
            warn!(dir = %dir.display(), error = %err, "failed to list directory");
            return Vec::new();
        }
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| has_supported_suffix(name))
        .collect();
    names.sort();

    names.into_iter().map(|name| dir.join(name)).collect()
}

/// Suffix match rather than `Path::extension`, so a file named exactly
/// `.png` still counts as an image.
fn has_supported_suffix(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    SUPPORTED_SUFFIXES
        .iter()
        .any(|suffix| lower.ends_with(suffix))
}
