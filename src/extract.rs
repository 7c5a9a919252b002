//! Per-image text extraction.
//!
//! This is the error-conversion boundary of the pipeline: decode failures,
//! missing files, and engine failures are all converted to display text here,
//! so a bad image never aborts the batch.

use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use crate::ocr::OcrEngine;

/// Failures recovered inside the extractor. The display text is exactly what
/// ends up in the report for the affected image.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Error: Image file '{path}' not found.")]
    NotFound { path: String },
    #[error("Error: {message}")]
    Failed { message: String },
}

/// Extract text from one image, truncated to `max_length` characters when set
/// and positive. Zero, negative, or unset means no limit.
///
/// Always returns a displayable result; failures come back as their
/// [`ExtractError`] message instead of propagating.
pub fn extract_text(engine: &dyn OcrEngine, path: &Path, max_length: Option<i64>) -> String {
    match try_extract(engine, path) {
        Ok(text) => {
            info!(path = %path.display(), chars = text.chars().count(), "extracted text");
            truncate_chars(text, max_length)
        }
        Err(err) => {
            debug!(path = %path.display(), error = %err, "extraction failed");
            err.to_string()
        }
    }
}

fn try_extract(engine: &dyn OcrEngine, path: &Path) -> Result<String, ExtractError> {
    // The whole decoded image goes to the engine, no resizing or cleanup.
    let image = image::open(path).map_err(|err| match err {
        image::ImageError::IoError(ref io_err)
            if io_err.kind() == std::io::ErrorKind::NotFound =>
        {
            ExtractError::NotFound {
                path: path.display().to_string(),
            }
        }
        other => ExtractError::Failed {
            message: format!("{other:#}"),
        },
    })?;

    engine.recognize(&image).map_err(|err| ExtractError::Failed {
        message: format!("{err:#}"),
    })
}

/// Character-count truncation (not byte, not word-boundary aware).
fn truncate_chars(text: String, max_length: Option<i64>) -> String {
    match max_length {
        Some(limit) if limit > 0 => text.chars().take(limit as usize).collect(),
        _ => text,
    }
}
