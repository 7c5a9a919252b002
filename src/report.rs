//! Report assembly: runs the extractor over the resolved image list and
//! formats the per-image sections.

use std::path::PathBuf;

use crate::extract;
use crate::ocr::OcrEngine;

/// Process every image in order and assemble the final report.
///
/// One section per input path, never dropped: extraction errors appear in
/// place as their message text. Sections are joined by a single blank line.
pub fn process_images(
    engine: &dyn OcrEngine,
    image_paths: &[PathBuf],
    max_length: Option<i64>,
) -> String {
    let sections: Vec<String> = image_paths
        .iter()
        .map(|path| {
            let text = extract::extract_text(engine, path, max_length);
            format!("--- Processing: {} ---\n{}\n", path.display(), text)
        })
        .collect();

    sections.join("\n")
}
