//! Modular OCR engine abstraction.
//!
//! Defines the [`OcrEngine`] trait so the recognition backend (Tesseract in
//! production, a deterministic stub in tests) can be swapped without touching
//! the extraction pipeline.

pub mod tesseract;

use image::DynamicImage;

pub use tesseract::TesseractEngine;

/// Synchronous OCR backend: decoded image in, recognized text out.
///
/// The returned string carries whatever line breaks the engine's own layout
/// analysis produces. Engines report failures as plain errors; converting them
/// to user-facing text is the extractor's job, not the engine's.
pub trait OcrEngine {
    /// Engine identifier used in log output.
    fn name(&self) -> &'static str;

    /// Recognize all text in the image.
    fn recognize(&self, image: &DynamicImage) -> anyhow::Result<String>;
}
