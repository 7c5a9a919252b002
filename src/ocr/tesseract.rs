//! Tesseract OCR backend.

use anyhow::{Context, Result};
use image::DynamicImage;
use rusty_tesseract::{Args, Image as TesseractImage};
use tracing::debug;

use super::OcrEngine;

/// Production engine backed by the system Tesseract installation via
/// `rusty-tesseract`. Holds no state; every call is independent.
pub struct TesseractEngine;

impl TesseractEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TesseractEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrEngine for TesseractEngine {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    fn recognize(&self, image: &DynamicImage) -> Result<String> {
        debug!(
            width = image.width(),
            height = image.height(),
            "running tesseract on image"
        );

        let tesseract_image = TesseractImage::from_dynamic_image(image)
            .context("Failed to prepare image for Tesseract")?;

        // Default args: default language, no DPI/PSM/OEM overrides. Backend
        // selection and language tuning are out of scope.
        let text = rusty_tesseract::image_to_string(&tesseract_image, &Args::default())
            .context("Tesseract recognition failed")?;

        debug!(chars = text.len(), "tesseract recognition complete");
        Ok(text)
    }
}
