//! Command-line surface and run orchestration.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::ocr::{OcrEngine, TesseractEngine};
use crate::{report, resolver};

/// Extract text from one or more images using OCR.
#[derive(Parser, Debug)]
#[command(name = "image-extractor", version, about)]
pub struct Cli {
    /// Path to an image file, multiple image files, or a directory containing images
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Maximum length of extracted text to display per image (default: no limit)
    #[arg(short = 'l', long = "max-length", allow_negative_numbers = true)]
    pub max_length: Option<i64>,
}

/// Resolve arguments, run the batch, and write the report to `out`.
///
/// Completes with success even when arguments were skipped or individual
/// images failed; those outcomes are part of the written output, not of the
/// exit status.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let engine = TesseractEngine::new();
    run_with_engine(&engine, cli, out)
}

fn run_with_engine(engine: &dyn OcrEngine, cli: Cli, out: &mut impl Write) -> Result<()> {
    let resolution = resolver::resolve_paths(&cli.paths);

    for skipped in &resolution.skipped {
        writeln!(
            out,
            "Warning: '{}' is not a valid file or directory. Skipping.",
            skipped.display()
        )?;
    }

    if resolution.images.is_empty() {
        writeln!(out, "Error: No valid image files found.")?;
        return Ok(());
    }

    info!(
        engine = engine.name(),
        images = resolution.images.len(),
        max_length = ?cli.max_length,
        "starting OCR batch"
    );

    let report = report::process_images(engine, &resolution.images, cli.max_length);
    writeln!(out, "{report}")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use image::DynamicImage;
    use tempfile::TempDir;

    /// Deterministic engine returning a fixed string for any image.
    struct FixedEngine(&'static str);

    impl OcrEngine for FixedEngine {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn recognize(&self, _image: &DynamicImage) -> anyhow::Result<String> {
            Ok(self.0.to_string())
        }
    }

    /// Engine that must never be reached.
    struct UnreachableEngine;

    impl OcrEngine for UnreachableEngine {
        fn name(&self) -> &'static str {
            "unreachable"
        }

        fn recognize(&self, _image: &DynamicImage) -> anyhow::Result<String> {
            unreachable!("no OCR call expected for this run");
        }
    }

    fn run_to_string(engine: &dyn OcrEngine, cli: Cli) -> String {
        let mut out = Vec::new();
        run_with_engine(engine, cli, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_max_length_short_and_long_forms() {
        let cli = Cli::try_parse_from(["image-extractor", "a.png", "-l", "10"]).unwrap();
        assert_eq!(cli.max_length, Some(10));

        let cli = Cli::try_parse_from(["image-extractor", "a.png", "--max-length", "10"]).unwrap();
        assert_eq!(cli.max_length, Some(10));

        let cli = Cli::try_parse_from(["image-extractor", "a.png", "-l", "-5"]).unwrap();
        assert_eq!(cli.max_length, Some(-5));

        let cli = Cli::try_parse_from(["image-extractor", "a.png"]).unwrap();
        assert_eq!(cli.max_length, None);
    }

    #[test]
    fn test_at_least_one_path_required() {
        assert!(Cli::try_parse_from(["image-extractor"]).is_err());
    }

    #[test]
    fn test_no_valid_images_warns_and_skips_ocr() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing.png");

        let cli =
            Cli::try_parse_from(["image-extractor", missing.to_str().unwrap()]).unwrap();
        let output = run_to_string(&UnreachableEngine, cli);

        assert_eq!(
            output,
            format!(
                "Warning: '{}' is not a valid file or directory. Skipping.\n\
                 Error: No valid image files found.\n",
                missing.display()
            )
        );
    }

    #[test]
    fn test_warnings_precede_report() {
        let tmp = TempDir::new().unwrap();
        let image_path = tmp.path().join("ok.png");
        image::RgbImage::new(2, 2).save(&image_path).unwrap();
        let missing = tmp.path().join("gone.png");

        let cli = Cli::try_parse_from([
            "image-extractor",
            image_path.to_str().unwrap(),
            missing.to_str().unwrap(),
        ])
        .unwrap();
        let output = run_to_string(&FixedEngine("hello"), cli);

        let warning = format!(
            "Warning: '{}' is not a valid file or directory. Skipping.",
            missing.display()
        );
        let header = format!("--- Processing: {} ---", image_path.display());
        assert!(output.find(&warning).unwrap() < output.find(&header).unwrap());
        assert!(output.contains("hello\n"));
    }

    #[test]
    fn test_multiple_paths_keep_order() {
        let cli = Cli::try_parse_from(["image-extractor", "b.png", "imgs", "a.png"]).unwrap();
        assert_eq!(
            cli.paths,
            vec![
                PathBuf::from("b.png"),
                PathBuf::from("imgs"),
                PathBuf::from("a.png")
            ]
        );
    }
}
