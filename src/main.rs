//! Image Extractor - batch OCR text extraction over image files and directories.

mod cli;
mod extract;
mod ocr;
mod report;
mod resolver;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing; diagnostics go to stderr so the stdout report stays
    // clean.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "image_extractor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = cli::Cli::parse();
    cli::run(cli, &mut std::io::stdout().lock())
}
