//! qrdrop CLI
//!
//! Thin wrapper around qrdrop-core for command-line usage: the same
//! intake → upload → download workflow as the desktop window, without a UI.
//!
//! ## Usage
//!
//! ```bash
//! # Upload an image and save the generated QR code as ./qr.png
//! qrdrop generate photo.png
//!
//! # Choose the output path and the backend
//! qrdrop --endpoint http://qr.internal:8000/upload/ generate photo.png -o out/qr.png
//!
//! # Show which of several files would be picked up by the image filter
//! qrdrop check photo.png doc.pdf logo.webp
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use qrdrop_core::config::DEFAULT_ENDPOINT;
use qrdrop_core::logging::init_logging;
use qrdrop_core::{
    HttpQrGenerator, ImageFilter, PreviewStore, SelectedFile, UploadConfig, UploadOutcome,
    UploadWidget,
};

/// qrdrop - turn an image into a QR code
#[derive(Parser)]
#[command(name = "qrdrop")]
#[command(version = "0.1.0")]
#[command(about = "qrdrop - upload an image to the QR backend and save the result")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// QR backend upload endpoint
    #[arg(short, long, global = true, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload an image and save the generated QR code
    Generate {
        /// Image file to upload
        image: PathBuf,

        /// Where to save the QR code (default: the suggested filename, qr.png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run files through the image filter without uploading
    Check {
        /// Candidate files, in drop order
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = UploadConfig::with_endpoint(&cli.endpoint)?;

    match cli.command {
        Commands::Generate { image, output } => generate(&config, image, output).await,
        Commands::Check { files } => check(&config, files),
    }
}

async fn generate(config: &UploadConfig, image: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let file = SelectedFile::from_path(&image)
        .await
        .with_context(|| format!("Failed to read {}", image.display()))?;

    let mut widget = UploadWidget::new(config, PreviewStore::new());
    widget.filter().check(&file)?;
    widget.intake([file]);

    let generator = HttpQrGenerator::new(config);
    match widget.handle_upload(&generator).await {
        UploadOutcome::Succeeded => {}
        UploadOutcome::Failed(notice) => bail!("{}", notice.message),
        UploadOutcome::Skipped => bail!("Nothing to upload"),
    }

    let Some(artifact) = widget.download_artifact() else {
        bail!("Upload succeeded but no QR code is available");
    };

    let target = output.unwrap_or_else(|| PathBuf::from(&artifact.file_name));
    artifact
        .save_to(&target)
        .await
        .with_context(|| format!("Failed to write {}", target.display()))?;

    println!("QR code saved to {} ({} bytes)", target.display(), artifact.bytes.len());
    Ok(())
}

fn check(config: &UploadConfig, files: Vec<PathBuf>) -> Result<()> {
    let filter = ImageFilter::new(config.accept.clone());
    let mut selected = None;

    for path in &files {
        // Only the declared type matters, so a missing file can still be classified.
        let file = SelectedFile::from_dropped(path.to_string_lossy(), Vec::new());
        let accepted = filter.accepts(&file);
        println!(
            "{}  {} ({})",
            if accepted { "accepted" } else { "rejected" },
            path.display(),
            file.mime
        );
        if accepted && selected.is_none() {
            selected = Some(file.name);
        }
    }

    println!();
    match selected {
        Some(name) => println!("Selected: {}", name),
        None => println!("Selected: (none)"),
    }
    Ok(())
}
