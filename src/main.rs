#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use qrdrop_core::config::DEFAULT_ENDPOINT;
use qrdrop_core::logging::init_logging;
use qrdrop_core::UploadConfig;

/// Global upload configuration, set from command line
static UPLOAD_CONFIG: OnceLock<UploadConfig> = OnceLock::new();

/// Get the upload configuration (set from command line or default)
pub fn get_upload_config() -> UploadConfig {
    UPLOAD_CONFIG.get().cloned().unwrap_or_default()
}

/// qrdrop - turn an image into a QR code via the QR backend
#[derive(Parser, Debug)]
#[command(name = "qrdrop-desktop")]
#[command(about = "qrdrop - upload an image and download the generated QR code")]
struct Args {
    /// QR backend upload endpoint
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose);

    let config = match UploadConfig::with_endpoint(&args.endpoint) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    };

    tracing::info!("Starting qrdrop with endpoint {}", config.endpoint);

    // Store configuration globally
    let _ = UPLOAD_CONFIG.set(config);

    // Window size: fits the card and a 256px preview without scrolling
    let window_width = 560.0;
    let window_height = 820.0;

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("QR Code Generator")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
