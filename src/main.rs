//! pixabay-rs command line
//!
//! Runs a single image or video search and prints the JSON response.

use anyhow::{bail, Result};
use pixabay_rs::{config::Settings, ImageSearch, PixabayClient, VideoSearch};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return Ok(());
    }
    if args.iter().any(|a| a == "-V" || a == "--version") {
        println!("pixabay-rs {}", pixabay_rs::VERSION);
        return Ok(());
    }

    let kind = match args.first().map(String::as_str) {
        Some("images") | Some("videos") => args.remove(0),
        _ => "images".to_string(),
    };
    let query = args.join(" ");

    let settings = load_settings()?;
    let client = PixabayClient::with_settings(&settings)?;

    let result = if kind == "videos" {
        let mut search = VideoSearch::new();
        if !query.is_empty() {
            search = search.query(query);
        }
        client.search_videos(&search).await?
    } else {
        let mut search = ImageSearch::new();
        if !query.is_empty() {
            search = search.query(query);
        }
        client.search_images(&search).await?
    };

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Load settings from file or use defaults
fn load_settings() -> Result<Settings> {
    // Check environment variable first
    if let Ok(path) = std::env::var("PIXABAY_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if !path.exists() {
            bail!("settings file not found: {}", path.display());
        }
        info!("Loading settings from: {}", path.display());
        let mut settings = Settings::from_file(&path)?;
        settings.merge_env();
        return Ok(settings);
    }

    let mut paths = vec![PathBuf::from("pixabay.yml")];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("pixabay-rs/settings.yml"));
    }

    for path in paths.iter() {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    info!("No settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}

/// Print usage information
fn print_usage() {
    println!(
        r#"
pixabay-rs v{}
Search Pixabay images and videos from the command line

USAGE:
    pixabay-rs [images|videos] [QUERY...]

OPTIONS:
    -h, --help             Print help information
    -V, --version          Print version information

ENVIRONMENT VARIABLES:
    PIXABAY_SETTINGS_PATH  Path to settings.yml
    PIXABAY_API_KEY        API key (overrides the settings file)
    PIXABAY_BASE_URL       Search endpoint
    PIXABAY_VALIDATE       Check filter values locally (true/false)
    RUST_LOG               Log filter, e.g. pixabay_rs=debug
"#,
        pixabay_rs::VERSION
    );
}
