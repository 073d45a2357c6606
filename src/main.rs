// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Command line entry point: detect, crop and replay recorded gestures.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use receipt_crop::app::document::{RasterDocument, encode_jpeg, write_file};
use receipt_crop::app::view::crop::InputEvent;
use receipt_crop::app::{CropSelector, PointerOutcome};
use receipt_crop::config::AppConfig;
use receipt_crop::domain::geometry::Rect;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Config file (defaults to the platform config dir).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the proposed crop rectangle for an image.
    Detect {
        /// Captured receipt image.
        file: PathBuf,
    },
    /// Crop an image and write it as JPEG.
    Crop {
        /// Captured receipt image.
        file: PathBuf,
        /// Output path (defaults to the configured output dir and file name).
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Crop rectangle as x,y,width,height instead of the proposal.
        #[arg(long)]
        rect: Option<Rect>,
    },
    /// Replay a JSON array of pointer events, then crop.
    Replay {
        /// Captured receipt image.
        file: PathBuf,
        /// Recorded gesture file.
        gestures: PathBuf,
        /// Output path (defaults to the configured output dir and file name).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = AppConfig::load(args.config.as_deref());

    match args.command {
        Command::Detect { file } => detect(&config, &file),
        Command::Crop { file, output, rect } => crop(&config, &file, output, rect),
        Command::Replay {
            file,
            gestures,
            output,
        } => replay(&config, &file, &gestures, output),
    }
}

fn open_selector(config: &AppConfig, file: &Path) -> anyhow::Result<CropSelector> {
    let document = RasterDocument::open(file)?;
    Ok(CropSelector::new(document.into_pixels(), config))
}

fn detect(config: &AppConfig, file: &Path) -> anyhow::Result<()> {
    let selector = open_selector(config, file)?;
    let source = if selector.was_detected() {
        "detected"
    } else {
        "default"
    };
    println!("{} ({source})", selector.region());
    Ok(())
}

fn crop(
    config: &AppConfig,
    file: &Path,
    output: Option<PathBuf>,
    rect: Option<Rect>,
) -> anyhow::Result<()> {
    let mut selector = open_selector(config, file)?;
    if let Some(rect) = rect {
        selector.set_region(rect);
    }
    export(config, &selector, output)
}

fn replay(
    config: &AppConfig,
    file: &Path,
    gestures: &Path,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let text = fs::read_to_string(gestures)
        .with_context(|| format!("Failed to read {}", gestures.display()))?;
    let events: Vec<InputEvent> = serde_json::from_str(&text)
        .with_context(|| format!("Invalid gesture file {}", gestures.display()))?;

    let mut selector = open_selector(config, file)?;
    log::info!("Initial region {}", selector.region());

    for event in &events {
        match selector.handle_input(event).outcome {
            PointerOutcome::Ignored => log::debug!("Ignored {event:?}"),
            PointerOutcome::Started(mode) => log::info!("Drag started: {mode:?}"),
            PointerOutcome::Updated(rect) => log::debug!("Region {rect}"),
            PointerOutcome::Ended => log::info!("Drag ended: {}", selector.region()),
        }
    }

    export(config, &selector, output)
}

fn export(
    config: &AppConfig,
    selector: &CropSelector,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let path = match output {
        Some(path) => path,
        None => config
            .default_output_dir
            .clone()
            .unwrap_or_default()
            .join(&config.output_file_name),
    };

    let cropped = selector.commit()?;
    let jpeg = encode_jpeg(&cropped, config.jpeg_quality)?;
    write_file(&path, &jpeg)?;
    println!("{}", path.display());
    Ok(())
}
