//! CLI front-end for the two screens.

pub mod emotion;
pub mod text;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::StudioConfig;
use crate::frame::DeviceOrientation;

/// Sentiment Studio CLI
#[derive(Parser, Debug)]
#[command(name = "studio", version, about = "Sentiment Studio inference client")]
pub struct Cli {
    /// Override the inference service URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands, one per screen.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sentiment predictor: each stdin line replaces the text field
    Text,
    /// Emotion predictor: upload one photo and save the annotated frame
    Emotion(EmotionArgs),
}

/// Arguments for the `emotion` subcommand.
#[derive(Parser, Debug)]
pub struct EmotionArgs {
    /// Photo to serve as the camera capture
    #[arg(long)]
    pub photo: PathBuf,

    /// Device orientation used to rotate the returned frame
    #[arg(long, default_value = "portrait")]
    pub orientation: DeviceOrientation,

    /// Where to write the annotated frame (format from the extension)
    #[arg(long, default_value = "annotated.png")]
    pub out: PathBuf,
}

impl Cli {
    /// Apply CLI overrides on top of an environment-derived config.
    pub fn apply_to(&self, mut config: StudioConfig) -> StudioConfig {
        if let Some(url) = &self.base_url {
            config.base_url = url.clone();
        }
        config
    }
}
