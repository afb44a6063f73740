//! Sentiment Studio CLI binary entry point.

use clap::Parser;
use sentiment_studio::cli::{Cli, Commands};
use sentiment_studio::config::StudioConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match StudioConfig::from_env() {
        Ok(config) => {
            let config = cli.apply_to(config);
            match cli.command {
                Commands::Text => sentiment_studio::cli::text::handle_text(config).await,
                Commands::Emotion(args) => {
                    sentiment_studio::cli::emotion::handle_emotion(config, args).await
                }
            }
        }
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
