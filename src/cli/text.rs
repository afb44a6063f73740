//! `studio text`: the sentiment screen on stdin/stdout.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, watch};

use crate::config::StudioConfig;
use crate::provider::HttpInferenceClient;
use crate::screen::{SentimentScreen, SentimentState};

/// Render the screen as plain text: status line, then probability rows
/// (blank rows while awaiting input or processing).
pub fn format_state(state: &SentimentState) -> String {
    let mut out = String::from(state.status.text());
    match state.probability_labels() {
        Some(labels) => {
            for label in labels {
                out.push('\n');
                out.push_str("  ");
                out.push_str(&label);
            }
        }
        None => out.push_str("\n\n\n"),
    }
    out
}

pub async fn handle_text(config: StudioConfig) -> Result<(), Box<dyn std::error::Error>> {
    let backend = Arc::new(HttpInferenceClient::new(&config));
    let screen = SentimentScreen::new(backend, &config);

    let (input_tx, input_rx) = mpsc::channel(16);
    let (render_tx, mut render_rx) = watch::channel(SentimentState::default());

    let screen_task = tokio::spawn(screen.run(input_rx, render_tx));
    let printer = tokio::spawn(async move {
        while render_rx.changed().await.is_ok() {
            let state = render_rx.borrow_and_update().clone();
            println!("{}\n", format_state(&state));
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if input_tx.send(line).await.is_err() {
            break;
        }
    }
    drop(input_tx);

    let final_state = screen_task.await?;
    printer.await?;
    tracing::info!(status = %final_state.status, "Sentiment session finished");
    Ok(())
}
