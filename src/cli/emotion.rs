//! `studio emotion`: one capture through the emotion screen.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use super::EmotionArgs;
use crate::camera::FileCamera;
use crate::config::StudioConfig;
use crate::provider::HttpInferenceClient;
use crate::screen::{EmotionInput, EmotionScreen, EmotionState, FrameSource};

pub async fn handle_emotion(
    config: StudioConfig,
    args: EmotionArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let backend = Arc::new(HttpInferenceClient::new(&config));
    let camera = Arc::new(FileCamera::new(&args.photo));
    let screen = EmotionScreen::new(backend, camera, &config);

    let (input_tx, input_rx) = mpsc::channel(4);
    let (render_tx, _render_rx) = watch::channel(EmotionState::default());

    input_tx
        .send(EmotionInput::Orientation(args.orientation))
        .await?;
    input_tx.send(EmotionInput::Capture).await?;
    drop(input_tx);

    let state = screen.run(input_rx, render_tx).await;
    match state.displayed {
        Some(frame) if frame.source == FrameSource::Annotated => {
            frame.image.save(&args.out)?;
            println!(
                "Saved {}x{} annotated frame to {}",
                frame.image.width(),
                frame.image.height(),
                args.out.display()
            );
            Ok(())
        }
        _ => Err("No annotated frame received; see log for details".into()),
    }
}
