//! Camera emotion screen: capture, upload, render the annotated frame.

use std::sync::Arc;

use image::DynamicImage;
use tokio::sync::{mpsc, watch};

use crate::camera::Camera;
use crate::config::StudioConfig;
use crate::error::StudioError;
use crate::frame::{decode_frame, render_frame, DeviceOrientation};
use crate::provider::InferenceBackend;

/// Where the displayed image came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSource {
    /// The raw photo, shown while the service processes it.
    Captured,
    /// The cropped and rotated frame returned by the service.
    Annotated,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayedFrame {
    pub image: DynamicImage,
    pub source: FrameSource,
}

/// Everything the emotion screen renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmotionState {
    pub displayed: Option<DisplayedFrame>,
    pub orientation: DeviceOrientation,
    /// Rotation applied to the live preview layer, in degrees.
    pub preview_rotation_degrees: f64,
}

/// User-facing inputs of the emotion screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmotionInput {
    Capture,
    Orientation(DeviceOrientation),
}

/// A still photo: the encoded bytes for upload and the decoded preview.
#[derive(Debug)]
pub struct CapturedPhoto {
    pub bytes: Vec<u8>,
    pub image: DynamicImage,
}

#[derive(Debug)]
pub enum EmotionEvent {
    CaptureRequested,
    OrientationChanged(DeviceOrientation),
    PhotoCaptured {
        generation: u64,
        result: Result<CapturedPhoto, StudioError>,
    },
    FrameAnnotated {
        generation: u64,
        result: Result<DynamicImage, StudioError>,
    },
}

impl From<EmotionInput> for EmotionEvent {
    fn from(input: EmotionInput) -> Self {
        match input {
            EmotionInput::Capture => Self::CaptureRequested,
            EmotionInput::Orientation(orientation) => Self::OrientationChanged(orientation),
        }
    }
}

/// Controller for the emotion screen. Same ownership rules as the
/// sentiment screen: only [`EmotionScreen::handle`] mutates state.
pub struct EmotionScreen {
    backend: Arc<dyn InferenceBackend>,
    camera: Arc<dyn Camera>,
    crop_size: u32,
    state: EmotionState,
    generation: u64,
    in_flight: usize,
    events_tx: mpsc::UnboundedSender<EmotionEvent>,
    events_rx: mpsc::UnboundedReceiver<EmotionEvent>,
}

impl EmotionScreen {
    pub fn new(
        backend: Arc<dyn InferenceBackend>,
        camera: Arc<dyn Camera>,
        config: &StudioConfig,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            backend,
            camera,
            crop_size: config.crop_size,
            state: EmotionState::default(),
            generation: 0,
            in_flight: 0,
            events_tx,
            events_rx,
        }
    }

    pub fn state(&self) -> &EmotionState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a capture or an upload is outstanding.
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    pub async fn next_event(&mut self) -> Option<EmotionEvent> {
        self.events_rx.recv().await
    }

    pub fn handle(&mut self, event: EmotionEvent) {
        match event {
            EmotionEvent::CaptureRequested => self.capture_requested(),
            EmotionEvent::OrientationChanged(orientation) => self.orientation_changed(orientation),
            EmotionEvent::PhotoCaptured { generation, result } => {
                self.photo_captured(generation, result)
            }
            EmotionEvent::FrameAnnotated { generation, result } => {
                self.frame_annotated(generation, result)
            }
        }
    }

    /// Drive the screen until `inputs` closes and outstanding work has
    /// settled, publishing every state change on `render`.
    pub async fn run(
        mut self,
        mut inputs: mpsc::Receiver<EmotionInput>,
        render: watch::Sender<EmotionState>,
    ) -> EmotionState {
        let mut inputs_open = true;
        loop {
            if !inputs_open && !self.is_busy() {
                break;
            }

            let event = tokio::select! {
                input = inputs.recv(), if inputs_open => match input {
                    Some(input) => EmotionEvent::from(input),
                    None => {
                        inputs_open = false;
                        continue;
                    }
                },
                Some(event) = self.events_rx.recv() => event,
                else => break,
            };

            self.handle(event);
            let state = &self.state;
            render.send_if_modified(|current| {
                if current == state {
                    return false;
                }
                *current = state.clone();
                true
            });
        }
        self.state
    }

    fn capture_requested(&mut self) {
        self.generation += 1;
        self.in_flight += 1;

        let generation = self.generation;
        let camera = self.camera.clone();
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            let result = if camera.request_access().await {
                capture_photo(camera.as_ref()).await
            } else {
                Err(StudioError::PermissionDenied)
            };
            let _ = events.send(EmotionEvent::PhotoCaptured { generation, result });
        });
    }

    fn orientation_changed(&mut self, orientation: DeviceOrientation) {
        self.state.orientation = orientation;
        if let Some(rotation) = orientation.rotation() {
            self.state.preview_rotation_degrees = rotation.preview_degrees();
        }
    }

    fn photo_captured(&mut self, generation: u64, result: Result<CapturedPhoto, StudioError>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "Discarding stale photo");
            return;
        }

        let CapturedPhoto { bytes, image } = match result {
            Ok(photo) => photo,
            Err(StudioError::PermissionDenied) => {
                tracing::warn!("Camera access denied");
                return;
            }
            Err(e) => {
                tracing::warn!(error = %e, category = ?e.category(), "Photo capture failed");
                return;
            }
        };

        self.state.displayed = Some(DisplayedFrame {
            image,
            source: FrameSource::Captured,
        });

        self.in_flight += 1;
        let backend = self.backend.clone();
        let events = self.events_tx.clone();
        tracing::debug!(generation, bytes = bytes.len(), "Uploading frame");
        tokio::spawn(async move {
            let result = match backend.annotate_frame(&bytes).await {
                Ok(bytes) => decode_frame(&bytes),
                Err(e) => Err(e),
            };
            let _ = events.send(EmotionEvent::FrameAnnotated { generation, result });
        });
    }

    fn frame_annotated(&mut self, generation: u64, result: Result<DynamicImage, StudioError>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "Discarding stale frame");
            return;
        }

        let rendered = result
            .and_then(|frame| render_frame(&frame, self.crop_size, self.state.orientation));
        match rendered {
            Ok(image) => {
                self.state.displayed = Some(DisplayedFrame {
                    image,
                    source: FrameSource::Annotated,
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, category = ?e.category(), "Annotated frame rejected");
            }
        }
    }
}

/// Take a still and decode it, off the screen's task.
async fn capture_photo(camera: &dyn Camera) -> Result<CapturedPhoto, StudioError> {
    let bytes = camera.capture_still().await?;
    let image = decode_frame(&bytes)?;
    Ok(CapturedPhoto { bytes, image })
}
