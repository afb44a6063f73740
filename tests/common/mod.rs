//! Shared test helpers: scripted backend, scripted camera, image fixtures.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

use sentiment_studio::camera::Camera;
use sentiment_studio::error::StudioError;
use sentiment_studio::provider::InferenceBackend;
use sentiment_studio::screen::{EmotionScreen, SentimentScreen};
use sentiment_studio::types::{Probabilities, SentimentPrediction};

type Scripted<T> = Mutex<VecDeque<(Duration, Result<T, StudioError>)>>;

/// A backend that records calls and replays queued results, each after an
/// optional delay.
#[derive(Default)]
pub struct MockBackend {
    sentiment_calls: Mutex<Vec<String>>,
    sentiment_results: Scripted<SentimentPrediction>,
    frame_calls: Mutex<Vec<Vec<u8>>>,
    frame_results: Scripted<Vec<u8>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_prediction(&self, label: &str, probabilities: [f64; 3]) {
        self.queue_prediction_after(Duration::ZERO, label, probabilities);
    }

    pub fn queue_prediction_after(&self, delay: Duration, label: &str, probabilities: [f64; 3]) {
        let [positive, neutral, negative] = probabilities;
        self.sentiment_results.lock().unwrap().push_back((
            delay,
            Ok(SentimentPrediction {
                label: label.to_string(),
                probabilities: Probabilities::new(positive, neutral, negative),
            }),
        ));
    }

    pub fn queue_sentiment_error(&self, error: StudioError) {
        self.sentiment_results
            .lock()
            .unwrap()
            .push_back((Duration::ZERO, Err(error)));
    }

    pub fn queue_frame(&self, bytes: Vec<u8>) {
        self.queue_frame_after(Duration::ZERO, bytes);
    }

    pub fn queue_frame_after(&self, delay: Duration, bytes: Vec<u8>) {
        self.frame_results.lock().unwrap().push_back((delay, Ok(bytes)));
    }

    pub fn queue_frame_error(&self, error: StudioError) {
        self.frame_results
            .lock()
            .unwrap()
            .push_back((Duration::ZERO, Err(error)));
    }

    pub fn sentiment_calls(&self) -> Vec<String> {
        self.sentiment_calls.lock().unwrap().clone()
    }

    pub fn frame_calls(&self) -> Vec<Vec<u8>> {
        self.frame_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceBackend for MockBackend {
    async fn predict_sentiment(&self, text: &str) -> Result<SentimentPrediction, StudioError> {
        self.sentiment_calls.lock().unwrap().push(text.to_string());
        let next = self.sentiment_results.lock().unwrap().pop_front();
        let (delay, result) = next.unwrap_or_else(|| {
            (
                Duration::ZERO,
                Err(StudioError::InvalidResponse("no scripted prediction".into())),
            )
        });
        tokio::time::sleep(delay).await;
        result
    }

    async fn annotate_frame(&self, photo: &[u8]) -> Result<Vec<u8>, StudioError> {
        self.frame_calls.lock().unwrap().push(photo.to_vec());
        let next = self.frame_results.lock().unwrap().pop_front();
        let (delay, result) = next.unwrap_or_else(|| {
            (
                Duration::ZERO,
                Err(StudioError::InvalidResponse("no scripted frame".into())),
            )
        });
        tokio::time::sleep(delay).await;
        result
    }
}

/// A camera with a fixed permission answer and photo.
pub struct MockCamera {
    granted: bool,
    photo: Vec<u8>,
    captures: AtomicUsize,
}

impl MockCamera {
    pub fn granted(photo: Vec<u8>) -> Self {
        Self {
            granted: true,
            photo,
            captures: AtomicUsize::new(0),
        }
    }

    pub fn denied() -> Self {
        Self {
            granted: false,
            photo: Vec::new(),
            captures: AtomicUsize::new(0),
        }
    }

    pub fn captures(&self) -> usize {
        self.captures.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Camera for MockCamera {
    async fn request_access(&self) -> bool {
        self.granted
    }

    async fn capture_still(&self) -> Result<Vec<u8>, StudioError> {
        self.captures.fetch_add(1, Ordering::SeqCst);
        Ok(self.photo.clone())
    }
}

/// Encode a solid-colour image of the given size.
pub fn encoded_image(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([40, 120, 200])));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), format)
        .expect("encode fixture");
    bytes
}

pub fn png(width: u32, height: u32) -> Vec<u8> {
    encoded_image(width, height, ImageFormat::Png)
}

pub fn jpeg(width: u32, height: u32) -> Vec<u8> {
    encoded_image(width, height, ImageFormat::Jpeg)
}

/// Apply internal events until no timer or request is outstanding.
pub async fn settle_sentiment(screen: &mut SentimentScreen) {
    while screen.is_busy() {
        let event = screen.next_event().await.expect("event channel open");
        screen.handle(event);
    }
}

pub async fn settle_emotion(screen: &mut EmotionScreen) {
    while screen.is_busy() {
        let event = screen.next_event().await.expect("event channel open");
        screen.handle(event);
    }
}
