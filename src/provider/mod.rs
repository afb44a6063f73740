//! Inference backend trait and the HTTP implementation.

pub mod http;
pub mod remote;

pub use remote::HttpInferenceClient;

use async_trait::async_trait;

use crate::error::StudioError;
use crate::types::SentimentPrediction;

/// The remote inference service, as seen by the screens.
///
/// Implementations are called off the UI task; they must not touch screen state.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Classify the sentiment of `text`.
    async fn predict_sentiment(&self, text: &str) -> Result<SentimentPrediction, StudioError>;

    /// Upload a raw camera photo and return the annotated frame's encoded bytes.
    async fn annotate_frame(&self, photo: &[u8]) -> Result<Vec<u8>, StudioError>;
}
