//! Convenience re-exports for common use.

pub use crate::camera::{Camera, FileCamera};
pub use crate::config::StudioConfig;
pub use crate::error::{Result, StudioError};
pub use crate::frame::{DeviceOrientation, Rotation};
pub use crate::provider::{HttpInferenceClient, InferenceBackend};
pub use crate::screen::{
    EmotionInput, EmotionScreen, EmotionState, FrameSource, SentimentScreen, SentimentState,
    SentimentStatus,
};
pub use crate::types::{Probabilities, SentimentPrediction};
