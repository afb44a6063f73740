//! Wire and domain types for the inference service.

pub mod data_uri;

pub use data_uri::{DataUri, JPEG_MIME, PNG_MIME};

use serde::{Deserialize, Serialize};

use crate::error::StudioError;

/// Body of `POST /lstmPredict`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentRequest {
    pub text: String,
}

/// Response of `POST /lstmPredict`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SentimentResponse {
    pub sentiment: String,
    /// Ordered `[positive, neutral, negative]`.
    pub probabilities: Vec<f64>,
}

/// Body of `POST /video_feed`; `image` is a PNG data URI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameRequest {
    pub image: String,
}

/// Response of `POST /video_feed`; `image` is a JPEG data URI.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FrameResponse {
    pub image: String,
}

/// Class probabilities of a sentiment prediction.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Probabilities {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

impl Probabilities {
    pub fn new(positive: f64, neutral: f64, negative: f64) -> Self {
        Self {
            positive,
            neutral,
            negative,
        }
    }

    /// Display labels in `[positive, neutral, negative]` order.
    pub fn labels(&self) -> [String; 3] {
        [
            format!("Positive: {:.2}%", self.positive * 100.0),
            format!("Neutral: {:.2}%", self.neutral * 100.0),
            format!("Negative: {:.2}%", self.negative * 100.0),
        ]
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.positive, self.neutral, self.negative]
    }
}

impl TryFrom<&[f64]> for Probabilities {
    type Error = StudioError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        match values {
            [positive, neutral, negative] => Ok(Self::new(*positive, *neutral, *negative)),
            _ => Err(StudioError::InvalidResponse(format!(
                "expected 3 probabilities, got {}",
                values.len()
            ))),
        }
    }
}

/// A decoded sentiment prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentPrediction {
    pub label: String,
    pub probabilities: Probabilities,
}

impl TryFrom<SentimentResponse> for SentimentPrediction {
    type Error = StudioError;

    fn try_from(response: SentimentResponse) -> Result<Self, Self::Error> {
        let probabilities = Probabilities::try_from(response.probabilities.as_slice())?;
        Ok(Self {
            label: response.sentiment,
            probabilities,
        })
    }
}
