//! HTTP client for the `/lstmPredict` and `/video_feed` endpoints.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::http::{inference_headers, shared_client, status_to_error};
use super::InferenceBackend;
use crate::config::StudioConfig;
use crate::error::StudioError;
use crate::types::{
    DataUri, FrameRequest, FrameResponse, SentimentPrediction, SentimentRequest, SentimentResponse,
    JPEG_MIME, PNG_MIME,
};
use crate::util::timeout::with_timeout;

pub const SENTIMENT_PATH: &str = "/lstmPredict";
pub const FRAME_PATH: &str = "/video_feed";

/// Calls the inference service over HTTPS. No retries: a failed call is
/// reported once and the caller decides what to keep on screen.
#[derive(Debug, Clone)]
pub struct HttpInferenceClient {
    config: StudioConfig,
}

impl HttpInferenceClient {
    pub fn new(config: &StudioConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self::new(&StudioConfig::default().with_base_url(base_url))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, StudioError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        let headers = inference_headers(&self.config.bypass_value)?;

        with_timeout(self.config.request_timeout, async {
            let response = shared_client()
                .post(&url)
                .headers(headers)
                .json(body)
                .send()
                .await?;

            let status = response.status();
            tracing::debug!(status = status.as_u16(), %url, "Inference response");
            let text = response.text().await?;
            if !status.is_success() {
                return Err(status_to_error(status.as_u16(), &text));
            }
            Ok(serde_json::from_str(&text)?)
        })
        .await
    }
}

#[async_trait]
impl InferenceBackend for HttpInferenceClient {
    async fn predict_sentiment(&self, text: &str) -> Result<SentimentPrediction, StudioError> {
        let request = SentimentRequest {
            text: text.to_string(),
        };
        let response: SentimentResponse = self.post_json(SENTIMENT_PATH, &request).await?;
        SentimentPrediction::try_from(response)
    }

    async fn annotate_frame(&self, photo: &[u8]) -> Result<Vec<u8>, StudioError> {
        // The service expects the PNG prefix regardless of the camera's encoding.
        let request = FrameRequest {
            image: DataUri::encode(PNG_MIME, photo),
        };
        let response: FrameResponse = self.post_json(FRAME_PATH, &request).await?;
        DataUri::decode(&response.image, JPEG_MIME)
    }
}
