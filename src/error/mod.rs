//! Error types for Sentiment Studio.

use thiserror::Error;

/// Primary error type for all client operations.
#[derive(Error, Debug)]
pub enum StudioError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Unexpected data URI prefix, expected {expected}")]
    DataUriPrefix { expected: String },

    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Crop of {size}x{size} produced no region in a {width}x{height} image")]
    EmptyCrop { width: u32, height: u32, size: u32 },

    #[error("Camera access denied")]
    PermissionDenied,

    #[error("Timeout after {0}ms")]
    Timeout(u64),
}

/// Broad error category, used for log routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Timeout,
    Server,
    Api,
    Configuration,
    Serialization,
    Payload,
    Permission,
    Unknown,
}

impl StudioError {
    /// Create an API error from a status code and response body.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Network(_) => ErrorCategory::Network,
            Self::Timeout(_) => ErrorCategory::Timeout,
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::Serialization(_) | Self::InvalidResponse(_) => ErrorCategory::Serialization,
            Self::Api { status, .. } => match status {
                500..=599 => ErrorCategory::Server,
                _ => ErrorCategory::Api,
            },
            Self::DataUriPrefix { .. }
            | Self::Base64(_)
            | Self::Image(_)
            | Self::EmptyCrop { .. } => ErrorCategory::Payload,
            Self::PermissionDenied => ErrorCategory::Permission,
            Self::Io(_) => ErrorCategory::Unknown,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, StudioError>;
