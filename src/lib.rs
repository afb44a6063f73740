//! Sentiment Studio client.
//!
//! Two screens backed by a remote inference service: a text sentiment
//! predictor that sends a request once typing pauses, and a camera emotion
//! predictor that uploads a still photo and shows the annotated frame the
//! service returns. All inference happens server-side; this crate owns the
//! request dispatch, response decoding and screen state.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use sentiment_studio::prelude::*;
//!
//! # async fn example() -> sentiment_studio::error::Result<()> {
//! let config = StudioConfig::from_env()?;
//! let backend = Arc::new(HttpInferenceClient::new(&config));
//! let prediction = backend.predict_sentiment("What a lovely day").await?;
//! println!("{}: {:?}", prediction.label, prediction.probabilities.labels());
//! # Ok(())
//! # }
//! ```

pub mod camera;
pub mod config;
pub mod error;
pub mod frame;
pub mod prelude;
pub mod provider;
pub mod screen;
pub mod types;
pub mod util;

#[cfg(feature = "cli")]
pub mod cli;
