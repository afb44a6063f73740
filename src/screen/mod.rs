//! Screen controllers. Each owns its state and is driven by events on a
//! single task; front-ends feed inputs in and render published state.

pub mod emotion;
pub mod sentiment;

pub use emotion::{
    CapturedPhoto, DisplayedFrame, EmotionEvent, EmotionInput, EmotionScreen, EmotionState,
    FrameSource,
};
pub use sentiment::{SentimentEvent, SentimentScreen, SentimentState, SentimentStatus};
