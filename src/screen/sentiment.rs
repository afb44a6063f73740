//! Text sentiment screen: debounced predict-on-type.

use std::fmt;
use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::config::StudioConfig;
use crate::error::StudioError;
use crate::provider::InferenceBackend;
use crate::types::{Probabilities, SentimentPrediction};
use crate::util::Debouncer;

pub const AWAITING_INPUT_TEXT: &str = "Please enter text";
pub const PROCESSING_TEXT: &str = "Processing...";

/// What the status line shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentimentStatus {
    AwaitingInput,
    Processing,
    Predicted(String),
}

impl SentimentStatus {
    pub fn text(&self) -> &str {
        match self {
            Self::AwaitingInput => AWAITING_INPUT_TEXT,
            Self::Processing => PROCESSING_TEXT,
            Self::Predicted(label) => label,
        }
    }
}

impl fmt::Display for SentimentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Everything the sentiment screen renders.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentState {
    pub input: String,
    pub status: SentimentStatus,
    pub probabilities: Probabilities,
}

impl Default for SentimentState {
    fn default() -> Self {
        Self {
            input: String::new(),
            status: SentimentStatus::AwaitingInput,
            probabilities: Probabilities::default(),
        }
    }
}

impl SentimentState {
    /// Probability rows. Blank whenever the status line reads as one of the
    /// placeholder texts, including a label the service itself returned.
    pub fn probability_labels(&self) -> Option<[String; 3]> {
        match self.status.text() {
            AWAITING_INPUT_TEXT | PROCESSING_TEXT => None,
            _ => Some(self.probabilities.labels()),
        }
    }
}

/// Events applied to the screen, in order, on its owning task.
#[derive(Debug)]
pub enum SentimentEvent {
    /// The user edited the text field.
    InputChanged(String),
    /// The quiet period for `generation` has passed.
    DebounceElapsed { generation: u64 },
    /// A prediction requested for `generation` has completed.
    PredictionFinished {
        generation: u64,
        result: Result<SentimentPrediction, StudioError>,
    },
}

/// Controller for the sentiment screen.
///
/// State changes only through [`SentimentScreen::handle`], which takes
/// `&mut self`; timers and HTTP completions report back through the
/// screen's own event channel rather than touching state.
pub struct SentimentScreen {
    backend: Arc<dyn InferenceBackend>,
    state: SentimentState,
    generation: u64,
    debouncer: Debouncer,
    debounce_armed: bool,
    in_flight: usize,
    events_tx: mpsc::UnboundedSender<SentimentEvent>,
    events_rx: mpsc::UnboundedReceiver<SentimentEvent>,
}

impl SentimentScreen {
    pub fn new(backend: Arc<dyn InferenceBackend>, config: &StudioConfig) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            backend,
            state: SentimentState::default(),
            generation: 0,
            debouncer: Debouncer::new(config.debounce),
            debounce_armed: false,
            in_flight: 0,
            events_tx,
            events_rx,
        }
    }

    pub fn state(&self) -> &SentimentState {
        &self.state
    }

    /// The generation of the most recent input; older completions are stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a debounce timer or a prediction request is outstanding.
    pub fn is_busy(&self) -> bool {
        self.debounce_armed || self.in_flight > 0
    }

    /// Wait for the next internally generated event (timer or HTTP completion).
    pub async fn next_event(&mut self) -> Option<SentimentEvent> {
        self.events_rx.recv().await
    }

    pub fn handle(&mut self, event: SentimentEvent) {
        match event {
            SentimentEvent::InputChanged(text) => self.input_changed(text),
            SentimentEvent::DebounceElapsed { generation } => self.debounce_elapsed(generation),
            SentimentEvent::PredictionFinished { generation, result } => {
                self.prediction_finished(generation, result)
            }
        }
    }

    /// Drive the screen until `inputs` closes and all outstanding work has
    /// settled, publishing every state change on `render`.
    pub async fn run(
        mut self,
        mut inputs: mpsc::Receiver<String>,
        render: watch::Sender<SentimentState>,
    ) -> SentimentState {
        let mut inputs_open = true;
        loop {
            if !inputs_open && !self.is_busy() {
                break;
            }

            let event = tokio::select! {
                input = inputs.recv(), if inputs_open => match input {
                    Some(text) => SentimentEvent::InputChanged(text),
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

    fn input_changed(&mut self, text: String) {
        self.state.input = text;
        self.state.status = SentimentStatus::Processing;
        self.generation += 1;
        self.debounce_armed = true;

        let generation = self.generation;
        let events = self.events_tx.clone();
        self.debouncer.schedule(async move {
            let _ = events.send(SentimentEvent::DebounceElapsed { generation });
        });
    }

    fn debounce_elapsed(&mut self, generation: u64) {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "Ignoring superseded debounce");
            return;
        }
        self.debounce_armed = false;

        if self.state.input.is_empty() {
            self.state.status = SentimentStatus::AwaitingInput;
            self.state.probabilities = Probabilities::default();
            return;
        }

        self.in_flight += 1;
        let backend = self.backend.clone();
        let events = self.events_tx.clone();
        let text = self.state.input.clone();
        tracing::debug!(
            generation,
            chars = text.chars().count(),
            quiet_ms = self.debouncer.delay().as_millis() as u64,
            "Requesting sentiment"
        );
        tokio::spawn(async move {
            let result = backend.predict_sentiment(&text).await;
            let _ = events.send(SentimentEvent::PredictionFinished { generation, result });
        });
    }

    fn prediction_finished(
        &mut self,
        generation: u64,
        result: Result<SentimentPrediction, StudioError>,
    ) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "Discarding stale prediction");
            return;
        }

        match result {
            Ok(prediction) => {
                self.state.status = SentimentStatus::Predicted(prediction.label);
                self.state.probabilities = prediction.probabilities;
            }
            Err(e) => {
                tracing::warn!(error = %e, category = ?e.category(), "Sentiment prediction failed");
            }
        }
    }
}
