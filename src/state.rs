use std::collections::BTreeMap;
use std::path::Path;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::classifier::{self, Classifier, ClassifyError, PredictionError};
use crate::config::AppConfig;
use crate::data::loader::load_samples;
use crate::data::model::{FeatureVector, Prediction, SampleRecord};
use crate::data::parser::{parse_features, ValidationMode};
use crate::data::samples::builtin_samples;

type PendingPrediction = Receiver<Result<Prediction, ClassifyError>>;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Text currently in the input field.
    pub input: String,

    /// Result of the last successful submission.
    pub prediction: Option<Prediction>,

    /// User-visible error from the last submission.
    pub error: Option<String>,

    /// Features of the last accepted submission (plotted).
    pub submitted: Option<FeatureVector>,

    /// Rows of the sample table.
    pub samples: Vec<SampleRecord>,

    /// Strict (60 values in [0, 1]) or lenient input checking.
    pub validation: ValidationMode,

    /// Status / error message for non-prediction actions (sample import).
    pub status_message: Option<String>,

    classifier: Arc<dyn Classifier>,

    /// Receiver for the in-flight request, if any.
    pending: Option<PendingPrediction>,

    /// Set by `reset`: the in-flight outcome is dropped when it arrives.
    discard_pending: bool,

    /// Sample row index → when it was last copied.
    copied: BTreeMap<usize, Instant>,

    copy_feedback: Duration,
}

impl AppState {
    pub fn new(classifier: Arc<dyn Classifier>, config: &AppConfig) -> Self {
        Self {
            input: String::new(),
            prediction: None,
            error: None,
            submitted: None,
            samples: builtin_samples(),
            validation: ValidationMode::from_strict(config.validation.strict),
            status_message: None,
            classifier,
            pending: None,
            discard_pending: false,
            copied: BTreeMap::new(),
            copy_feedback: config.ui.copy_feedback(),
        }
    }

    /// Build the state for a configuration, including its classifier and
    /// optional sample file.
    pub fn from_config(config: &AppConfig) -> Self {
        let mut state = Self::new(classifier::from_config(&config.classifier), config);
        if let Some(path) = &config.ui.samples_file {
            state.import_samples(path);
        }
        state
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    /// Whether a prediction request is in flight.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Validate the input and start a classification in the background.
    ///
    /// Returns `false` when nothing was sent: a request is already pending or
    /// the input was rejected (the error is stored in `self.error`).
    pub fn submit(&mut self) -> bool {
        if self.is_loading() {
            log::debug!("Submit ignored: a prediction is already pending");
            return false;
        }

        self.prediction = None;
        self.error = None;

        let features = match parse_features(&self.input, self.validation) {
            Ok(features) => features,
            Err(e) => {
                log::warn!("Rejected input: {e}");
                self.error = Some(PredictionError::from(e).to_string());
                return false;
            }
        };

        log::info!(
            "Submitting {} features to {}",
            features.len(),
            self.classifier.name()
        );
        self.submitted = Some(features.clone());

        let (tx, rx) = mpsc::channel();
        let classifier = Arc::clone(&self.classifier);
        thread::spawn(move || {
            let _ = tx.send(classifier.classify(&features));
        });
        self.pending = Some(rx);
        true
    }

    /// Collect the outcome of a pending request. Returns `true` once it
    /// has been stored.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = &self.pending else {
            return false;
        };
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => Err(ClassifyError::Network(
                "prediction worker stopped unexpectedly".to_string(),
            )),
        };
        self.pending = None;

        if std::mem::take(&mut self.discard_pending) {
            log::debug!("Discarded outcome of a request abandoned by reset");
            return true;
        }

        match outcome {
            Ok(prediction) => {
                log::info!(
                    "Prediction: {} (confidence {:?})",
                    prediction.label,
                    prediction.confidence
                );
                self.prediction = Some(prediction);
            }
            Err(e) => {
                log::error!("Prediction failed: {e}");
                self.error = Some(PredictionError::from(e).to_string());
            }
        }
        true
    }

    /// Clear input, result and error. A pending request stays in flight
    /// until it finishes, but its outcome is thrown away.
    pub fn reset(&mut self) {
        self.input.clear();
        self.prediction = None;
        self.error = None;
        self.submitted = None;
        self.discard_pending = self.is_loading();
    }

    // -- Sample table --

    /// Mark a row as copied and return the exact text for the clipboard.
    pub fn copy_sample(&mut self, index: usize, now: Instant) -> Option<String> {
        let text = self.samples.get(index)?.features.clone();
        self.copied.insert(index, now);
        log::debug!("Copied sample {index} ({} bytes)", text.len());
        Some(text)
    }

    /// Whether a row should still show its copy confirmation.
    pub fn is_copied(&self, index: usize, now: Instant) -> bool {
        self.copied
            .get(&index)
            .is_some_and(|at| now.saturating_duration_since(*at) < self.copy_feedback)
    }

    /// Drop confirmations older than the feedback window. Returns whether any
    /// are still showing.
    pub fn expire_copies(&mut self, now: Instant) -> bool {
        let window = self.copy_feedback;
        self.copied
            .retain(|_, at| now.saturating_duration_since(*at) < window);
        !self.copied.is_empty()
    }

    /// Go back to the samples shipped with the app.
    pub fn restore_builtin_samples(&mut self) {
        let samples = builtin_samples();
        log::info!("Restored {} built-in samples", samples.len());
        self.status_message = Some(format!("{} samples loaded", samples.len()));
        self.set_samples(samples);
    }

    /// Replace the sample table.
    pub fn set_samples(&mut self, samples: Vec<SampleRecord>) {
        self.samples = samples;
        self.copied.clear();
    }

    /// Load a sample file; on failure the current samples stay.
    pub fn import_samples(&mut self, path: &Path) {
        match load_samples(path) {
            Ok(samples) => {
                log::info!("Loaded {} samples from {}", samples.len(), path.display());
                self.status_message = Some(format!("{} samples loaded", samples.len()));
                self.set_samples(samples);
            }
            Err(e) => {
                log::error!("Failed to load samples: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
