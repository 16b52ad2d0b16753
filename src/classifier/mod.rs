/// Classification backends.
///
/// Both strategies sit behind the [`Classifier`] trait so the UI only ever
/// holds an `Arc<dyn Classifier>` chosen from the configuration:
/// * [`RemoteClassifier`] – POSTs the features to the prediction service
/// * [`HeuristicClassifier`] – local mean/variance stand-in for demos
pub mod heuristic;
pub mod remote;

use std::sync::Arc;

use thiserror::Error;

use crate::config::{ClassifierConfig, ClassifierKind};
use crate::data::model::{FeatureVector, Prediction};
use crate::data::parser::InputError;

pub use heuristic::HeuristicClassifier;
pub use remote::RemoteClassifier;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifyError {
    #[error("Prediction request failed: {0}")]
    Network(String),
    #[error("Unexpected response from prediction service: {0}")]
    Response(String),
}

/// Everything that can stop a submission from producing a [`Prediction`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Classify(#[from] ClassifyError),
}

// ---------------------------------------------------------------------------
// Classifier trait
// ---------------------------------------------------------------------------

pub trait Classifier: Send + Sync {
    /// Human-readable name shown in the top bar.
    fn name(&self) -> &str;

    /// Whether the result is fabricated rather than produced by a real model.
    fn is_placeholder(&self) -> bool {
        false
    }

    fn classify(&self, features: &FeatureVector) -> Result<Prediction, ClassifyError>;
}

/// Build the classifier selected in the configuration.
pub fn from_config(config: &ClassifierConfig) -> Arc<dyn Classifier> {
    match config.kind {
        ClassifierKind::Remote => {
            let remote = RemoteClassifier::new(&config.endpoint, config.timeout());
            log::info!("Using remote classifier at {}", remote.url());
            Arc::new(remote)
        }
        ClassifierKind::Heuristic => {
            log::warn!("Using heuristic placeholder classifier; results are not meaningful");
            Arc::new(HeuristicClassifier::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_classifier_from_kind() {
        let mut config = ClassifierConfig::default();
        assert!(!from_config(&config).is_placeholder());

        config.kind = ClassifierKind::Heuristic;
        assert!(from_config(&config).is_placeholder());
    }

    #[test]
    fn prediction_error_keeps_inner_message() {
        let err: PredictionError = InputError::Empty.into();
        assert_eq!(err.to_string(), InputError::Empty.to_string());

        let err: PredictionError = ClassifyError::Network("refused".into()).into();
        assert_eq!(err.to_string(), "Prediction request failed: refused");
    }
}
