use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{ClassifyError, Classifier};
use crate::data::model::{FeatureVector, Label, Prediction};

const MEAN_THRESHOLD: f64 = 0.15;
const VARIANCE_THRESHOLD: f64 = 0.05;
const MIN_CONFIDENCE: f64 = 0.70;
const MAX_CONFIDENCE: f64 = 1.00;

/// Placeholder classifier for demos without the prediction service.
///
/// A return is called a Mine when it is both bright (mean) and busy (variance).
/// This has no predictive value and the confidence is random.
pub struct HeuristicClassifier {
    rng: Mutex<StdRng>,
}

impl HeuristicClassifier {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    #[cfg(test)]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// The label rule on its own, without the fabricated confidence.
    pub fn label_for(features: &FeatureVector) -> Label {
        if features.mean() > MEAN_THRESHOLD && features.variance() > VARIANCE_THRESHOLD {
            Label::Mine
        } else {
            Label::Rock
        }
    }
}

impl Default for HeuristicClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for HeuristicClassifier {
    fn name(&self) -> &str {
        "Heuristic (demo only)"
    }

    fn is_placeholder(&self) -> bool {
        true
    }

    fn classify(&self, features: &FeatureVector) -> Result<Prediction, ClassifyError> {
        let label = Self::label_for(features);
        let confidence = {
            let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            rng.random_range(MIN_CONFIDENCE..=MAX_CONFIDENCE)
        };
        log::debug!(
            "Heuristic: mean={:.4} variance={:.4} -> {label}",
            features.mean(),
            features.variance()
        );
        Ok(Prediction {
            label,
            confidence: Some(confidence),
        })
    }
}
