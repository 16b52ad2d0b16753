use std::fmt;
use std::str::FromStr;

/// Number of frequency bands in a sonar return.
pub const FEATURE_COUNT: usize = 60;

// ---------------------------------------------------------------------------
// Label – the two sonar target classes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    Mine,
    Rock,
}

impl Label {
    /// Interpret the single-character code returned by the prediction service.
    /// Only `"M"` means Mine; every other code is treated as Rock.
    pub fn from_code(code: &str) -> Self {
        if code == "M" {
            Label::Mine
        } else {
            Label::Rock
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Mine => write!(f, "Mine"),
            Label::Rock => write!(f, "Rock"),
        }
    }
}

impl FromStr for Label {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mine" | "m" => Ok(Label::Mine),
            "rock" | "r" => Ok(Label::Rock),
            other => Err(format!("unknown label '{other}' (expected Mine or Rock)")),
        }
    }
}

// ---------------------------------------------------------------------------
// FeatureVector – one sonar return
// ---------------------------------------------------------------------------

/// Energy per frequency band of a single sonar return.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    /// Wrap raw values without validation; see [`crate::data::parser`] for
    /// the checked path from user text.
    pub fn new(values: Vec<f64>) -> Self {
        FeatureVector(values)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Arithmetic mean, `0.0` for an empty vector.
    pub fn mean(&self) -> f64 {
        if self.0.is_empty() {
            return 0.0;
        }
        self.0.iter().sum::<f64>() / self.0.len() as f64
    }

    /// Population variance (divides by `n`), `0.0` for an empty vector.
    pub fn variance(&self) -> f64 {
        if self.0.is_empty() {
            return 0.0;
        }
        let mean = self.mean();
        self.0.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / self.0.len() as f64
    }
}

// ---------------------------------------------------------------------------
// Prediction – classifier output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: Label,
    /// Certainty in `[0, 1]`, when the classifier reports one.
    pub confidence: Option<f64>,
}

// ---------------------------------------------------------------------------
// SampleRecord – example inputs shown in the sample table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SampleRecord {
    /// The comma-separated features exactly as they are copied to the clipboard.
    pub features: String,
    pub label: Label,
    pub description: Option<String>,
}

impl SampleRecord {
    /// Short table preview: the first `n` tokens joined by `", "`, followed by
    /// `...` when the record has more tokens than that.
    pub fn preview(&self, n: usize) -> String {
        let tokens: Vec<&str> = self.features.split(',').collect();
        if tokens.len() > n {
            format!("{}...", tokens[..n].join(", "))
        } else {
            self.features.clone()
        }
    }

    /// Best-effort numeric view of the features for plotting.
    pub fn values(&self) -> Option<FeatureVector> {
        self.features
            .split(',')
            .map(|tok| tok.trim().parse::<f64>().ok())
            .collect::<Option<Vec<f64>>>()
            .map(FeatureVector::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_m_code_means_mine() {
        assert_eq!(Label::from_code("M"), Label::Mine);
        assert_eq!(Label::from_code("R"), Label::Rock);
        assert_eq!(Label::from_code("m"), Label::Rock);
        assert_eq!(Label::from_code(""), Label::Rock);
    }

    #[test]
    fn label_parses_names_and_codes() {
        assert_eq!("Mine".parse::<Label>(), Ok(Label::Mine));
        assert_eq!(" rock ".parse::<Label>(), Ok(Label::Rock));
        assert_eq!("R".parse::<Label>(), Ok(Label::Rock));
        assert!("boulder".parse::<Label>().is_err());
    }

    #[test]
    fn mean_and_population_variance() {
        let v = FeatureVector::new(vec![0.0, 1.0, 0.0, 1.0]);
        assert!((v.mean() - 0.5).abs() < 1e-12);
        assert!((v.variance() - 0.25).abs() < 1e-12);
        assert_eq!(FeatureVector::new(Vec::new()).variance(), 0.0);
    }

    #[test]
    fn preview_truncates_long_records() {
        let record = SampleRecord {
            features: "0.1,0.2,0.3,0.4,0.5,0.6".to_string(),
            label: Label::Rock,
            description: None,
        };
        assert_eq!(record.preview(5), "0.1, 0.2, 0.3, 0.4, 0.5...");

        let short = SampleRecord {
            features: "0.1,0.2".to_string(),
            ..record
        };
        assert_eq!(short.preview(5), "0.1,0.2");
    }
}
