use thiserror::Error;

use super::model::{FeatureVector, FEATURE_COUNT};

// ---------------------------------------------------------------------------
// Validation mode
// ---------------------------------------------------------------------------

/// How strictly user input is checked before it reaches a classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Exactly [`FEATURE_COUNT`] values, each within `[0, 1]`.
    Strict,
    /// Any number of finite values.
    Lenient,
}

impl ValidationMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            ValidationMode::Strict
        } else {
            ValidationMode::Lenient
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Please enter some data before predicting.")]
    Empty,
    #[error("Value #{} ('{token}') is not a number", .index + 1)]
    Parse { index: usize, token: String },
    #[error("Expected {expected} values but got {found}")]
    Shape { expected: usize, found: usize },
    #[error("Value #{} ({value}) is outside the range [0, 1]", .index + 1)]
    Range { index: usize, value: f64 },
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Parse comma-separated user input into a [`FeatureVector`].
pub fn parse_features(text: &str, mode: ValidationMode) -> Result<FeatureVector, InputError> {
    if text.trim().is_empty() {
        return Err(InputError::Empty);
    }

    let values = text
        .split(',')
        .enumerate()
        .map(|(index, tok)| parse_token(index, tok.trim()))
        .collect::<Result<Vec<f64>, InputError>>()?;

    if mode == ValidationMode::Strict {
        if values.len() != FEATURE_COUNT {
            return Err(InputError::Shape {
                expected: FEATURE_COUNT,
                found: values.len(),
            });
        }
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !(0.0..=1.0).contains(*v))
        {
            return Err(InputError::Range { index, value });
        }
    }

    Ok(FeatureVector::new(values))
}

fn parse_token(index: usize, token: &str) -> Result<f64, InputError> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputError::Parse {
            index,
            token: token.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv_of(n: usize, value: &str) -> String {
        vec![value; n].join(",")
    }

    #[test]
    fn accepts_sixty_values_in_range() {
        let v = parse_features(&csv_of(60, "0.5"), ValidationMode::Strict).unwrap();
        assert_eq!(v.len(), 60);

        let edges = format!("0,{},1", csv_of(58, "0.25"));
        assert!(parse_features(&edges, ValidationMode::Strict).is_ok());
    }

    #[test]
    fn trims_whitespace_around_tokens() {
        let text = format!(" 0.1 ,\t{} ", csv_of(59, "0.2"));
        let v = parse_features(&text, ValidationMode::Strict).unwrap();
        assert_eq!(v.as_slice()[0], 0.1);
    }

    #[test]
    fn wrong_count_is_a_shape_error() {
        for n in [1, 59, 61, 120] {
            let err = parse_features(&csv_of(n, "0.5"), ValidationMode::Strict).unwrap_err();
            assert_eq!(
                err,
                InputError::Shape {
                    expected: 60,
                    found: n
                }
            );
        }
    }

    #[test]
    fn non_numeric_token_is_named() {
        let text = format!("0.1,abc,{}", csv_of(58, "0.2"));
        let err = parse_features(&text, ValidationMode::Strict).unwrap_err();
        assert_eq!(
            err,
            InputError::Parse {
                index: 1,
                token: "abc".to_string()
            }
        );
        assert!(err.to_string().contains("'abc'"));
    }

    #[test]
    fn empty_token_and_non_finite_are_parse_errors() {
        let err = parse_features("0.1,,0.2", ValidationMode::Lenient).unwrap_err();
        assert!(matches!(err, InputError::Parse { index: 1, .. }));

        let err = parse_features("0.1,NaN", ValidationMode::Lenient).unwrap_err();
        assert!(matches!(err, InputError::Parse { index: 1, .. }));

        let err = parse_features("inf", ValidationMode::Lenient).unwrap_err();
        assert!(matches!(err, InputError::Parse { index: 0, .. }));
    }

    #[test]
    fn out_of_range_value_fails_in_strict_mode() {
        let text = format!("{},1.5", csv_of(59, "0.5"));
        let err = parse_features(&text, ValidationMode::Strict).unwrap_err();
        assert_eq!(err, InputError::Range { index: 59, value: 1.5 });

        let text = format!("-0.01,{}", csv_of(59, "0.5"));
        let err = parse_features(&text, ValidationMode::Strict).unwrap_err();
        assert!(matches!(err, InputError::Range { index: 0, .. }));
    }

    #[test]
    fn lenient_mode_skips_shape_and_range() {
        let v = parse_features("2.5,-1,0.3", ValidationMode::Lenient).unwrap();
        assert_eq!(v.as_slice(), &[2.5, -1.0, 0.3]);
    }

    #[test]
    fn empty_input_is_rejected_in_both_modes() {
        assert_eq!(parse_features("", ValidationMode::Strict), Err(InputError::Empty));
        assert_eq!(parse_features("  \n", ValidationMode::Lenient), Err(InputError::Empty));
    }
}
