use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

/// Rejection of a match result's overall score.
/// Reported in-band on a partial report; it never aborts the render.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("overallScore is missing")]
    MissingOverallScore,

    #[error("overallScore {0} is outside [0, 1]")]
    OverallScoreOutOfRange(f64),

    #[error("overallScore is not a finite number")]
    NonFiniteOverallScore,
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingOverallScore => "MISSING_OVERALL_SCORE",
            ValidationError::OverallScoreOutOfRange(_) => "OVERALL_SCORE_OUT_OF_RANGE",
            ValidationError::NonFiniteOverallScore => "NON_FINITE_OVERALL_SCORE",
        }
    }
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationError", 2)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// True for finite scores within [0, 1].
pub fn is_unit_score(score: f64) -> bool {
    score.is_finite() && (0.0..=1.0).contains(&score)
}

pub fn validate_overall_score(score: Option<f64>) -> Result<f64, ValidationError> {
    match score {
        None => Err(ValidationError::MissingOverallScore),
        Some(s) if !s.is_finite() => Err(ValidationError::NonFiniteOverallScore),
        Some(s) if !is_unit_score(s) => Err(ValidationError::OverallScoreOutOfRange(s)),
        Some(s) => Ok(s),
    }
}
