//! Whole-percentage formatting for scores in [0, 1].
//!
//! Scores are rounded half-up: `0.755` → `76`, `0.853` → `85`. Multiplying by
//! 100 in binary floating point can land a hair below an exact half
//! (`0.755 * 100.0 == 75.49999999999999`), so values within `HALF_TOLERANCE`
//! of the next integer are snapped up before truncating.

const HALF_TOLERANCE: f64 = 1e-12;

/// Converts a unit score to an integer percentage in 0..=100.
///
/// Out-of-range input is clamped; non-finite input maps to 0. Callers that must
/// reject such values validate first (see `validation::is_unit_score`).
pub fn to_percent(score: f64) -> u8 {
    if !score.is_finite() {
        return 0;
    }

    let shifted = (score * 100.0).clamp(0.0, 100.0) + 0.5;
    let ceiling = shifted.ceil();
    let whole = if ceiling - shifted < HALF_TOLERANCE {
        ceiling
    } else {
        shifted.floor()
    };

    whole.min(100.0) as u8
}

/// Formats a percentage as `"<n>%"`.
pub fn percent_label(percent: u8) -> String {
    format!("{percent}%")
}

/// `format_percent(s) == round_half_up(s * 100) + "%"`.
pub fn format_percent(score: f64) -> String {
    percent_label(to_percent(score))
}
