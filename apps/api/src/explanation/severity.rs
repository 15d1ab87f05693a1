use std::fmt;

use serde::{Deserialize, Serialize};

/// Lowest percentage rendered as a strong match.
pub const STRONG_THRESHOLD: u8 = 80;
/// Lowest percentage rendered as a moderate match.
pub const MODERATE_THRESHOLD: u8 = 60;

/// Score band driving the colour treatment of a percentage.
/// The UI maps each variant to its own style tokens (green / amber / red).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Strong,
    Moderate,
    Weak,
}

impl Severity {
    pub fn from_percent(percent: u8) -> Self {
        match percent {
            p if p >= STRONG_THRESHOLD => Severity::Strong,
            p if p >= MODERATE_THRESHOLD => Severity::Moderate,
            _ => Severity::Weak,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Strong => "strong",
            Severity::Moderate => "moderate",
            Severity::Weak => "weak",
        }
    }

    /// Word used in the headline sentence, e.g. "Excellent match for this position".
    pub fn verdict(&self) -> &'static str {
        match self {
            Severity::Strong => "Excellent",
            Severity::Moderate => "Good",
            Severity::Weak => "Fair",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
