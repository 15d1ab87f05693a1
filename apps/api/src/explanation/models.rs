use indexmap::IndexMap;
use serde::Deserialize;

/// One element of `matchedSkills` / `missingSkills`.
///
/// The keyword scorer emits bare names; the AI matcher emits objects carrying
/// a confidence and the kind of evidence it found. Both are accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SkillEntry {
    Name(String),
    Detailed {
        skill: String,
        #[serde(default)]
        confidence: Option<f64>,
        #[serde(default)]
        source: Option<String>,
    },
}

impl SkillEntry {
    pub fn name(&self) -> &str {
        match self {
            SkillEntry::Name(name) => name,
            SkillEntry::Detailed { skill, .. } => skill,
        }
    }

    pub fn confidence(&self) -> Option<f64> {
        match self {
            SkillEntry::Name(_) => None,
            SkillEntry::Detailed { confidence, .. } => *confidence,
        }
    }

    pub fn source(&self) -> Option<&str> {
        match self {
            SkillEntry::Name(_) => None,
            SkillEntry::Detailed { source, .. } => source.as_deref(),
        }
    }
}

impl From<&str> for SkillEntry {
    fn from(name: &str) -> Self {
        SkillEntry::Name(name.to_string())
    }
}

/// Precomputed scoring record for one resume/job comparison.
///
/// Only `overall_score` is expected on every record. Everything else may be
/// absent (or `null`) and maps to `None`; the renderer omits the matching
/// section instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub overall_score: Option<f64>,
    /// Category → score in [0, 1]. Keeps the order the scorer sent.
    pub breakdown: Option<IndexMap<String, f64>>,
    pub strengths: Option<Vec<String>>,
    pub weaknesses: Option<Vec<String>>,
    pub matched_skills: Option<Vec<SkillEntry>>,
    pub missing_skills: Option<Vec<SkillEntry>>,
    pub recommendations: Option<Vec<String>>,
    pub summary: Option<String>,
}
