//! Rendered explanation report: the structure handed to the UI layer.
//!
//! Every section except the headline is optional and skipped entirely when
//! absent, so a consumer never sees an empty list.

use serde::Serialize;

use crate::explanation::severity::Severity;
use crate::explanation::validation::ValidationError;

/// Overall score with its colour band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Headline {
    pub percent: u8,
    pub formatted: String,
    pub severity: Severity,
    pub verdict: String,
}

/// One row of the score breakdown table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownRow {
    pub key: String,
    pub label: String,
    pub percent: u8,
    pub formatted: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillBadge {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSections {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Vec<BreakdownRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strengths: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weaknesses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_skills: Option<Vec<SkillBadge>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_skills: Option<Vec<SkillBadge>>,
}

impl ReportSections {
    pub fn is_empty(&self) -> bool {
        *self == ReportSections::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedReport {
    pub headline: Headline,
    #[serde(flatten)]
    pub sections: ReportSections,
}

/// Report for a result whose overall score was rejected: no headline, plus
/// whatever sections could still be rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartialReport {
    pub error: ValidationError,
    #[serde(flatten)]
    pub sections: ReportSections,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RenderOutcome {
    Rendered(RenderedReport),
    Partial(PartialReport),
}

impl RenderOutcome {
    pub fn headline(&self) -> Option<&Headline> {
        match self {
            RenderOutcome::Rendered(report) => Some(&report.headline),
            RenderOutcome::Partial(_) => None,
        }
    }

    pub fn sections(&self) -> &ReportSections {
        match self {
            RenderOutcome::Rendered(report) => &report.sections,
            RenderOutcome::Partial(report) => &report.sections,
        }
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            RenderOutcome::Rendered(_) => None,
            RenderOutcome::Partial(report) => Some(&report.error),
        }
    }

    pub fn is_partial(&self) -> bool {
        matches!(self, RenderOutcome::Partial(_))
    }
}
