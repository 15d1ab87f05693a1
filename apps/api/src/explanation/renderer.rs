//! Turns a `MatchResult` into a `RenderOutcome`.
//!
//! Pure and single-pass: no I/O, no shared state, same input → same output.
//!
//! Policy for a missing or invalid overall score: the headline is dropped and
//! a `PartialReport` carries the error alongside every section that could
//! still be rendered.

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, warn};

use crate::explanation::models::{MatchResult, SkillEntry};
use crate::explanation::percent::{format_percent, percent_label, to_percent};
use crate::explanation::report::{
    BreakdownRow, Headline, PartialReport, RenderOutcome, RenderedReport, ReportSections,
    SkillBadge,
};
use crate::explanation::severity::Severity;
use crate::explanation::validation::{is_unit_score, validate_overall_score};

pub fn render(result: &MatchResult) -> RenderOutcome {
    let sections = render_sections(result);
    if sections.is_empty() {
        debug!("Match result carries no optional sections");
    }

    match validate_overall_score(result.overall_score) {
        Ok(score) => RenderOutcome::Rendered(RenderedReport {
            headline: build_headline(score),
            sections,
        }),
        Err(error) => {
            debug!(code = error.code(), "Overall score rejected: {error}");
            RenderOutcome::Partial(PartialReport { error, sections })
        }
    }
}

fn build_headline(score: f64) -> Headline {
    let percent = to_percent(score);
    let severity = Severity::from_percent(percent);
    Headline {
        percent,
        formatted: percent_label(percent),
        severity,
        verdict: severity.verdict().to_string(),
    }
}

fn render_sections(result: &MatchResult) -> ReportSections {
    ReportSections {
        breakdown: result.breakdown.as_ref().and_then(build_breakdown),
        strengths: list_section(result.strengths.as_deref()),
        weaknesses: list_section(result.weaknesses.as_deref()),
        recommendations: list_section(result.recommendations.as_deref()),
        summary: result
            .summary
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        matched_skills: skill_section(result.matched_skills.as_deref()),
        missing_skills: skill_section(result.missing_skills.as_deref()),
    }
}

/// Rows in input order. Entries outside [0, 1] are dropped individually.
fn build_breakdown(breakdown: &IndexMap<String, f64>) -> Option<Vec<BreakdownRow>> {
    let rows: Vec<BreakdownRow> = breakdown
        .iter()
        .filter_map(|(key, &score)| {
            if !is_unit_score(score) {
                warn!(category = %key, score, "Dropping breakdown row with score outside [0, 1]");
                return None;
            }
            let percent = to_percent(score);
            Some(BreakdownRow {
                key: key.clone(),
                label: category_label(key),
                percent,
                formatted: format_percent(score),
                severity: Severity::from_percent(percent),
            })
        })
        .collect();

    (!rows.is_empty()).then_some(rows)
}

fn list_section(items: Option<&[String]>) -> Option<Vec<String>> {
    match items {
        Some(items) if !items.is_empty() => Some(items.to_vec()),
        _ => None,
    }
}

/// One badge per distinct name; the first occurrence wins. Blank names are skipped.
fn skill_section(entries: Option<&[SkillEntry]>) -> Option<Vec<SkillBadge>> {
    let entries = entries?;
    let mut seen: IndexSet<&str> = IndexSet::new();
    let mut badges = Vec::new();

    for entry in entries {
        let name = entry.name().trim();
        if name.is_empty() || !seen.insert(name) {
            continue;
        }
        badges.push(SkillBadge {
            name: name.to_string(),
            confidence: entry.confidence(),
            source: entry.source().map(str::to_string),
        });
    }

    (!badges.is_empty()).then_some(badges)
}

/// `skills` → "Skills", `cultural_fit` → "Cultural Fit".
fn category_label(key: &str) -> String {
    key.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
