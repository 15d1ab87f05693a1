//! Match result builders for tests. Each call returns a fresh value.

use indexmap::IndexMap;

use crate::explanation::models::{MatchResult, SkillEntry};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn skills(names: &[&str]) -> Vec<SkillEntry> {
    names.iter().map(|&n| SkillEntry::from(n)).collect()
}

pub fn breakdown(entries: &[(&str, f64)]) -> IndexMap<String, f64> {
    entries
        .iter()
        .map(|(key, score)| (key.to_string(), *score))
        .collect()
}

/// Only the overall score set.
pub fn minimal_match(overall_score: f64) -> MatchResult {
    MatchResult {
        overall_score: Some(overall_score),
        ..MatchResult::default()
    }
}

/// A strong frontend candidate with every section populated.
pub fn full_match() -> MatchResult {
    MatchResult {
        overall_score: Some(0.85),
        breakdown: Some(breakdown(&[
            ("skills", 0.9),
            ("experience", 0.8),
            ("education", 0.75),
        ])),
        strengths: Some(strings(&[
            "Strong technical skills in JavaScript and React",
            "6 years of relevant experience",
        ])),
        weaknesses: Some(strings(&[
            "Limited experience with TypeScript",
            "No cloud deployment experience",
        ])),
        matched_skills: Some(skills(&["JavaScript", "React", "Node.js"])),
        missing_skills: Some(skills(&["TypeScript", "AWS", "Docker"])),
        recommendations: Some(strings(&[
            "Consider for technical interview",
            "Assess TypeScript knowledge",
        ])),
        summary: Some("Experienced frontend engineer with a solid React background.".to_string()),
    }
}
