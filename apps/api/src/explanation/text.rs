//! Plain-text rendering of a report, laid out like the exported match summary.

use crate::explanation::report::{RenderOutcome, SkillBadge};

const BULLET: &str = "• ";

pub fn render_text(outcome: &RenderOutcome) -> String {
    let mut blocks: Vec<String> = Vec::new();

    match (outcome.headline(), outcome.error()) {
        (Some(headline), _) => blocks.push(format!(
            "Overall Match Score: {} ({})\n{} match for this position",
            headline.formatted, headline.severity, headline.verdict
        )),
        (None, Some(error)) => {
            blocks.push(format!("Overall Match Score: unavailable ({error})"));
        }
        (None, None) => {}
    }

    let sections = outcome.sections();

    if let Some(rows) = &sections.breakdown {
        let lines: Vec<String> = rows
            .iter()
            .map(|row| format!("{} Match: {}", row.label, row.formatted))
            .collect();
        blocks.push(section("Score Breakdown", &lines));
    }
    if let Some(items) = &sections.strengths {
        blocks.push(bulleted("Strengths", items.iter().map(String::as_str)));
    }
    if let Some(items) = &sections.weaknesses {
        blocks.push(bulleted(
            "Areas for Improvement",
            items.iter().map(String::as_str),
        ));
    }
    if let Some(items) = &sections.recommendations {
        blocks.push(bulleted("Recommendations", items.iter().map(String::as_str)));
    }
    if let Some(summary) = &sections.summary {
        blocks.push(format!("Summary\n{summary}"));
    }
    if let Some(badges) = &sections.matched_skills {
        blocks.push(skills_block("Matched Skills", badges));
    }
    if let Some(badges) = &sections.missing_skills {
        blocks.push(skills_block("Missing Skills", badges));
    }

    let mut text = blocks.join("\n\n");
    text.push('\n');
    text
}

fn section(title: &str, lines: &[String]) -> String {
    let mut block = title.to_string();
    for line in lines {
        block.push('\n');
        block.push_str(line);
    }
    block
}

fn bulleted<'a>(title: &str, items: impl Iterator<Item = &'a str>) -> String {
    let lines: Vec<String> = items.map(|item| format!("{BULLET}{item}")).collect();
    section(title, &lines)
}

fn skills_block(title: &str, badges: &[SkillBadge]) -> String {
    bulleted(title, badges.iter().map(|badge| badge.name.as_str()))
}
