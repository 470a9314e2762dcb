use crate::models::{ActionItem, Priority};
use regex::Regex;
use std::sync::OnceLock;

pub const MAX_ACTION_ITEMS: usize = 6;

/// Missing keywords listed in the "add missing keywords" example
const MISSING_EXAMPLE_LIMIT: usize = 6;

fn digit_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d").expect("digit pattern is valid"))
}

/// Generate prioritized action items
///
/// Rules fire independently, in this order:
/// 1. missing keywords (high) or keywords covered (medium), always exactly one
/// 2. no decimal digit, in any script, anywhere in the resume (high)
/// 3. score below the tailoring threshold (medium)
/// 4. at least one matched keyword (medium)
pub fn generate_action_items(
    score: u8,
    tailor_threshold: u8,
    matched: &[String],
    missing: &[String],
    resume_text: &str,
) -> Vec<ActionItem> {
    let mut items = Vec::with_capacity(MAX_ACTION_ITEMS);

    if missing.is_empty() {
        items.push(keywords_covered());
    } else {
        items.push(add_missing_keywords(missing));
    }

    if !digit_pattern().is_match(resume_text) {
        items.push(add_metrics());
    }

    if score < tailor_threshold {
        items.push(tailor_summary());
    }

    if !matched.is_empty() {
        items.push(proof_in_bullets());
    }

    items.truncate(MAX_ACTION_ITEMS);
    items
}

fn item(
    id: &str,
    title: &str,
    priority: Priority,
    category: &str,
    why_it_matters: &str,
    how_to_fix: &[&str],
    example: String,
) -> ActionItem {
    ActionItem {
        id: id.to_string(),
        title: title.to_string(),
        priority,
        category: category.to_string(),
        why_it_matters: why_it_matters.to_string(),
        how_to_fix: how_to_fix.iter().map(|s| s.to_string()).collect(),
        example,
    }
}

fn add_missing_keywords(missing: &[String]) -> ActionItem {
    let listed: Vec<&str> = missing
        .iter()
        .take(MISSING_EXAMPLE_LIMIT)
        .map(String::as_str)
        .collect();

    item(
        "add-missing-keywords",
        "Add missing job keywords naturally",
        Priority::High,
        "keywords",
        "ATS often filters candidates using job keywords. Missing terms can reduce shortlist chances.",
        &[
            "Only add keywords you truly have experience with (never fake).",
            "Put them in Skills AND show proof in 1–2 bullet points under Experience/Projects.",
            "Use the job wording (example: 'REST APIs' not only 'APIs').",
        ],
        format!("Add and prove (if true): {}", listed.join(", ")),
    )
}

fn keywords_covered() -> ActionItem {
    item(
        "keywords-covered",
        "Keywords look good — strengthen proof with bullets",
        Priority::Medium,
        "keywords",
        "Having keywords in Skills helps ATS, but bullets prove real experience to recruiters.",
        &[
            "For each top skill, add at least one bullet showing how you used it.",
            "Use: Action + Tech + Result.",
        ],
        "Implemented JWT authentication in Node.js APIs; secured 15+ endpoints and reduced auth errors."
            .to_string(),
    )
}

fn add_metrics() -> ActionItem {
    item(
        "add-metrics",
        "Add measurable impact (numbers)",
        Priority::High,
        "impact",
        "Recruiters scan for outcomes like performance, scale, reliability, or user impact.",
        &[
            "Add metrics like: load time, API latency, bug reduction, users served, test coverage, uptime.",
            "Estimates are okay if honest (example: '~20%').",
        ],
        "Improved page load time by ~35% using code-splitting and memoization.".to_string(),
    )
}

fn tailor_summary() -> ActionItem {
    item(
        "tailor-summary",
        "Tailor your summary to match this job",
        Priority::Medium,
        "tailoring",
        "ATS + recruiters compare your top section with job requirements quickly.",
        &[
            "Rewrite the top 2–3 lines to include role title + 3 key requirements.",
            "Keep it short and keyword-aligned.",
        ],
        "React Developer with Node.js + MongoDB experience building REST APIs and authentication."
            .to_string(),
    )
}

fn proof_in_bullets() -> ActionItem {
    item(
        "proof-in-bullets",
        "Move key skills into project/experience bullets (proof)",
        Priority::Medium,
        "content",
        "ATS sees keywords anywhere, but recruiters want proof in bullets.",
        &[
            "Ensure each important skill appears in at least one bullet with context.",
            "Use: Action + Tech + Result.",
        ],
        "Built REST APIs in Express; reduced error rate by ~20% with validation and logging."
            .to_string(),
    )
}
