use crate::feedback::templates::rewrite_template;
use crate::models::KeywordWeight;

pub const MAX_REWRITE_LINES: usize = 8;

/// Number of ranked keywords considered when ordering rewrite lines
const RANKED_WINDOW: usize = 10;

/// Suggest rewritten resume lines for skills the resume already has
///
/// Matched skills that the job ranks highly come first, in ranked order,
/// followed by the remaining matched skills in their own order.
pub fn rewrite_resume(matched: &[String], ranked: &[KeywordWeight]) -> Vec<String> {
    let mut ordered: Vec<&str> = Vec::with_capacity(matched.len());

    for item in ranked.iter().take(RANKED_WINDOW) {
        let term = item.term.as_str();
        if matched.iter().any(|m| m == term) && !ordered.contains(&term) {
            ordered.push(term);
        }
    }

    for keyword in matched {
        if !ordered.contains(&keyword.as_str()) {
            ordered.push(keyword);
        }
    }

    ordered
        .into_iter()
        .filter_map(rewrite_template)
        .take(MAX_REWRITE_LINES)
        .map(str::to_string)
        .collect()
}
