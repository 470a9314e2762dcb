use crate::models::{KeywordWeight, Suggestion};

pub const MAX_SUGGESTIONS: usize = 10;

/// Build keyword suggestions
///
/// Missing keywords come first, in sorted order. Ranked job keywords that are
/// neither matched nor missing follow as emphasis hints.
pub fn build_suggestions(
    matched: &[String],
    missing: &[String],
    ranked: &[KeywordWeight],
) -> Vec<Suggestion> {
    let mut suggestions = Vec::with_capacity(MAX_SUGGESTIONS);

    for keyword in missing.iter().take(MAX_SUGGESTIONS) {
        suggestions.push(Suggestion {
            keyword: keyword.clone(),
            message: format!(
                "Add '{}' to your resume if you have real experience with it (projects, bullet points, or skills section).",
                keyword
            ),
        });
    }

    for item in ranked {
        if suggestions.len() >= MAX_SUGGESTIONS {
            break;
        }
        if matched.contains(&item.term) || missing.contains(&item.term) {
            continue;
        }

        suggestions.push(Suggestion {
            keyword: item.term.clone(),
            message: format!(
                "The job strongly emphasizes '{}'. If you’ve used it, mention it explicitly in your resume.",
                item.term
            ),
        });
    }

    suggestions
}
