use serde::{Deserialize, Serialize};
use validator::Validate;

/// Hard upper bound on each text field, in characters; kept in sync with the
/// `length` validators below. `limits.max_text_chars` may only lower it.
pub const MAX_TEXT_CHARS: usize = 100_000;

/// Request to score a resume against a job posting
///
/// Empty strings are accepted here; the engine answers them with a zero score.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[validate(length(max = 100000))]
    pub resume_text: String,
    #[validate(length(max = 100000))]
    pub job_text: String,
}

impl MatchRequest {
    /// Check both fields against a configured length limit
    pub fn within_limit(&self, max_chars: usize) -> bool {
        self.resume_text.chars().count() <= max_chars && self.job_text.chars().count() <= max_chars
    }
}
