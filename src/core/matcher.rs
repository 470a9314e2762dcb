use crate::core::{
    keywords::match_keywords,
    ranking::{rank_job_keywords, round_to},
    scoring::calculate_match_score,
    tfidf::TermWeights,
};
use crate::feedback::{build_bullet_examples, build_suggestions, generate_action_items, rewrite_resume};
use crate::models::{MatchDebug, MatchResult, ScoringWeights};

pub const ANALYSIS_NOTE: &str = "TF-IDF cosine similarity + skill-based keyword analysis.";
pub const EMPTY_INPUT_NOTE: &str = "Resume text or job text is empty.";

/// Keywords reported in each of the matched/missing lists
pub const MAX_LISTED_KEYWORDS: usize = 20;

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Tokenization and skill matching
/// 2. TF-IDF weighting and cosine similarity
/// 3. Job keyword ranking
/// 4. Score composition
/// 5. Feedback generation
///
/// Stateless apart from its weights; safe to share across threads.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a resume against a job posting
    ///
    /// # Arguments
    /// * `resume_text` - Raw resume text
    /// * `job_text` - Raw job posting text
    /// * `semantic_score` - Embedding similarity in [-1, 1], if available.
    ///   Reported in the debug record only; it never changes the score.
    ///
    /// # Returns
    /// MatchResult with the score and all feedback sections
    pub fn analyze(&self, resume_text: &str, job_text: &str, semantic_score: Option<f64>) -> MatchResult {
        let resume = resume_text.trim();
        let job = job_text.trim();
        let semantic_score = semantic_score.map(|s| round_to(s * 100.0, 2));

        if resume.is_empty() || job.is_empty() {
            tracing::debug!("Empty input, skipping analysis");
            return empty_result(semantic_score);
        }

        // Stage 1: skill matching
        let keywords = match_keywords(resume, job);
        let coverage = keywords.coverage();

        // Stage 2: lexical similarity
        let term_weights = TermWeights::fit(resume, job);
        let lexical = term_weights.similarity();

        // Stage 3: ranking
        let top_job_keywords = rank_job_keywords(&term_weights);

        // Stage 4: score
        let score = calculate_match_score(lexical, coverage, &self.weights);

        tracing::debug!(
            "Scored {} (lexical: {:.4}, coverage: {:.4}, matched: {}, missing: {})",
            score,
            lexical,
            coverage,
            keywords.matched.len(),
            keywords.missing.len()
        );

        // Stage 5: feedback
        let matched = &keywords.matched;
        let missing = &keywords.missing;

        let suggestions = build_suggestions(matched, missing, &top_job_keywords);
        let bullet_examples = build_bullet_examples(matched, missing);
        let resume_rewrite = rewrite_resume(matched, &top_job_keywords);
        let action_items = generate_action_items(
            score,
            self.weights.tailor_threshold,
            matched,
            missing,
            resume,
        );

        MatchResult {
            score,
            note: ANALYSIS_NOTE.to_string(),
            matched_keywords: matched.iter().take(MAX_LISTED_KEYWORDS).cloned().collect(),
            missing_keywords: missing.iter().take(MAX_LISTED_KEYWORDS).cloned().collect(),
            top_job_keywords,
            suggestions,
            bullet_examples,
            resume_rewrite,
            action_items,
            debug: MatchDebug {
                tfidf_score: round_to(lexical * 100.0, 2),
                skill_coverage: round_to(coverage * 100.0, 2),
                semantic_score,
            },
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

fn empty_result(semantic_score: Option<f64>) -> MatchResult {
    MatchResult {
        score: 0,
        note: EMPTY_INPUT_NOTE.to_string(),
        matched_keywords: vec![],
        missing_keywords: vec![],
        top_job_keywords: vec![],
        suggestions: vec![],
        bullet_examples: vec![],
        resume_rewrite: vec![],
        action_items: vec![],
        debug: MatchDebug {
            tfidf_score: 0.0,
            skill_coverage: 0.0,
            semantic_score,
        },
    }
}
