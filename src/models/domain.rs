use serde::{Deserialize, Serialize};

/// A ranked job keyword with its TF-IDF weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordWeight {
    pub term: String,
    pub weight: f64,
}

/// Keyword-level suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub keyword: String,
    pub message: String,
}

/// Example resume bullet for a skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletExample {
    pub keyword: String,
    pub bullet: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

/// Prioritized, templated recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub id: String,
    pub title: String,
    pub priority: Priority,
    pub category: String,
    pub why_it_matters: String,
    pub how_to_fix: Vec<String>,
    pub example: String,
}

/// Raw scoring components, reported as percentages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchDebug {
    pub tfidf_score: f64,
    pub skill_coverage: f64,
    pub semantic_score: Option<f64>,
}

/// Full result of matching a resume against a job posting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u8,
    pub note: String,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub top_job_keywords: Vec<KeywordWeight>,
    pub suggestions: Vec<Suggestion>,
    pub bullet_examples: Vec<BulletExample>,
    pub resume_rewrite: Vec<String>,
    pub action_items: Vec<ActionItem>,
    pub debug: MatchDebug,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// Weight of the TF-IDF cosine similarity
    pub lexical: f64,
    /// Weight of the skill coverage ratio
    pub coverage: f64,
    /// Scores below this get a "tailor your summary" action item
    pub tailor_threshold: u8,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            lexical: 0.70,
            coverage: 0.30,
            tailor_threshold: 60,
        }
    }
}
