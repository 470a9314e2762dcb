// Core algorithm exports
pub mod keywords;
pub mod matcher;
pub mod ranking;
pub mod scoring;
pub mod tfidf;
pub mod tokenizer;
pub mod vocabulary;

pub use keywords::{match_keywords, skill_terms, KeywordMatch};
pub use matcher::Matcher;
pub use ranking::rank_job_keywords;
pub use scoring::calculate_match_score;
pub use tfidf::TermWeights;
pub use tokenizer::{normalize_term, tokenize};
