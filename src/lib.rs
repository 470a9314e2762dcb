//! Resume Match - scores how well a resume fits a job description
//!
//! This library provides the matching engine: tokenization, TF-IDF similarity,
//! skill coverage and the rule engines that turn them into keyword-level
//! feedback. An optional embedding backend adds a diagnostic semantic score.

pub mod config;
pub mod core;
pub mod feedback;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{tokenize, Matcher, TermWeights};
pub use models::{MatchRequest, MatchResult, ScoringWeights};
pub use services::{SemanticAdapter, SimilarityProvider};
