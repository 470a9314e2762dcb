// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ActionItem, BulletExample, KeywordWeight, MatchDebug, MatchResult, Priority, ScoringWeights, Suggestion};
pub use requests::MatchRequest;
pub use responses::{ErrorResponse, HealthResponse};
