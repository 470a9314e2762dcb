// Service exports
pub mod semantic;

pub use semantic::{HttpEmbedder, SemanticAdapter, SemanticError, SimilarityProvider};
