use crate::config::SemanticSettings;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::OnceCell;

/// Errors that can occur when talking to the embedding backend
#[derive(Debug, Error)]
pub enum SemanticError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Embedding API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Embedding dimensions differ: {0} vs {1}")]
    DimensionMismatch(usize, usize),

    #[error("Embedding backend did not respond within {0}s")]
    Timeout(u64),
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a [&'a str],
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
    #[serde(default)]
    index: Option<usize>,
}

/// Client for an OpenAI-compatible `/embeddings` endpoint
pub struct HttpEmbedder {
    endpoint: String,
    model: String,
    api_key: Option<String>,
    client: Client,
}

impl std::fmt::Debug for HttpEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpEmbedder")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl HttpEmbedder {
    pub fn new(
        endpoint: String,
        model: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, SemanticError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            endpoint,
            model,
            api_key,
            client,
        })
    }

    /// Embed a batch of texts, returning vectors in input order
    pub async fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, SemanticError> {
        let mut request = self.client.post(&self.endpoint).json(&EmbeddingRequest {
            model: &self.model,
            input: texts,
        });

        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(SemanticError::ApiError(format!(
                "Failed to embed texts: {}",
                response.status()
            )));
        }

        let mut body: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| SemanticError::InvalidResponse(e.to_string()))?;

        if body.data.len() != texts.len() {
            return Err(SemanticError::InvalidResponse(format!(
                "Expected {} embeddings, got {}",
                texts.len(),
                body.data.len()
            )));
        }

        body.data.sort_by_key(|d| d.index.unwrap_or(usize::MAX));
        Ok(body.data.into_iter().map(|d| d.embedding).collect())
    }

    /// Cosine similarity of two texts, in [-1, 1]
    pub async fn similarity(&self, text_a: &str, text_b: &str) -> Result<f64, SemanticError> {
        let embeddings = self.embed(&[text_a, text_b]).await?;
        let (a, b) = match embeddings.as_slice() {
            [a, b] => (a, b),
            _ => return Err(SemanticError::InvalidResponse("Expected two embeddings".into())),
        };

        if a.len() != b.len() {
            return Err(SemanticError::DimensionMismatch(a.len(), b.len()));
        }

        let a = unit_vector(a);
        let b = unit_vector(b);
        let dot: f64 = a.iter().zip(&b).map(|(x, y)| x * y).sum();

        Ok(dot.clamp(-1.0, 1.0))
    }
}

fn unit_vector(values: &[f32]) -> Vec<f64> {
    let norm = values.iter().map(|v| (*v as f64).powi(2)).sum::<f64>().sqrt();
    if norm == 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| *v as f64 / norm).collect()
}

/// Outcome of initializing the embedding backend
#[derive(Debug)]
pub enum SimilarityProvider {
    Available(HttpEmbedder),
    Unavailable,
}

/// Shared answer when the initialization task itself died
static UNAVAILABLE: SimilarityProvider = SimilarityProvider::Unavailable;

/// Process-wide semantic similarity capability
///
/// The backend is resolved lazily on first use. The loader runs on its own
/// task, so a caller that is dropped mid-initialization does not abandon it;
/// later callers wait on the same attempt. Its outcome (including failure) is
/// kept for the life of the process. Similarity never fails: any problem
/// yields `None`.
#[derive(Debug)]
pub struct SemanticAdapter {
    settings: SemanticSettings,
    provider: Arc<OnceCell<SimilarityProvider>>,
}

impl SemanticAdapter {
    pub fn new(settings: SemanticSettings) -> Self {
        Self {
            settings,
            provider: Arc::new(OnceCell::new()),
        }
    }

    /// Adapter that always reports the capability as unavailable
    pub fn disabled() -> Self {
        Self {
            settings: SemanticSettings::default(),
            provider: Arc::new(OnceCell::new_with(Some(SimilarityProvider::Unavailable))),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.provider.initialized()
    }

    /// Resolve the provider, initializing it at most once
    pub async fn provider(&self) -> &SimilarityProvider {
        if let Some(provider) = self.provider.get() {
            return provider;
        }

        let cell = Arc::clone(&self.provider);
        let settings = self.settings.clone();
        let init = tokio::spawn(async move {
            cell.get_or_init(|| load(settings)).await;
        });

        if let Err(e) = init.await {
            tracing::warn!("Semantic initialization task failed: {}", e);
        }

        self.provider.get().unwrap_or(&UNAVAILABLE)
    }

    /// Embedding similarity of two texts, or `None` if unavailable
    pub async fn similarity(&self, text_a: &str, text_b: &str) -> Option<f64> {
        let embedder = match self.provider().await {
            SimilarityProvider::Available(embedder) => embedder,
            SimilarityProvider::Unavailable => return None,
        };

        match embedder.similarity(text_a, text_b).await {
            Ok(score) => Some(score),
            Err(e) => {
                tracing::warn!("Semantic similarity failed, omitting score: {}", e);
                None
            }
        }
    }
}

async fn load(settings: SemanticSettings) -> SimilarityProvider {
    let endpoint = match (settings.enabled, &settings.endpoint) {
        (true, Some(endpoint)) if !endpoint.trim().is_empty() => endpoint.clone(),
        _ => {
            tracing::info!("Semantic similarity disabled");
            return SimilarityProvider::Unavailable;
        }
    };

    let timeout_secs = settings.timeout_secs;
    let embedder = match HttpEmbedder::new(
        endpoint,
        settings.model.clone(),
        settings.api_key.clone(),
        Duration::from_secs(timeout_secs),
    ) {
        Ok(embedder) => embedder,
        Err(e) => {
            tracing::warn!("Failed to create embedding client: {}", e);
            return SimilarityProvider::Unavailable;
        }
    };

    // Probe once so a dead backend is not retried on every request
    let probe = tokio::time::timeout(Duration::from_secs(timeout_secs), embedder.embed(&["ping"]))
        .await
        .unwrap_or(Err(SemanticError::Timeout(timeout_secs)));

    match probe {
        Ok(_) => {
            tracing::info!("Semantic similarity enabled (model: {})", settings.model);
            SimilarityProvider::Available(embedder)
        }
        Err(e) => {
            tracing::warn!("Embedding backend unavailable, semantic score disabled: {}", e);
            SimilarityProvider::Unavailable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_vector() {
        let v = unit_vector(&[3.0, 4.0]);
        assert!((v[0] - 0.6).abs() < 1e-9);
        assert!((v[1] - 0.8).abs() < 1e-9);
        assert_eq!(unit_vector(&[0.0, 0.0]), vec![0.0, 0.0]);
    }

    #[tokio::test]
    async fn test_disabled_adapter_returns_none() {
        let adapter = SemanticAdapter::disabled();
        assert!(adapter.is_initialized());
        assert_eq!(adapter.similarity("a", "b").await, None);
    }

    #[tokio::test]
    async fn test_missing_endpoint_is_unavailable() {
        let settings = SemanticSettings {
            enabled: true,
            endpoint: None,
            ..SemanticSettings::default()
        };
        let adapter = SemanticAdapter::new(settings);

        assert!(!adapter.is_initialized());
        assert!(matches!(adapter.provider().await, SimilarityProvider::Unavailable));
        assert!(adapter.is_initialized());
    }
}
