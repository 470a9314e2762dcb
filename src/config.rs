use crate::models::{requests::MAX_TEXT_CHARS, ScoringWeights};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub limits: LimitSettings,
    #[serde(default)]
    pub semantic: SemanticSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8000 }

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default = "default_tailor_threshold")]
    pub tailor_threshold: u8,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            weights: WeightsConfig::default(),
            tailor_threshold: default_tailor_threshold(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_lexical_weight")]
    pub lexical: f64,
    #[serde(default = "default_coverage_weight")]
    pub coverage: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            lexical: default_lexical_weight(),
            coverage: default_coverage_weight(),
        }
    }
}

fn default_lexical_weight() -> f64 { 0.70 }
fn default_coverage_weight() -> f64 { 0.30 }
fn default_tailor_threshold() -> u8 { 60 }

impl ScoringSettings {
    /// Build matcher weights, warning when they do not sum to 1.0
    pub fn to_weights(&self) -> ScoringWeights {
        let sum = self.weights.lexical + self.weights.coverage;
        if (sum - 1.0).abs() > 1e-6 {
            tracing::warn!("Scoring weights sum to {} instead of 1.0", sum);
        }

        ScoringWeights {
            lexical: self.weights.lexical,
            coverage: self.weights.coverage,
            tailor_threshold: self.tailor_threshold,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitSettings {
    #[serde(default = "default_max_text_chars")]
    pub max_text_chars: usize,
}

impl Default for LimitSettings {
    fn default() -> Self {
        Self {
            max_text_chars: default_max_text_chars(),
        }
    }
}

fn default_max_text_chars() -> usize { MAX_TEXT_CHARS }

impl LimitSettings {
    /// Configured per-field limit, capped at the request validator's ceiling
    ///
    /// The limit can be lowered from the default but not raised above it.
    pub fn effective_max_text_chars(&self) -> usize {
        if self.max_text_chars > MAX_TEXT_CHARS {
            tracing::warn!(
                "limits.max_text_chars = {} exceeds the ceiling of {}, using the ceiling",
                self.max_text_chars,
                MAX_TEXT_CHARS
            );
            return MAX_TEXT_CHARS;
        }
        self.max_text_chars
    }
}

/// Embedding backend used for the diagnostic semantic score
#[derive(Debug, Clone, Deserialize)]
pub struct SemanticSettings {
    #[serde(default)]
    pub enabled: bool,
    pub endpoint: Option<String>,
    #[serde(default = "default_embedding_model")]
    pub model: String,
    pub api_key: Option<String>,
    #[serde(default = "default_semantic_timeout")]
    pub timeout_secs: u64,
}

impl Default for SemanticSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: None,
            model: default_embedding_model(),
            api_key: None,
            timeout_secs: default_semantic_timeout(),
        }
    }
}

fn default_embedding_model() -> String { "all-MiniLM-L6-v2".to_string() }
fn default_semantic_timeout() -> u64 { 10 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with RESUME_MATCH__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            // Local overrides for development
            .add_source(File::with_name("config/local").required(false))
            // e.g., RESUME_MATCH__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("RESUME_MATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_embedding_env(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("RESUME_MATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply the conventional EMBEDDING_ENDPOINT / EMBEDDING_API_KEY variables
///
/// Setting EMBEDDING_ENDPOINT also enables the semantic score.
fn apply_embedding_env(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(endpoint) = env::var("EMBEDDING_ENDPOINT") {
        builder = builder
            .set_override("semantic.endpoint", endpoint)?
            .set_override("semantic.enabled", true)?;
    }
    if let Ok(api_key) = env::var("EMBEDDING_API_KEY") {
        builder = builder.set_override("semantic.api_key", api_key)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.lexical, 0.70);
        assert_eq!(weights.coverage, 0.30);
        assert_eq!(default_tailor_threshold(), 60);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_scoring_settings_to_weights() {
        let weights = ScoringSettings::default().to_weights();
        assert_eq!(weights, ScoringWeights::default());
    }

    #[test]
    fn test_semantic_disabled_by_default() {
        let semantic = SemanticSettings::default();
        assert!(!semantic.enabled);
        assert!(semantic.endpoint.is_none());
        assert_eq!(semantic.model, "all-MiniLM-L6-v2");
    }

    #[test]
    fn test_default_toml_parses() {
        let raw = include_str!("../config/default.toml");
        let settings: Settings = toml::from_str(raw).expect("default config should parse");
        assert_eq!(settings.server.port, 8000);
        assert_eq!(settings.scoring.to_weights(), ScoringWeights::default());
    }

    #[test]
    fn test_text_limit_can_only_be_lowered() {
        let lowered = LimitSettings { max_text_chars: 5_000 };
        assert_eq!(lowered.effective_max_text_chars(), 5_000);

        let raised = LimitSettings { max_text_chars: MAX_TEXT_CHARS * 2 };
        assert_eq!(raised.effective_max_text_chars(), MAX_TEXT_CHARS);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: Settings = toml::from_str("[server]\nport = 9000\n").unwrap();
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.limits.max_text_chars, MAX_TEXT_CHARS);
    }
}
