use crate::domain::model::ModelId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error(
        "Rate limit exceeded for {model} translation. Please wait a minute before trying again."
    )]
    RateLimited { model: ModelId },

    #[error("{model} translation failed: HTTP {status}")]
    Failed {
        model: ModelId,
        status: u16,
        detail: Option<String>,
    },

    #[error("Health check failed: HTTP {0}")]
    Unhealthy(u16),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input text is empty")]
    EmptyInput,
}

impl CompareError {
    /// True only for failures that must abort the whole comparison.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, CompareError::RateLimited { .. })
    }
}
