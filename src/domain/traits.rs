use crate::domain::model::{ModelId, Settlement};
use async_trait::async_trait;

/// Trait for translation backends
///
/// The orchestrator only talks to this trait, so the HTTP transport can be
/// swapped for an in-process implementation.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` with one model. Any error is that model's failure alone.
    async fn translate(&self, model: ModelId, text: &str) -> Settlement;
}
