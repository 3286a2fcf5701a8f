use crate::domain::error::CompareError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three translation backends.
///
/// The set is closed: endpoint paths and result slots are tied to exactly
/// these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelId {
    Bart,
    Google,
    Seq2seq,
}

impl ModelId {
    /// Fixed fold order for the aggregate.
    pub const ALL: [ModelId; 3] = [ModelId::Bart, ModelId::Google, ModelId::Seq2seq];

    /// Name used in the endpoint path (`/translate/{name}`)
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::Bart => "bart",
            ModelId::Google => "google",
            ModelId::Seq2seq => "seq2seq",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ModelId::Bart => "BART",
            ModelId::Google => "Google Translate",
            ModelId::Seq2seq => "Seq2Seq",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ModelId::Bart => "Fine-tuned BART model for English-French translation",
            ModelId::Google => "Professional translation service",
            ModelId::Seq2seq => "Custom sequence-to-sequence model with attention",
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// 请求体: POST /translate/{model}
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranslationRequest {
    pub text: String,
}

// 成功响应体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranslationResponse {
    pub translation: String,
    pub model: String,
}

/// Per-invocation aggregate of successful translations.
///
/// `None` means the model produced nothing; `Some("")` is an empty translation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranslationResults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bart: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq2seq: Option<String>,
}

impl TranslationResults {
    pub fn get(&self, model: ModelId) -> Option<&str> {
        match model {
            ModelId::Bart => self.bart.as_deref(),
            ModelId::Google => self.google.as_deref(),
            ModelId::Seq2seq => self.seq2seq.as_deref(),
        }
    }

    pub fn set(&mut self, model: ModelId, translation: String) {
        let slot = match model {
            ModelId::Bart => &mut self.bart,
            ModelId::Google => &mut self.google,
            ModelId::Seq2seq => &mut self.seq2seq,
        };
        *slot = Some(translation);
    }

    /// Number of populated slots
    pub fn len(&self) -> usize {
        ModelId::ALL
            .iter()
            .filter(|m| self.get(**m).is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slots in fixed order, including absent ones
    pub fn iter(&self) -> impl Iterator<Item = (ModelId, Option<&str>)> + '_ {
        ModelId::ALL.into_iter().map(move |m| (m, self.get(m)))
    }
}

/// Outcome of a single backend call.
pub type Settlement = Result<TranslationResponse, CompareError>;

// GET /health 响应
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub device: String,
}
