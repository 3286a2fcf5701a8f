#![allow(dead_code)]

use async_trait::async_trait;
use mt_compare::domain::error::CompareError;
use mt_compare::domain::model::{ModelId, Settlement, TranslationResponse};
use mt_compare::domain::traits::Translator;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Clone, Debug)]
pub enum Reply {
    Text(String),
    Status(u16),
    RateLimited,
}

/// In-process translator with a scripted reply and delay per model
#[derive(Default)]
pub struct ScriptedTranslator {
    replies: HashMap<ModelId, (Duration, Reply)>,
    calls: AtomicUsize,
}

impl ScriptedTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, model: ModelId, reply: Reply) -> Self {
        self.replies.insert(model, (Duration::ZERO, reply));
        self
    }

    pub fn delayed(mut self, model: ModelId, delay: Duration, reply: Reply) -> Self {
        self.replies.insert(model, (delay, reply));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

pub fn text(s: &str) -> Reply {
    Reply::Text(s.to_string())
}

#[async_trait]
impl Translator for ScriptedTranslator {
    async fn translate(&self, model: ModelId, _text: &str) -> Settlement {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let (delay, reply) = self
            .replies
            .get(&model)
            .cloned()
            .unwrap_or((Duration::ZERO, Reply::Status(500)));

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        match reply {
            Reply::Text(translation) => Ok(TranslationResponse {
                translation,
                model: model.as_str().to_string(),
            }),
            Reply::Status(status) => Err(CompareError::Failed {
                model,
                status,
                detail: None,
            }),
            Reply::RateLimited => Err(CompareError::RateLimited { model }),
        }
    }
}
