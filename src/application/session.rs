use crate::application::compare::translate_all;
use crate::domain::error::CompareError;
use crate::domain::model::TranslationResults;
use crate::domain::traits::Translator;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// What the caller can observe about the latest translate action
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Pending,
    Settled(TranslationResults),
    /// Whole-operation failure, message suitable for display as-is
    Failed(String),
}

impl SessionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, SessionState::Pending)
    }

    pub fn results(&self) -> Option<&TranslationResults> {
        match self {
            SessionState::Settled(results) => Some(results),
            _ => None,
        }
    }
}

/// Drives translate actions and exposes a single pending/settled state.
///
/// A new submission supersedes the one in flight: the old task is aborted and
/// its outcome, should it still arrive, is dropped.
pub struct TranslationSession {
    translator: Arc<dyn Translator>,
    state: Arc<watch::Sender<SessionState>>,
    generation: Arc<AtomicU64>,
    in_flight: Mutex<Option<JoinHandle<()>>>,
}

impl TranslationSession {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        let (state, _) = watch::channel(SessionState::Idle);
        Self {
            translator,
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            in_flight: Mutex::new(None),
        }
    }

    /// Start a translate action. Must be called inside a tokio runtime.
    ///
    /// Blank or whitespace-only text is rejected without touching the state.
    pub fn submit(&self, text: &str) -> Result<(), CompareError> {
        if text.trim().is_empty() {
            return Err(CompareError::EmptyInput);
        }

        // Generation, abort, Pending and spawn happen under one lock so the
        // stored task is always the newest generation.
        let mut in_flight = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(previous) = in_flight.take() {
            if !previous.is_finished() {
                debug!(generation, "superseding in-flight translation");
            }
            previous.abort();
        }

        self.state.send_replace(SessionState::Pending);

        let translator = Arc::clone(&self.translator);
        let state = Arc::clone(&self.state);
        let current = Arc::clone(&self.generation);
        let text = text.to_string();

        *in_flight = Some(tokio::spawn(async move {
            let settled = match translate_all(translator.as_ref(), &text).await {
                Ok(results) => SessionState::Settled(results),
                Err(e) => SessionState::Failed(e.to_string()),
            };
            state.send_if_modified(|s| {
                if current.load(Ordering::SeqCst) != generation {
                    return false;
                }
                *s = settled;
                true
            });
        }));

        Ok(())
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn is_pending(&self) -> bool {
        self.state.borrow().is_pending()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Resolve once the latest submission has settled
    pub async fn wait(&self) -> SessionState {
        let mut rx = self.state.subscribe();
        let settled = match rx.wait_for(|s| !s.is_pending()).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        };
        settled
    }
}

impl Drop for TranslationSession {
    fn drop(&mut self) {
        let in_flight = self.in_flight.get_mut().unwrap_or_else(|e| e.into_inner());
        if let Some(handle) = in_flight.take() {
            handle.abort();
        }
    }
}
