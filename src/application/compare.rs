use crate::domain::error::CompareError;
use crate::domain::model::{ModelId, Settlement, TranslationResults};
use crate::domain::traits::Translator;
use tracing::{debug, info, warn};

/// Translate `text` with all three models and collect what succeeded.
///
/// The three calls run concurrently on the current task and are all awaited,
/// whatever their outcome. A rate-limited model fails the whole comparison and
/// discards the other results; any other failure just leaves that slot empty.
/// Blank input is the caller's concern.
pub async fn translate_all<T>(translator: &T, text: &str) -> Result<TranslationResults, CompareError>
where
    T: Translator + ?Sized,
{
    debug!(len = text.len(), "fanning out translation");

    let (bart, google, seq2seq) = tokio::join!(
        translator.translate(ModelId::Bart, text),
        translator.translate(ModelId::Google, text),
        translator.translate(ModelId::Seq2seq, text),
    );

    let results = fold_settlements([
        (ModelId::Bart, bart),
        (ModelId::Google, google),
        (ModelId::Seq2seq, seq2seq),
    ])?;

    info!(populated = results.len(), "translation comparison settled");
    Ok(results)
}

/// Fold settlements into a fresh aggregate, in the order given.
///
/// Returns the first rate-limit error encountered.
pub fn fold_settlements<I>(settlements: I) -> Result<TranslationResults, CompareError>
where
    I: IntoIterator<Item = (ModelId, Settlement)>,
{
    let mut results = TranslationResults::default();

    for (model, settlement) in settlements {
        match settlement {
            Ok(response) => results.set(model, response.translation),
            Err(e) if e.is_rate_limit() => return Err(e),
            Err(e) => {
                if let CompareError::Failed {
                    detail: Some(detail),
                    ..
                } = &e
                {
                    warn!(%model, error = %e, %detail, "translation unavailable");
                } else {
                    warn!(%model, error = %e, "translation unavailable");
                }
            }
        }
    }

    Ok(results)
}
