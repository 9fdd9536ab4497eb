use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use futures_util::future::join_all;
use lexiscope_config::analysis::AnalysisConfig;
use lexiscope_translator::Translator;
use lexiscope_types::{AnalysisKind, AnalysisPayload, AnalysisRequest, AnalysisResult};
use tracing::Instrument;
use uuid::Uuid;

use crate::cache::LookupCache;
use crate::definitions::define_words;
use crate::error::AnalysisError;
use crate::frequency::count_words;
use crate::language::LanguageProcessor;
use crate::lexicon::LexicalDatabase;
use crate::normalizer::{LanguageNormalizer, NormalizedText};
use crate::related;
use crate::roundtrip::TranslationRoundTripper;
use crate::sentiment::{SentimentModel, score_sentiment};
use crate::spelling::correct_spelling;

/// Entry point for text analysis.
///
/// Holds the long-lived collaborators; nothing is mutated between requests.
#[derive(Clone)]
pub struct TextAnalyzer {
    translator: Arc<dyn Translator>,
    processor: Arc<dyn LanguageProcessor>,
    lexicon: Arc<dyn LexicalDatabase>,
    sentiment: Arc<dyn SentimentModel>,
    config: AnalysisConfig,
}

impl TextAnalyzer {
    pub fn new(
        translator: Arc<dyn Translator>,
        processor: Arc<dyn LanguageProcessor>,
        lexicon: Arc<dyn LexicalDatabase>,
        sentiment: Arc<dyn SentimentModel>,
        config: AnalysisConfig,
    ) -> Self {
        Self {
            translator,
            processor,
            lexicon,
            sentiment,
            config,
        }
    }

    /// Normalize once, then run each requested kind concurrently.
    ///
    /// Only normalization failures are returned as `Err`. A kind that fails
    /// or panics is recorded under its own key and its siblings still run.
    /// Dropping the returned future abandons all in-flight lookups.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("analyze", %request_id);

        async move {
            tracing::info!(
                "Analyzing {} chars for {} kinds",
                request.text.chars().count(),
                request.kinds.len()
            );

            let text = LanguageNormalizer::new(self.translator.as_ref(), self.processor.as_ref())
                .normalize(&request.text)
                .await
                .inspect_err(|e| tracing::warn!("Normalization failed: {}", e))?;

            tracing::debug!(
                "Normalized from '{}' ({} words, translated: {})",
                text.original_language(),
                text.words().len(),
                text.was_translated()
            );

            let cache = LookupCache::new(self.lexicon.as_ref());
            let (text, cache) = (&text, &cache);
            let runs = request.kinds.iter().map(|&kind| async move {
                let outcome = AssertUnwindSafe(self.run(kind, text, cache))
                    .catch_unwind()
                    .await;
                (kind, outcome)
            });

            let mut result = AnalysisResult::new();
            for (kind, outcome) in join_all(runs).await {
                let payload = match outcome {
                    Ok(Ok(payload)) => payload,
                    Ok(Err(e)) => {
                        tracing::warn!("Analysis '{}' failed: {}", kind, e);
                        AnalysisPayload::failed(e.to_string())
                    }
                    Err(panic) => {
                        let e = AnalysisError::Panicked {
                            kind: kind.to_string(),
                            message: panic_message(panic.as_ref()),
                        };
                        tracing::error!("{}", e);
                        AnalysisPayload::failed(e.to_string())
                    }
                };
                result.insert(kind, payload);
            }

            tracing::info!("Analysis finished with {} keys", result.len());
            Ok(result)
        }
        .instrument(span)
        .await
    }

    async fn run(
        &self,
        kind: AnalysisKind,
        text: &NormalizedText,
        cache: &LookupCache<'_>,
    ) -> Result<AnalysisPayload, AnalysisError> {
        let max_words = self.config.max_words;

        let payload = match kind {
            AnalysisKind::Translate => {
                let target = self.config.display_target(text.original_language());
                let translated = TranslationRoundTripper::new(self.translator.as_ref(), target)
                    .round_trip(text)
                    .await?;
                AnalysisPayload::Translation(translated)
            }
            AnalysisKind::EmotionalColor => {
                AnalysisPayload::Sentiment(score_sentiment(self.sentiment.as_ref(), text))
            }
            AnalysisKind::CountWords => AnalysisPayload::WordCounts(count_words(text.words())),
            AnalysisKind::Synonyms => {
                AnalysisPayload::Related(related::synonyms(text, cache, max_words).await?)
            }
            AnalysisKind::Antonyms => {
                AnalysisPayload::Related(related::antonyms(text, cache, max_words).await?)
            }
            AnalysisKind::Definitions => {
                AnalysisPayload::Definitions(define_words(text, cache, max_words).await?)
            }
            AnalysisKind::Correct => {
                AnalysisPayload::Spelling(correct_spelling(text, cache, max_words).await?)
            }
        };

        Ok(payload)
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
