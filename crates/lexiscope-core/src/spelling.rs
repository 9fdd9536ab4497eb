use indexmap::IndexMap;
use lexiscope_types::{SpellingCorrection, SpellingReport};

use crate::cache::LookupCache;
use crate::error::AnalysisError;
use crate::normalizer::NormalizedText;

/// Full-text correction plus the best suggestion for each distinct word.
///
/// The corrected text comes straight from the database's own corrector and
/// may disagree with the per-word suggestions; both are reported as is.
/// Words with no suggestions are left out.
pub async fn correct_spelling(
    text: &NormalizedText,
    cache: &LookupCache<'_>,
    max_words: usize,
) -> Result<SpellingReport, AnalysisError> {
    let corrected = cache.lexicon().correct_text(text.working_text()).await?;

    let mut words = IndexMap::new();
    for word in text.distinct_words(max_words) {
        let suggestions = cache.suggestions(word).await?;

        let Some(best) = suggestions.first() else {
            tracing::debug!("No spelling suggestions for '{}'", word);
            continue;
        };

        words.insert(
            word.to_string(),
            SpellingCorrection {
                original: word.to_string(),
                suggested: best.word.clone(),
                rank: 0,
                confidence: best.confidence,
            },
        );
    }

    Ok(SpellingReport { corrected, words })
}
