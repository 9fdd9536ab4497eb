use lexiscope_types::Definitions;

use crate::cache::LookupCache;
use crate::error::AnalysisError;
use crate::normalizer::NormalizedText;

/// Dictionary definitions per distinct word, one per sense.
///
/// Words without any definition are omitted, so a text with no known words
/// yields an empty mapping.
pub async fn define_words(
    text: &NormalizedText,
    cache: &LookupCache<'_>,
    max_words: usize,
) -> Result<Definitions, AnalysisError> {
    let mut definitions = Definitions::new();

    for word in text.distinct_words(max_words) {
        let senses = cache.senses(word).await?;
        let found: Vec<String> = senses
            .iter()
            .map(|sense| sense.definition.trim())
            .filter(|definition| !definition.is_empty())
            .map(String::from)
            .collect();

        if !found.is_empty() {
            definitions.insert(word.to_string(), found);
        }
    }

    Ok(definitions)
}
