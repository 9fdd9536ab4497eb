//! Synonym and antonym collection over the lexical sense graph.
//!
//! Synonyms take the union of every lemma of every sense. Antonyms take only
//! the first registered antonym of each lemma. Output is keyed by the
//! capitalized word, unlike the lowercase keys used by other analyses.

use indexmap::IndexSet;
use lexiscope_types::RelatedWords;

use crate::cache::LookupCache;
use crate::error::AnalysisError;
use crate::normalizer::NormalizedText;

/// A word needs at least this many distinct synonyms to be reported
pub const MIN_SYNONYMS: usize = 2;

/// A word needs at least this many distinct antonyms to be reported
pub const MIN_ANTONYMS: usize = 1;

pub async fn synonyms(
    text: &NormalizedText,
    cache: &LookupCache<'_>,
    max_words: usize,
) -> Result<RelatedWords, AnalysisError> {
    let mut related = RelatedWords::new();

    for word in text.distinct_words(max_words) {
        let senses = cache.senses(word).await?;

        let found: IndexSet<String> = senses
            .iter()
            .flat_map(|sense| sense.lemmas.iter())
            .map(|lemma| display_lemma(&lemma.name))
            .collect();

        if found.len() >= MIN_SYNONYMS {
            related.insert(capitalize(word), found);
        }
    }

    Ok(related)
}

pub async fn antonyms(
    text: &NormalizedText,
    cache: &LookupCache<'_>,
    max_words: usize,
) -> Result<RelatedWords, AnalysisError> {
    let mut related = RelatedWords::new();

    for word in text.distinct_words(max_words) {
        let senses = cache.senses(word).await?;

        let found: IndexSet<String> = senses
            .iter()
            .flat_map(|sense| sense.lemmas.iter())
            .filter_map(|lemma| lemma.antonyms.first())
            .map(|antonym| display_lemma(antonym))
            .collect();

        if found.len() >= MIN_ANTONYMS {
            related.insert(capitalize(word), found);
        }
    }

    Ok(related)
}

/// `ice_cream` -> `Ice cream`
pub fn display_lemma(name: &str) -> String {
    capitalize(&name.replace('_', " "))
}

/// First character upper case, the rest lower case
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
