use indexmap::IndexMap;
use lexiscope_types::WordFrequencyEntry;

/// Count word occurrences.
///
/// Sorted by count descending; equal counts keep first-occurrence order.
pub fn count_words(words: &[String]) -> Vec<WordFrequencyEntry> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for word in words {
        *counts.entry(word.as_str()).or_default() += 1;
    }

    let mut entries: Vec<WordFrequencyEntry> = counts
        .into_iter()
        .map(|(word, count)| WordFrequencyEntry {
            word: word.to_string(),
            count,
        })
        .collect();

    // sort_by is stable
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}
