//! Frequency-ranked spelling suggestions and whole-text correction.

use std::cmp::min;

use lexiscope_core::lexicon::SpellingCandidate;
use unicode_segmentation::UnicodeSegmentation;

use crate::frequency::WordFrequency;

/// Maximum number of suggestions returned per word
pub const MAX_SUGGESTIONS: usize = 5;

/// Maximum edit distance searched
pub const MAX_DISTANCE: usize = 2;

pub struct EnglishSpeller {
    frequency: WordFrequency,
}

impl EnglishSpeller {
    pub fn new(frequency: WordFrequency) -> Self {
        Self { frequency }
    }

    /// Ranked candidates for one word.
    ///
    /// A known word suggests itself. Otherwise the nearest known words are
    /// taken (distance 1 before distance 2), most frequent first. Tokens
    /// that are not purely alphabetic are returned unchanged.
    pub fn suggest(&self, word: &str) -> Vec<SpellingCandidate> {
        let word = word.to_lowercase();

        if word.is_empty() {
            return vec![];
        }

        if self.frequency.contains(&word) || !word.chars().all(char::is_alphabetic) {
            return vec![SpellingCandidate {
                word,
                confidence: 1.0,
            }];
        }

        for distance in 1..=MAX_DISTANCE {
            let mut candidates: Vec<(&str, u64)> = self
                .frequency
                .iter()
                .filter(|(known, _)| {
                    levenshtein_distance_threshold(&word, known, distance) == Some(distance)
                })
                .collect();

            if candidates.is_empty() {
                continue;
            }

            candidates.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

            let total: u64 = candidates.iter().map(|(_, count)| count).sum();
            return candidates
                .into_iter()
                .take(MAX_SUGGESTIONS)
                .map(|(known, count)| SpellingCandidate {
                    word: known.to_string(),
                    confidence: if total == 0 {
                        0.0
                    } else {
                        count as f64 / total as f64
                    },
                })
                .collect();
        }

        vec![]
    }

    /// Replace every word of `text` with its best suggestion.
    ///
    /// Spacing and punctuation are kept, as is the capitalization of the
    /// original word.
    pub fn correct_text(&self, text: &str) -> String {
        text.split_word_bounds()
            .map(|segment| {
                if !segment.chars().any(char::is_alphabetic) {
                    return segment.to_string();
                }

                match self.suggest(segment).into_iter().next() {
                    Some(best) => match_case(segment, &best.word),
                    None => segment.to_string(),
                }
            })
            .collect()
    }
}

fn match_case(original: &str, replacement: &str) -> String {
    let letters: Vec<char> = original.chars().filter(|c| c.is_alphabetic()).collect();

    if letters.len() > 1 && letters.iter().all(|c| c.is_uppercase()) {
        return replacement.to_uppercase();
    }

    if original.chars().next().is_some_and(char::is_uppercase) {
        let mut chars = replacement.chars();
        return match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
    }

    replacement.to_string()
}

/// Levenshtein distance, or None once it is certain to exceed `threshold`
#[allow(clippy::needless_range_loop)]
pub fn levenshtein_distance_threshold(s1: &str, s2: &str, threshold: usize) -> Option<usize> {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    // Early termination if length difference exceeds threshold
    if len1.abs_diff(len2) > threshold {
        return None;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;
        let mut min_in_row = i;

        for j in 1..=len2 {
            let cost = if s1_chars[i - 1] == s2_chars[j - 1] { 0 } else { 1 };

            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );
            min_in_row = min(min_in_row, curr_row[j]);
        }

        if min_in_row > threshold {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[len2];
    (distance <= threshold).then_some(distance)
}
