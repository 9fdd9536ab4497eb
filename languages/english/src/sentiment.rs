use std::collections::{HashMap, HashSet};
use std::path::Path;

use lexiscope_core::lexicon::LoadError;
use lexiscope_core::sentiment::SentimentModel;
use lexiscope_types::SentimentScore;
use serde::Deserialize;
use unicode_segmentation::UnicodeSegmentation;

/// Polarity multiplier applied after a negation
const NEGATION_FACTOR: f64 = -0.5;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WordSentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

#[derive(Debug, Deserialize)]
struct SentimentJson {
    words: HashMap<String, WordSentiment>,
    #[serde(default)]
    intensifiers: HashMap<String, f64>,
    #[serde(default)]
    negations: Vec<String>,
}

/// Lexicon-based polarity and subjectivity scoring.
///
/// Each known word is one assessment. An intensifier right before it scales
/// both scores, a negation before it (or before its intensifier) flips and
/// halves the polarity. The text score is the mean of all assessments.
#[derive(Debug, Clone)]
pub struct EnglishSentiment {
    words: HashMap<String, WordSentiment>,
    intensifiers: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl EnglishSentiment {
    /// Create with the embedded lexicon
    pub fn with_defaults() -> Self {
        Self::from_json(include_str!("../data/sentiment.json")).unwrap_or_else(|e| {
            tracing::error!("Failed to load embedded sentiment lexicon: {}", e);
            Self::empty()
        })
    }

    pub fn empty() -> Self {
        Self {
            words: HashMap::new(),
            intensifiers: HashMap::new(),
            negations: HashSet::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let data: SentimentJson =
            serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;

        Ok(Self {
            words: data.words,
            intensifiers: data.intensifiers,
            negations: data.negations.into_iter().collect(),
        })
    }

    pub fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        Self::from_json(&std::fs::read_to_string(path)?)
    }

    fn is_negation(&self, token: &str) -> bool {
        self.negations.contains(token) || token.ends_with("n't")
    }
}

impl SentimentModel for EnglishSentiment {
    fn score(&self, text: &str) -> SentimentScore {
        let tokens: Vec<String> = text
            .unicode_words()
            .map(|w| w.to_lowercase().replace('\u{2019}', "'"))
            .collect();

        let mut assessments: Vec<WordSentiment> = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let Some(entry) = self.words.get(token) else {
                continue;
            };
            let mut polarity = entry.polarity;
            let mut subjectivity = entry.subjectivity;

            let mut modifier_at = i;
            if let Some(intensity) = i
                .checked_sub(1)
                .and_then(|j| self.intensifiers.get(&tokens[j]))
            {
                polarity *= intensity;
                subjectivity *= intensity;
                modifier_at = i - 1;
            }

            if modifier_at
                .checked_sub(1)
                .is_some_and(|j| self.is_negation(&tokens[j]))
            {
                polarity *= NEGATION_FACTOR;
            }

            assessments.push(WordSentiment {
                polarity,
                subjectivity,
            });
        }

        if assessments.is_empty() {
            return SentimentScore::neutral();
        }

        let n = assessments.len() as f64;
        SentimentScore {
            polarity: (assessments.iter().map(|a| a.polarity).sum::<f64>() / n).clamp(-1.0, 1.0),
            subjectivity: (assessments.iter().map(|a| a.subjectivity).sum::<f64>() / n)
                .clamp(0.0, 1.0),
        }
    }
}
