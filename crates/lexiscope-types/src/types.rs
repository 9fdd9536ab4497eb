use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::kind::AnalysisKind;

/// Raw text plus the analyses the caller wants run on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub text: String,
    /// Request order is kept for display, duplicates collapse
    pub kinds: IndexSet<AnalysisKind>,
}

impl AnalysisRequest {
    pub fn new(text: impl Into<String>, kinds: impl IntoIterator<Item = AnalysisKind>) -> Self {
        Self {
            text: text.into(),
            kinds: kinds.into_iter().collect(),
        }
    }

    pub fn wants(&self, kind: AnalysisKind) -> bool {
        self.kinds.contains(&kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequencyEntry {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// -1.0 (negative) to 1.0 (positive)
    pub polarity: f64,
    /// 0.0 (objective) to 1.0 (subjective)
    pub subjectivity: f64,
}

impl SentimentScore {
    pub fn neutral() -> Self {
        Self {
            polarity: 0.0,
            subjectivity: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellingCorrection {
    pub original: String,
    pub suggested: String,
    /// Position in the ranked suggestion list, best is 0
    pub rank: usize,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellingReport {
    /// Full text as the corrector rewrote it
    pub corrected: String,
    /// Best suggestion per distinct word
    pub words: IndexMap<String, SpellingCorrection>,
}

/// Word to related lemmas, keyed by the capitalized word
pub type RelatedWords = IndexMap<String, IndexSet<String>>;

/// Word to its dictionary definitions, keyed by the word as tokenized
pub type Definitions = IndexMap<String, Vec<String>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisFailure {
    pub error: String,
}

/// Output of one analysis kind.
///
/// Serialized untagged. A failure is `{"error": "<message>"}` with a string
/// value; definitions of the word "error" share the key but map it to an
/// array, so JSON consumers must check the value type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisPayload {
    Translation(String),
    Sentiment(SentimentScore),
    WordCounts(Vec<WordFrequencyEntry>),
    Related(RelatedWords),
    Definitions(Definitions),
    Spelling(SpellingReport),
    Failed(AnalysisFailure),
}

impl AnalysisPayload {
    pub fn failed(message: impl Into<String>) -> Self {
        AnalysisPayload::Failed(AnalysisFailure {
            error: message.into(),
        })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, AnalysisPayload::Failed(_))
    }
}

/// Results keyed by analysis kind, in request order.
///
/// A key is present only if the kind was requested; a failed kind carries
/// [`AnalysisPayload::Failed`] instead of being dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AnalysisResult {
    entries: IndexMap<AnalysisKind, AnalysisPayload>,
}

impl AnalysisResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: AnalysisKind, payload: AnalysisPayload) {
        self.entries.insert(kind, payload);
    }

    pub fn get(&self, kind: AnalysisKind) -> Option<&AnalysisPayload> {
        self.entries.get(&kind)
    }

    pub fn is_failed(&self, kind: AnalysisKind) -> bool {
        self.get(kind).is_some_and(AnalysisPayload::is_failed)
    }

    pub fn kinds(&self) -> impl Iterator<Item = AnalysisKind> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
