use std::path::Path;

use async_trait::async_trait;

use crate::error::LookupError;

/// Read-only access to a lexical database: word senses, relations, spelling
#[async_trait]
pub trait LexicalDatabase: Send + Sync {
    /// Every sense of a word, most common first
    async fn senses_of(&self, word: &str) -> Result<Vec<WordSense>, LookupError>;

    /// Ranked spelling candidates, best first
    async fn spelling_suggestions_of(
        &self,
        word: &str,
    ) -> Result<Vec<SpellingCandidate>, LookupError>;

    /// Corrected version of a whole text
    async fn correct_text(&self, text: &str) -> Result<String, LookupError>;

    /// Get database metadata
    fn metadata(&self) -> LexiconMetadata;
}

/// One meaning of a word
#[derive(Debug, Clone, PartialEq)]
pub struct WordSense {
    pub id: String,
    pub part_of_speech: Option<String>,
    pub definition: String,
    pub lemmas: Vec<Lemma>,
}

/// A word form attached to a sense. Names use `_` in place of spaces.
#[derive(Debug, Clone, PartialEq)]
pub struct Lemma {
    pub name: String,
    pub antonyms: Vec<String>,
}

impl Lemma {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            antonyms: vec![],
        }
    }

    pub fn with_antonyms(mut self, antonyms: &[&str]) -> Self {
        self.antonyms = antonyms.iter().map(|a| a.to_string()).collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpellingCandidate {
    pub word: String,
    pub confidence: f64,
}

#[derive(Debug, Clone)]
pub struct LexiconMetadata {
    pub name: String,
    pub language: String,
    pub entry_count: usize,
}

/// Load lexical data from files or embedded data
pub trait LexiconLoader {
    type Output;

    /// Load from file path
    fn load_from_file(path: &Path) -> Result<Self::Output, LoadError>;

    /// Load the data compiled into the binary
    fn load_embedded() -> Result<Self::Output, LoadError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
