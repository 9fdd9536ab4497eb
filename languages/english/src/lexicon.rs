use std::path::Path;

use async_trait::async_trait;
use lexiscope_core::LookupError;
use lexiscope_core::lexicon::{
    LexicalDatabase, LexiconLoader, LexiconMetadata, SpellingCandidate, WordSense,
};

use crate::frequency::WordFrequency;
use crate::loader::{LexiconData, LexiconDataLoader};
use crate::morphy::EnglishMorphy;
use crate::speller::EnglishSpeller;

/// English sense graph with spelling support
pub struct EnglishLexicon {
    data: LexiconData,
    morphy: EnglishMorphy,
    speller: EnglishSpeller,
}

impl EnglishLexicon {
    /// Create a lexicon from the embedded data only
    pub fn new() -> Self {
        Self::with_additional(&[], None)
    }

    /// Create a lexicon with extra lexicon files and an optional frequency list
    pub fn with_additional(additional_paths: &[String], frequency_path: Option<&str>) -> Self {
        let mut data = LexiconDataLoader::load_embedded().unwrap_or_else(|e| {
            tracing::error!("Failed to load embedded lexicon: {}", e);
            tracing::warn!("Starting with empty lexicon");
            LexiconData::default()
        });

        for path in additional_paths {
            match LexiconDataLoader::load_from_file(Path::new(path)) {
                Ok(additional) => {
                    tracing::info!("Merging additional lexicon from: {}", path);
                    data = data.merge(additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load lexicon from {}: {}", path, e);
                }
            }
        }

        let frequency = match frequency_path {
            Some(path) => WordFrequency::load_from_file(Path::new(path)).unwrap_or_else(|e| {
                tracing::warn!("Failed to load frequency list from {}: {}", path, e);
                WordFrequency::with_defaults()
            }),
            None => WordFrequency::with_defaults(),
        };

        Self::from_parts(data, EnglishSpeller::new(frequency))
    }

    pub fn from_parts(data: LexiconData, speller: EnglishSpeller) -> Self {
        Self {
            data,
            morphy: EnglishMorphy::new(),
            speller,
        }
    }

    /// Senses of the word itself, else of its first base form that has any
    pub fn lookup(&self, word: &str) -> Vec<WordSense> {
        let word = word.trim().to_lowercase();

        if let Some(senses) = self.data.senses.get(&word) {
            return senses.clone();
        }

        for base in self.morphy.base_forms(&word) {
            if let Some(senses) = self.data.senses.get(&base.base_form) {
                tracing::debug!(
                    "'{}' resolved to '{}' ({})",
                    word,
                    base.base_form,
                    base.inflection
                );
                return senses.clone();
            }
        }

        vec![]
    }
}

impl Default for EnglishLexicon {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LexicalDatabase for EnglishLexicon {
    async fn senses_of(&self, word: &str) -> Result<Vec<WordSense>, LookupError> {
        Ok(self.lookup(word))
    }

    async fn spelling_suggestions_of(
        &self,
        word: &str,
    ) -> Result<Vec<SpellingCandidate>, LookupError> {
        Ok(self.speller.suggest(word))
    }

    async fn correct_text(&self, text: &str) -> Result<String, LookupError> {
        Ok(self.speller.correct_text(text))
    }

    fn metadata(&self) -> LexiconMetadata {
        LexiconMetadata {
            name: self.data.name.clone(),
            language: "en".to_string(),
            entry_count: self.data.entry_count(),
        }
    }
}
