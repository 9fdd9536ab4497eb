use indexmap::IndexSet;
use lexiscope_translator::Translator;

use crate::error::AnalysisError;
use crate::language::{LanguageProcessor, same_language};

/// Input text as every analysis sees it.
///
/// `working_text` is always in the canonical language and `words` are its
/// tokens in text order. Built once per request, never mutated.
#[derive(Debug, Clone)]
pub struct NormalizedText {
    original_language: String,
    canonical_language: String,
    raw_text: String,
    working_text: String,
    words: Vec<String>,
}

impl NormalizedText {
    pub fn new(
        original_language: impl Into<String>,
        canonical_language: impl Into<String>,
        raw_text: impl Into<String>,
        working_text: impl Into<String>,
        words: Vec<String>,
    ) -> Self {
        Self {
            original_language: original_language.into(),
            canonical_language: canonical_language.into(),
            raw_text: raw_text.into(),
            working_text: working_text.into(),
            words,
        }
    }

    pub fn original_language(&self) -> &str {
        &self.original_language
    }

    pub fn canonical_language(&self) -> &str {
        &self.canonical_language
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn working_text(&self) -> &str {
        &self.working_text
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn was_translated(&self) -> bool {
        !same_language(&self.original_language, &self.canonical_language)
    }

    /// Distinct words in first-occurrence order, at most `limit` (0 = all)
    pub fn distinct_words(&self, limit: usize) -> Vec<&str> {
        let distinct: IndexSet<&str> = self.words.iter().map(String::as_str).collect();
        let limit = if limit == 0 { distinct.len() } else { limit };

        distinct.into_iter().take(limit).collect()
    }
}

/// Detects the input language and produces the canonical working copy
pub struct LanguageNormalizer<'a> {
    translator: &'a dyn Translator,
    processor: &'a dyn LanguageProcessor,
}

impl<'a> LanguageNormalizer<'a> {
    pub fn new(translator: &'a dyn Translator, processor: &'a dyn LanguageProcessor) -> Self {
        Self {
            translator,
            processor,
        }
    }

    pub async fn normalize(&self, raw_text: &str) -> Result<NormalizedText, AnalysisError> {
        let canonical = self.processor.language_code();

        let detected = self
            .translator
            .detect_language(raw_text)
            .await
            .map_err(AnalysisError::LanguageDetection)?;

        let detected = detected.trim().to_lowercase();
        if detected.is_empty() {
            return Err(AnalysisError::LanguageDetection(
                lexiscope_translator::TranslateError::NotDetermined,
            ));
        }
        tracing::debug!("Detected language '{}'", detected);

        let working_text = if same_language(&detected, canonical) {
            raw_text.to_string()
        } else {
            tracing::debug!("Translating input from '{}' to '{}'", detected, canonical);
            self.translator
                .translate(raw_text, detected.clone(), canonical.to_string())
                .await
                .map_err(|source| AnalysisError::NormalizationTranslation {
                    from: detected.clone(),
                    to: canonical.to_string(),
                    source,
                })?
                .text
        };

        let words = self.processor.tokenize(&working_text);

        Ok(NormalizedText::new(
            detected,
            canonical,
            raw_text,
            working_text,
            words,
        ))
    }
}
