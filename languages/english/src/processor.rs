use lexiscope_core::language::LanguageProcessor;
use lexiscope_core::preprocess::{DefaultPreprocessor, Preprocessor};
use unicode_segmentation::UnicodeSegmentation;

/// English language processor
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishProcessor;

impl EnglishProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageProcessor for EnglishProcessor {
    fn language_code(&self) -> &str {
        "en"
    }

    fn normalize(&self, text: &str) -> String {
        DefaultPreprocessor.process(text)
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        self.normalize(text)
            .unicode_words()
            .map(str::to_lowercase)
            .collect()
    }
}
