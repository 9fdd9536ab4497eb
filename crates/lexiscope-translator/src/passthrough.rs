use async_trait::async_trait;

use crate::{LanguageCode, TranslateError, Translation, Translator};

/// Offline provider that only knows one language.
///
/// Text written entirely in Latin script is reported as `language`, anything
/// else cannot be determined. Translation only succeeds between identical
/// languages.
#[derive(Debug, Clone)]
pub struct PassthroughTranslator {
    language: LanguageCode,
}

impl PassthroughTranslator {
    pub fn new(language: impl Into<LanguageCode>) -> Self {
        Self {
            language: language.into(),
        }
    }
}

fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
        || matches!(c, '\u{00C0}'..='\u{024F}' | '\u{1E00}'..='\u{1EFF}')
}

#[async_trait]
impl Translator for PassthroughTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        if from != to {
            return Err(TranslateError::UnsupportedLanguagePair { from, to });
        }

        Ok(Translation {
            text: text.to_string(),
            from,
            to,
        })
    }

    async fn detect_language(&self, text: &str) -> Result<LanguageCode, TranslateError> {
        let mut letters = text.chars().filter(|c| c.is_alphabetic()).peekable();

        if letters.peek().is_none() {
            return Err(TranslateError::NotDetermined);
        }

        if letters.all(is_latin) {
            Ok(self.language.clone())
        } else {
            Err(TranslateError::NotDetermined)
        }
    }
}
