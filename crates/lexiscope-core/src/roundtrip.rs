use lexiscope_translator::Translator;

use crate::error::AnalysisError;
use crate::language::same_language;
use crate::normalizer::NormalizedText;

/// Returned instead of an error when the provider cannot tell the language
pub const UNDETERMINED_MESSAGE: &str = "Unfortunately, the language could not be determined. \
Perhaps the text contains words from several languages. If so, check them separately.";

/// Translates the working text into the display language
pub struct TranslationRoundTripper<'a> {
    translator: &'a dyn Translator,
    target: &'a str,
}

impl<'a> TranslationRoundTripper<'a> {
    pub fn new(translator: &'a dyn Translator, target: &'a str) -> Self {
        Self { translator, target }
    }

    pub async fn round_trip(&self, text: &NormalizedText) -> Result<String, AnalysisError> {
        let from = text.canonical_language();

        if same_language(from, self.target) {
            return Ok(text.working_text().to_string());
        }

        match self
            .translator
            .translate(text.working_text(), from.to_string(), self.target.to_string())
            .await
        {
            Ok(translation) => Ok(translation.text),
            Err(e) if e.is_not_determined() => {
                tracing::info!("Translation to '{}' not determined, using fallback", self.target);
                Ok(UNDETERMINED_MESSAGE.to_string())
            }
            Err(e) => Err(AnalysisError::Translation(e)),
        }
    }
}
