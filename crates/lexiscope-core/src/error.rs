use lexiscope_translator::TranslateError;

/// Failure reported by a lexical database
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Lexical database unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// No language tag for the input, nothing can be analyzed
    #[error("Language detection failed: {0}")]
    LanguageDetection(#[source] TranslateError),

    /// Translating into the working language failed
    #[error("Could not translate text from '{from}' into '{to}': {source}")]
    NormalizationTranslation {
        from: String,
        to: String,
        #[source]
        source: TranslateError,
    },

    #[error("Translation failed: {0}")]
    Translation(#[source] TranslateError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("Analysis '{kind}' panicked: {message}")]
    Panicked { kind: String, message: String },
}

impl AnalysisError {
    /// Whether the whole request is lost rather than a single kind
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            AnalysisError::LanguageDetection(_) | AnalysisError::NormalizationTranslation { .. }
        )
    }
}
