/// Text processing interface for the canonical working language
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code: "en", "ja", ...)
    fn language_code(&self) -> &str;

    /// Normalize text (Unicode normalization, whitespace, etc.)
    fn normalize(&self, text: &str) -> String;

    /// Break text into normalized word tokens, in text order
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Compare language tags by primary subtag, so "EN-US" matches "en"
pub fn same_language(a: &str, b: &str) -> bool {
    fn primary(tag: &str) -> &str {
        tag.split(['-', '_']).next().unwrap_or(tag).trim()
    }

    primary(a).eq_ignore_ascii_case(primary(b))
}
