pub mod analyzer;
pub mod cache;
pub mod definitions;
pub mod error;
pub mod frequency;
pub mod language;
pub mod lexicon;
pub mod normalizer;
pub mod preprocess;
pub mod related;
pub mod roundtrip;
pub mod sentiment;
pub mod spelling;

pub use analyzer::TextAnalyzer;
pub use error::{AnalysisError, LookupError};
pub use normalizer::{LanguageNormalizer, NormalizedText};

#[cfg(test)]
mod tests;
