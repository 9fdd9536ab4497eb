use std::env;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct LexiconConfig {
    /// Extra lexicon files merged over the embedded one, in order
    #[serde(default)]
    pub additional_paths: Vec<String>,
    /// Replaces the embedded spelling frequency list
    #[serde(default)]
    pub frequency_path: Option<String>,
    /// Replaces the embedded sentiment lexicon
    #[serde(default)]
    pub sentiment_path: Option<String>,
}

impl LexiconConfig {
    pub fn new() -> Self {
        let additional_paths = env::var("LEXISCOPE_LEXICON_PATHS")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let frequency_path = env::var("LEXISCOPE_FREQUENCY_PATH")
            .ok()
            .filter(|p| !p.is_empty());

        let sentiment_path = env::var("LEXISCOPE_SENTIMENT_PATH")
            .ok()
            .filter(|p| !p.is_empty());

        Self {
            additional_paths,
            frequency_path,
            sentiment_path,
        }
    }
}
