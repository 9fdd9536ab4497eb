use std::env;

use serde::{Deserialize, Serialize};

fn default_display_language() -> String {
    "ru".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Target of the translate analysis, empty means back to the source language
    #[serde(default = "default_display_language")]
    pub display_language: String,
    /// Distinct words considered per lexical analysis, 0 = unlimited
    #[serde(default)]
    pub max_words: usize,
}

impl AnalysisConfig {
    pub fn new() -> Self {
        let display_language =
            env::var("LEXISCOPE_DISPLAY_LANG").unwrap_or_else(|_| default_display_language());

        let max_words = env::var("LEXISCOPE_MAX_WORDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);

        Self {
            display_language,
            max_words,
        }
    }

    /// Round-trip target for a text detected as `source`
    pub fn display_target<'a>(&'a self, source: &'a str) -> &'a str {
        if self.display_language.is_empty() {
            source
        } else {
            &self.display_language
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            display_language: default_display_language(),
            max_words: 0,
        }
    }
}
