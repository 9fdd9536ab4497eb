use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    false
}

fn default_api_url() -> String {
    "https://api-free.deepl.com/v2/translate".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl TranslatorConfig {
    pub fn new() -> Self {
        let api_key = env::var("DEEPL_API_KEY").unwrap_or_default();
        let api_url = env::var("DEEPL_API_URL").unwrap_or_else(|_| default_api_url());

        Self {
            enabled: !api_key.is_empty(),
            api_key,
            api_url,
        }
    }

    /// Remote provider is usable only with a key
    pub fn is_remote(&self) -> bool {
        self.enabled && !self.api_key.is_empty()
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            api_key: String::new(),
            api_url: default_api_url(),
        }
    }
}
