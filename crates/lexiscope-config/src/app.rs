use std::env;

use serde::{Deserialize, Serialize};

fn default_channel_capacity() -> usize {
    64
}

fn default_kinds() -> Vec<String> {
    vec![
        "count-words".to_string(),
        "emotional-color".to_string(),
        "definitions".to_string(),
    ]
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    /// Pending interactive requests before the reader waits
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
    /// Kinds used for input lines that do not name any
    #[serde(default = "default_kinds")]
    pub default_kinds: Vec<String>,
}

impl AppConfig {
    pub fn new() -> Self {
        let channel_capacity = env::var("LEXISCOPE_CHANNEL_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|c| *c > 0)
            .unwrap_or_else(default_channel_capacity);

        Self {
            channel_capacity,
            default_kinds: default_kinds(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            channel_capacity: default_channel_capacity(),
            default_kinds: default_kinds(),
        }
    }
}
