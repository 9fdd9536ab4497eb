use serde::{Deserialize, Serialize};

use self::analysis::AnalysisConfig;
use self::app::AppConfig;
use self::lexicon::LexiconConfig;
use self::translator::TranslatorConfig;

pub mod analysis;
pub mod app;
pub mod lexicon;
pub mod translator;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub translator: TranslatorConfig,
    pub lexicon: LexiconConfig,
    pub app: AppConfig,
}

impl Config {
    /// Build from environment variables, falling back to defaults
    pub fn new() -> Self {
        Config {
            analysis: AnalysisConfig::new(),
            translator: TranslatorConfig::new(),
            lexicon: LexiconConfig::new(),
            app: AppConfig::new(),
        }
    }
}
