use std::path::Path;
use std::sync::Arc;

use indexmap::IndexSet;
use lexiscope_config::Config;
use lexiscope_config::lexicon::LexiconConfig;
use lexiscope_core::TextAnalyzer;
use lexiscope_core::language::LanguageProcessor;
use lexiscope_core::lexicon::LexicalDatabase;
use lexiscope_core::sentiment::SentimentModel;
use lexiscope_lang_english::{DeepLTranslator, EnglishLexicon, EnglishProcessor, EnglishSentiment};
use lexiscope_translator::{PassthroughTranslator, Translator};
use lexiscope_types::AnalysisKind;

pub struct AppState {
    pub config: Config,
    pub analyzer: TextAnalyzer,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let analyzer = build_analyzer(&config);
        Self { config, analyzer }
    }

    /// Kinds for requests that name none; unknown names are skipped
    pub fn default_kinds(&self) -> IndexSet<AnalysisKind> {
        self.config
            .app
            .default_kinds
            .iter()
            .filter_map(|name| {
                name.parse()
                    .inspect_err(|e| tracing::warn!("Ignoring default kind: {}", e))
                    .ok()
            })
            .collect()
    }
}

fn build_analyzer(config: &Config) -> TextAnalyzer {
    let processor = EnglishProcessor::new();
    let canonical = processor.language_code().to_string();

    let translator: Arc<dyn Translator> = if config.translator.is_remote() {
        tracing::info!("Using DeepL translator at {}", config.translator.api_url);
        Arc::new(DeepLTranslator::new(
            config.translator.api_key.clone(),
            config.translator.api_url.clone(),
        ))
    } else {
        tracing::warn!("Translator disabled, only '{}' input is analyzed", canonical);
        Arc::new(PassthroughTranslator::new(canonical))
    };

    let lexicon = EnglishLexicon::with_additional(
        &config.lexicon.additional_paths,
        config.lexicon.frequency_path.as_deref(),
    );
    let metadata = lexicon.metadata();
    tracing::info!(
        "Lexicon '{}' ({}) ready with {} entries",
        metadata.name,
        metadata.language,
        metadata.entry_count
    );

    let lexicon: Arc<dyn LexicalDatabase> = Arc::new(lexicon);
    let sentiment: Arc<dyn SentimentModel> = Arc::new(load_sentiment(&config.lexicon));

    TextAnalyzer::new(
        translator,
        Arc::new(processor),
        lexicon,
        sentiment,
        config.analysis.clone(),
    )
}

fn load_sentiment(config: &LexiconConfig) -> EnglishSentiment {
    match &config.sentiment_path {
        Some(path) => EnglishSentiment::load_from_file(Path::new(path)).unwrap_or_else(|e| {
            tracing::warn!("Failed to load sentiment lexicon from {}: {}", path, e);
            EnglishSentiment::with_defaults()
        }),
        None => EnglishSentiment::with_defaults(),
    }
}
