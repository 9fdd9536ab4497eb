pub mod frequency;
pub mod lexicon;
pub mod loader;
pub mod morphy;
pub mod processor;
pub mod sentiment;
pub mod speller;
pub mod translator;

pub use frequency::WordFrequency;
pub use lexicon::EnglishLexicon;
pub use loader::{LexiconData, LexiconDataLoader};
pub use morphy::EnglishMorphy;
pub use processor::EnglishProcessor;
pub use sentiment::EnglishSentiment;
pub use speller::EnglishSpeller;
pub use translator::DeepLTranslator;
