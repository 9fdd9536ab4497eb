use std::collections::HashMap;
use std::path::Path;

use lexiscope_core::lexicon::{Lemma, LexiconLoader, LoadError, WordSense};
use serde::Deserialize;

/// Parsed sense graph, keyed by lowercase headword
#[derive(Debug, Clone, Default)]
pub struct LexiconData {
    pub name: String,
    pub senses: HashMap<String, Vec<WordSense>>,
}

impl LexiconData {
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let data: LexiconJson =
            serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;

        let mut senses = HashMap::new();
        for entry in data.entries {
            let headword = entry.lemma.trim().to_lowercase();
            let entry_senses = entry
                .senses
                .into_iter()
                .enumerate()
                .map(|(i, sense)| WordSense {
                    id: format!("{}.{}.{:02}", headword, sense.pos.as_deref().unwrap_or("x"), i + 1),
                    part_of_speech: sense.pos,
                    definition: sense.definition,
                    lemmas: sense
                        .lemmas
                        .into_iter()
                        .map(|lemma| Lemma {
                            name: lemma.name,
                            antonyms: lemma.antonyms,
                        })
                        .collect(),
                })
                .collect();

            senses.insert(headword, entry_senses);
        }

        Ok(Self {
            name: data.name,
            senses,
        })
    }

    /// Entries of `additional` replace entries with the same headword
    pub fn merge(mut self, additional: LexiconData) -> Self {
        self.senses.extend(additional.senses);
        self
    }

    pub fn entry_count(&self) -> usize {
        self.senses.len()
    }
}

pub struct LexiconDataLoader;

impl LexiconLoader for LexiconDataLoader {
    type Output = LexiconData;

    fn load_from_file(path: &Path) -> Result<LexiconData, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        tracing::info!("Loading lexicon from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let data = LexiconData::from_json(&json)?;
        tracing::info!("Loaded {} lexicon entries from file", data.entry_count());
        Ok(data)
    }

    fn load_embedded() -> Result<LexiconData, LoadError> {
        let json = include_str!("../data/lexicon.json");
        tracing::info!("Loading embedded English lexicon...");
        let data = LexiconData::from_json(json)?;
        tracing::info!("Loaded {} lexicon entries", data.entry_count());
        Ok(data)
    }
}

// JSON layout of lexicon files
#[derive(Debug, Deserialize)]
struct LexiconJson {
    #[serde(default)]
    name: String,
    entries: Vec<EntryJson>,
}

#[derive(Debug, Deserialize)]
struct EntryJson {
    lemma: String,
    #[serde(default)]
    senses: Vec<SenseJson>,
}

#[derive(Debug, Deserialize)]
struct SenseJson {
    #[serde(default)]
    pos: Option<String>,
    #[serde(default)]
    definition: String,
    #[serde(default)]
    lemmas: Vec<LemmaJson>,
}

#[derive(Debug, Deserialize)]
struct LemmaJson {
    name: String,
    #[serde(default)]
    antonyms: Vec<String>,
}
