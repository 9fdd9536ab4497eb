use std::collections::HashMap;
use std::path::Path;

use lexiscope_core::lexicon::LoadError;

/// English word occurrence counts, the vocabulary of the speller
#[derive(Debug, Clone, Default)]
pub struct WordFrequency {
    counts: HashMap<String, u64>,
}

impl WordFrequency {
    /// Create with the embedded frequency list
    pub fn with_defaults() -> Self {
        Self::from_tsv(include_str!("../data/frequency.tsv"))
    }

    /// Load frequency data from TSV file (word\tcount format)
    pub fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let frequency = Self::from_tsv(&content);
        tracing::info!(
            "Loaded {} word frequencies from {}",
            frequency.len(),
            path.display()
        );
        Ok(frequency)
    }

    /// Lines that do not parse are skipped
    pub fn from_tsv(content: &str) -> Self {
        let mut counts = HashMap::new();

        for line in content.lines() {
            let parts: Vec<&str> = line.split('\t').collect();
            if parts.len() >= 2 {
                if let Ok(count) = parts[1].trim().parse::<u64>() {
                    counts.insert(parts[0].trim().to_lowercase(), count);
                }
            }
        }

        Self { counts }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(w, c)| (w.as_str(), *c))
    }
}
