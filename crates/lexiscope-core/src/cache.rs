use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::{Mutex, OnceCell};

use crate::error::LookupError;
use crate::lexicon::{LexicalDatabase, SpellingCandidate, WordSense};

type Table<T> = Mutex<HashMap<String, Arc<OnceCell<T>>>>;

/// Per-request memo of lexical lookups.
///
/// Every analysis of one request shares a cache, so a word is looked up at
/// most once per table even when several kinds ask for it concurrently.
/// Failed lookups are not stored.
pub struct LookupCache<'a> {
    lexicon: &'a dyn LexicalDatabase,
    senses: Table<Arc<[WordSense]>>,
    suggestions: Table<Arc<[SpellingCandidate]>>,
}

impl<'a> LookupCache<'a> {
    pub fn new(lexicon: &'a dyn LexicalDatabase) -> Self {
        Self {
            lexicon,
            senses: Mutex::new(HashMap::new()),
            suggestions: Mutex::new(HashMap::new()),
        }
    }

    pub fn lexicon(&self) -> &'a dyn LexicalDatabase {
        self.lexicon
    }

    pub async fn senses(&self, word: &str) -> Result<Arc<[WordSense]>, LookupError> {
        memoized(&self.senses, word, || async {
            tracing::debug!("Looking up senses of '{}'", word);
            self.lexicon.senses_of(word).await.map(Arc::from)
        })
        .await
    }

    pub async fn suggestions(&self, word: &str) -> Result<Arc<[SpellingCandidate]>, LookupError> {
        memoized(&self.suggestions, word, || async {
            tracing::debug!("Looking up spelling of '{}'", word);
            self.lexicon
                .spelling_suggestions_of(word)
                .await
                .map(Arc::from)
        })
        .await
    }
}

async fn memoized<T, F, Fut>(table: &Table<T>, word: &str, fetch: F) -> Result<T, LookupError>
where
    T: Clone,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, LookupError>>,
{
    // Hold the table lock only long enough to find the cell
    let cell = {
        let mut table = table.lock().await;
        table.entry(word.to_string()).or_default().clone()
    };

    cell.get_or_try_init(fetch).await.cloned()
}
