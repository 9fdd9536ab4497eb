use indexmap::IndexSet;

use crate::cache::LookupCache;
use crate::definitions::define_words;
use crate::lexicon::Lemma;
use crate::normalizer::NormalizedText;
use crate::related::{antonyms, synonyms};
use crate::spelling::correct_spelling;
use crate::tests::fakes::FakeLexicon;

fn text(working: &str) -> NormalizedText {
    let words = working
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect();
    NormalizedText::new("en", "en", working, working, words)
}

fn set(items: &[&str]) -> IndexSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn thesaurus() -> FakeLexicon {
    FakeLexicon::default()
        .with_sense(
            "fast",
            "acting or moving quickly",
            vec![
                Lemma::new("fast").with_antonyms(&["slow"]),
                Lemma::new("quick"),
            ],
        )
        .with_sense(
            "fast",
            "abstaining from food",
            vec![Lemma::new("fast"), Lemma::new("go_without")],
        )
        .with_sense("lone", "lacking companions", vec![Lemma::new("lone")])
        .with_sense(
            "good",
            "having desirable qualities",
            vec![Lemma::new("good").with_antonyms(&["bad", "evil"])],
        )
        .with_sense(
            "good",
            "in good health",
            vec![
                Lemma::new("good").with_antonyms(&["ill"]),
                Lemma::new("well").with_antonyms(&["ill"]),
            ],
        )
        .with_sense("fox", "", vec![Lemma::new("fox"), Lemma::new("dodger")])
}

#[tokio::test]
async fn synonyms_union_all_lemmas_of_all_senses() {
    let lexicon = thesaurus();
    let cache = LookupCache::new(&lexicon);

    let found = synonyms(&text("fast lone"), &cache, 0).await.unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found["Fast"], set(&["Fast", "Quick", "Go without"]));
}

#[tokio::test]
async fn synonyms_need_at_least_two_lemmas() {
    let lexicon = thesaurus();
    let cache = LookupCache::new(&lexicon);

    let found = synonyms(&text("lone unknown"), &cache, 0).await.unwrap();

    assert!(found.is_empty());
}

#[tokio::test]
async fn antonyms_take_first_antonym_of_each_lemma() {
    let lexicon = thesaurus();
    let cache = LookupCache::new(&lexicon);

    let found = antonyms(&text("good fast lone"), &cache, 0).await.unwrap();

    // "evil" is the second antonym of its lemma and never sampled
    assert_eq!(found["Good"], set(&["Bad", "Ill"]));
    assert_eq!(found["Fast"], set(&["Slow"]));
    assert!(!found.contains_key("Lone"));

    let keys: Vec<_> = found.keys().cloned().collect();
    assert_eq!(keys, vec!["Good", "Fast"]);
}

#[tokio::test]
async fn related_words_are_keyed_capitalized() {
    let lexicon = thesaurus();
    let cache = LookupCache::new(&lexicon);

    let found = synonyms(&text("FOX"), &cache, 0).await.unwrap();

    assert_eq!(found["Fox"], set(&["Fox", "Dodger"]));
}

#[tokio::test]
async fn definitions_skip_blank_and_unknown() {
    let lexicon = thesaurus();
    let cache = LookupCache::new(&lexicon);

    let found = define_words(&text("fast fox nothing fast"), &cache, 0)
        .await
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(
        found["fast"],
        vec!["acting or moving quickly", "abstaining from food"]
    );
    assert_eq!(lexicon.sense_lookups_of("fast"), 1);
}

#[tokio::test]
async fn word_limit_bounds_lookups() {
    let lexicon = thesaurus();
    let cache = LookupCache::new(&lexicon);

    let found = define_words(&text("fast good fox"), &cache, 2).await.unwrap();

    assert_eq!(found.len(), 2);
    assert_eq!(lexicon.sense_lookups_of("fox"), 0);
}

#[tokio::test]
async fn spelling_keeps_top_suggestion_and_corrector_text() {
    let lexicon = FakeLexicon::default()
        .with_suggestions("teh", &[("the", 0.7), ("tea", 0.3)])
        .with_suggestions("fox", &[("fox", 1.0)])
        .with_corrected_text("tea fox teh");
    let cache = LookupCache::new(&lexicon);

    let report = correct_spelling(&text("teh fox teh zzz"), &cache, 0)
        .await
        .unwrap();

    // Full-text output is reported even where it disagrees with the per-word map
    assert_eq!(report.corrected, "tea fox teh");
    assert_eq!(report.words.len(), 2);
    assert_eq!(report.words["teh"].suggested, "the");
    assert_eq!(report.words["teh"].rank, 0);
    assert_eq!(report.words["teh"].confidence, 0.7);
    assert_eq!(report.words["fox"].suggested, "fox");
    assert!(!report.words.contains_key("zzz"));
    assert_eq!(lexicon.suggestion_lookups_of("teh"), 1);
}

#[tokio::test]
async fn failed_lookups_are_retried_then_cached() {
    let lexicon = thesaurus().failing_once_on("fox");
    let cache = LookupCache::new(&lexicon);

    assert!(cache.senses("fox").await.is_err());

    let senses = cache.senses("fox").await.unwrap();
    assert_eq!(senses.len(), 1);
    assert_eq!(lexicon.sense_lookups_of("fox"), 2);

    cache.senses("fox").await.unwrap();
    assert_eq!(lexicon.sense_lookups_of("fox"), 2);
}
