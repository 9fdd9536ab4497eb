use crate::error::AnalysisError;
use crate::normalizer::LanguageNormalizer;
use crate::tests::fakes::{FakeProcessor, FakeTranslator};

#[tokio::test]
async fn canonical_input_is_not_translated() {
    let translator = FakeTranslator::detecting("en");
    let raw = "  The quick, brown fox!  ";

    let text = LanguageNormalizer::new(&translator, &FakeProcessor)
        .normalize(raw)
        .await
        .unwrap();

    assert_eq!(text.working_text(), raw);
    assert_eq!(text.raw_text(), raw);
    assert_eq!(text.words(), ["the", "quick", "brown", "fox"]);
    assert!(!text.was_translated());
    assert_eq!(translator.translate_calls(), 0);
}

#[tokio::test]
async fn region_tagged_canonical_is_not_translated() {
    let translator = FakeTranslator::detecting("EN-GB");

    let text = LanguageNormalizer::new(&translator, &FakeProcessor)
        .normalize("colour me surprised")
        .await
        .unwrap();

    assert_eq!(text.working_text(), "colour me surprised");
    assert_eq!(text.original_language(), "en-gb");
    assert_eq!(translator.translate_calls(), 0);
}

#[tokio::test]
async fn foreign_input_is_translated_once() {
    let translator = FakeTranslator::detecting("es").with_translation("en", "The black cat");

    let text = LanguageNormalizer::new(&translator, &FakeProcessor)
        .normalize("El gato negro")
        .await
        .unwrap();

    assert_eq!(text.original_language(), "es");
    assert_eq!(text.canonical_language(), "en");
    assert_eq!(text.raw_text(), "El gato negro");
    assert_eq!(text.working_text(), "The black cat");
    assert_eq!(text.words(), ["the", "black", "cat"]);
    assert!(text.was_translated());
    assert_eq!(translator.translate_calls(), 1);
}

#[tokio::test]
async fn undetectable_language_is_fatal() {
    let translator = FakeTranslator::default();

    let err = LanguageNormalizer::new(&translator, &FakeProcessor)
        .normalize("hello мир")
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::LanguageDetection(_)));
    assert!(err.is_fatal());
}

#[tokio::test]
async fn empty_language_tag_is_a_detection_failure() {
    let translator = FakeTranslator::detecting("  ");

    let err = LanguageNormalizer::new(&translator, &FakeProcessor)
        .normalize("hello")
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::LanguageDetection(_)));
}

#[tokio::test]
async fn failed_normalizing_translation_is_fatal() {
    // No translation registered for "en"
    let translator = FakeTranslator::detecting("de");

    let err = LanguageNormalizer::new(&translator, &FakeProcessor)
        .normalize("Guten Morgen")
        .await
        .unwrap_err();

    match &err {
        AnalysisError::NormalizationTranslation { from, to, .. } => {
            assert_eq!(from, "de");
            assert_eq!(to, "en");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.is_fatal());
}

#[tokio::test]
async fn undetermined_normalizing_translation_is_not_softened() {
    let translator = FakeTranslator::detecting("de").undetermined_for("en");

    let err = LanguageNormalizer::new(&translator, &FakeProcessor)
        .normalize("Guten Morgen")
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::NormalizationTranslation { .. }));
}

#[tokio::test]
async fn distinct_words_keep_first_occurrence_order() {
    let translator = FakeTranslator::detecting("en");

    let text = LanguageNormalizer::new(&translator, &FakeProcessor)
        .normalize("b a b c a d")
        .await
        .unwrap();

    assert_eq!(text.distinct_words(0), vec!["b", "a", "c", "d"]);
    assert_eq!(text.distinct_words(2), vec!["b", "a"]);
}
