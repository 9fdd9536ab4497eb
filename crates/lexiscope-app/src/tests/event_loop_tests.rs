use std::sync::Arc;
use std::time::Duration;

use indexmap::IndexSet;
use lexiscope_config::Config;
use lexiscope_types::{AnalysisKind, AnalysisRequest};
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use crate::events::{AppEvent, event_loop, render_analysis};
use crate::io::line_reader;
use crate::state::AppState;

fn state() -> Arc<AppState> {
    Arc::new(AppState::new(Config::default()))
}

fn lines(output: &[u8]) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(output)
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line is JSON"))
        .collect()
}

#[tokio::test]
async fn answers_requests_in_order_until_shutdown() {
    let (tx, rx) = kanal::bounded_async::<AppEvent>(8);

    tx.send(AppEvent::Analyze(AnalysisRequest::new(
        "the fox saw the dog",
        [AnalysisKind::CountWords],
    )))
    .await
    .unwrap();
    tx.send(AppEvent::Analyze(AnalysisRequest::new(
        "a good day",
        [AnalysisKind::EmotionalColor],
    )))
    .await
    .unwrap();
    tx.send(AppEvent::Shutdown).await.unwrap();

    let mut output = Vec::new();
    timeout(
        Duration::from_secs(5),
        event_loop(state(), rx, CancellationToken::new(), &mut output),
    )
    .await
    .expect("event loop stops on shutdown")
    .unwrap();

    let answers = lines(&output);
    assert_eq!(answers.len(), 2);
    assert_eq!(answers[0]["count-words"][0]["word"], "the");
    assert_eq!(answers[0]["count-words"][0]["count"], 2);
    assert!(answers[1]["emotional-color"]["polarity"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn cancellation_stops_the_loop() {
    let (_tx, rx) = kanal::bounded_async::<AppEvent>(1);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let mut output = Vec::new();
    timeout(Duration::from_secs(5), event_loop(state(), rx, cancel, &mut output))
        .await
        .expect("event loop stops on cancel")
        .unwrap();

    assert!(output.is_empty());
}

#[tokio::test]
async fn undetectable_text_renders_an_error_object() {
    let state = state();
    let request = AnalysisRequest::new("Привет, мир", [AnalysisKind::CountWords]);

    let (rendered, ok) = render_analysis(&state.analyzer, &request, false).await.unwrap();

    assert!(!ok);
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert!(value["error"].as_str().unwrap().to_lowercase().contains("language"));
}

#[tokio::test]
async fn reader_queues_lines_then_shutdown() {
    let (tx, rx) = kanal::bounded_async::<AppEvent>(8);
    let defaults: IndexSet<AnalysisKind> = [AnalysisKind::Definitions].into_iter().collect();
    let input: &[u8] = b"hello world\n\nsynonyms: good\n";

    line_reader(input, defaults, CancellationToken::new(), tx)
        .await
        .unwrap();

    match rx.recv().await.unwrap() {
        AppEvent::Analyze(request) => {
            assert_eq!(request.text, "hello world");
            assert!(request.wants(AnalysisKind::Definitions));
        }
        other => panic!("unexpected event: {other:?}"),
    }
    match rx.recv().await.unwrap() {
        AppEvent::Analyze(request) => {
            assert_eq!(request.text, "good");
            assert!(request.wants(AnalysisKind::Synonyms));
            assert_eq!(request.kinds.len(), 1);
        }
        other => panic!("unexpected event: {other:?}"),
    }
    assert!(matches!(rx.recv().await.unwrap(), AppEvent::Shutdown));
}

#[test]
fn default_kinds_skip_unknown_names() {
    let mut config = Config::default();
    config.app.default_kinds = vec!["synonyms".into(), "bogus".into(), "emocolor".into()];

    let state = AppState::new(config);

    assert_eq!(
        state.default_kinds().into_iter().collect::<Vec<_>>(),
        vec![AnalysisKind::Synonyms, AnalysisKind::EmotionalColor]
    );
}

#[tokio::test]
async fn reader_blocked_on_full_channel_stops_on_cancel() {
    let (tx, _rx) = kanal::bounded_async::<AppEvent>(1);
    let cancel = CancellationToken::new();
    let input: &[u8] = b"one\ntwo\nthree\n";

    let reader = tokio::spawn(line_reader(input, IndexSet::new(), cancel.clone(), tx));

    tokio::time::sleep(Duration::from_millis(50)).await;
    cancel.cancel();

    timeout(Duration::from_secs(2), reader)
        .await
        .expect("reader stops on cancel")
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn spawned_event_loop_answers_requests() {
    let (tx, rx) = kanal::bounded_async::<AppEvent>(4);
    let (writer, mut reader) = tokio::io::duplex(4096);

    let mut tasks = tokio::task::JoinSet::new();
    tasks.spawn(event_loop(state(), rx, CancellationToken::new(), writer));

    tx.send(AppEvent::Analyze(AnalysisRequest::new(
        "the quick fox",
        [AnalysisKind::CountWords],
    )))
    .await
    .unwrap();
    tx.send(AppEvent::Shutdown).await.unwrap();

    timeout(Duration::from_secs(5), tasks.join_next())
        .await
        .expect("event loop stops on shutdown")
        .unwrap()
        .unwrap()
        .unwrap();

    let mut output = Vec::new();
    tokio::io::AsyncReadExt::read_to_end(&mut reader, &mut output)
        .await
        .unwrap();
    let answers = lines(&output);
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0]["count-words"][0]["word"], "the");
}

#[tokio::test]
async fn legacy_canonical_language_key_is_ignored() {
    let config: Config =
        serde_json::from_str(r#"{ "analysis": { "canonical_language": "de" } }"#).unwrap();
    let state = AppState::new(config);
    let request = AnalysisRequest::new("the quick fox", [AnalysisKind::CountWords]);

    let (rendered, ok) = render_analysis(&state.analyzer, &request, false).await.unwrap();

    assert!(ok, "{rendered}");
}

#[tokio::test]
async fn sentiment_lexicon_path_replaces_embedded_one() {
    let path = std::env::temp_dir().join(format!("lexiscope-sentiment-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{ "words": { "fox": { "polarity": -0.8, "subjectivity": 0.4 } } }"#,
    )
    .unwrap();

    let mut config = Config::default();
    config.lexicon.sentiment_path = Some(path.display().to_string());
    let state = AppState::new(config);
    let request = AnalysisRequest::new("a good fox", [AnalysisKind::EmotionalColor]);

    let (rendered, ok) = render_analysis(&state.analyzer, &request, false).await.unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(ok);
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value["emotional-color"]["polarity"], -0.8);
    assert_eq!(value["emotional-color"]["subjectivity"], 0.4);
}
