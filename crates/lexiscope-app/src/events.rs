use std::sync::Arc;

use kanal::AsyncReceiver;
use lexiscope_core::TextAnalyzer;
use lexiscope_types::{AnalysisFailure, AnalysisRequest};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

#[derive(Debug)]
pub enum AppEvent {
    Analyze(AnalysisRequest),
    Shutdown,
}

/// Run one request and render it as JSON.
///
/// A fatal failure renders as `{"error": ...}` and `ok` is false.
pub async fn render_analysis(
    analyzer: &TextAnalyzer,
    request: &AnalysisRequest,
    pretty: bool,
) -> anyhow::Result<(String, bool)> {
    let (value, ok) = match analyzer.analyze(request).await {
        Ok(result) => (serde_json::to_value(&result)?, true),
        Err(e) => {
            tracing::error!("Analysis failed: {}", e);
            (
                serde_json::to_value(AnalysisFailure {
                    error: e.to_string(),
                })?,
                false,
            )
        }
    };

    let rendered = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };

    Ok((rendered, ok))
}

/// App's main loop: answer requests in arrival order, one JSON line each
pub async fn event_loop<W>(
    state: Arc<AppState>,
    event_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
    mut output: W,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = event_rx.recv() => event?,
        };

        let request = match event {
            AppEvent::Analyze(request) => request,
            AppEvent::Shutdown => {
                tracing::info!("[EVENT_LOOP] Shutdown received");
                break;
            }
        };

        // Cancellation drops the in-flight analysis
        let rendered = tokio::select! {
            _ = cancel.cancelled() => break,
            rendered = render_analysis(&state.analyzer, &request, false) => rendered?,
        };

        output.write_all(rendered.0.as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
    }

    tracing::info!("[EVENT_LOOP] Stopped");
    Ok(())
}
