use indexmap::IndexSet;
use kanal::AsyncSender;
use lexiscope_types::{AnalysisKind, AnalysisRequest};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt};
use tokio_util::sync::CancellationToken;

use crate::events::AppEvent;

/// Parse one input line into a request.
///
/// `synonyms, antonyms: some text` selects kinds explicitly. A line whose
/// prefix is not a kind list is analyzed whole with `defaults`.
pub fn parse_line(line: &str, defaults: &IndexSet<AnalysisKind>) -> Option<AnalysisRequest> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some((prefix, text)) = line.split_once(':') {
        let kinds: Result<IndexSet<AnalysisKind>, _> =
            prefix.split(',').map(str::parse::<AnalysisKind>).collect();

        match kinds {
            Ok(kinds) if !text.trim().is_empty() => {
                return Some(AnalysisRequest::new(text.trim(), kinds));
            }
            Ok(_) => return None,
            Err(e) => tracing::debug!("Line prefix is not a kind list ({}), using defaults", e),
        }
    }

    Some(AnalysisRequest::new(line, defaults.iter().copied()))
}

/// Read requests line by line until EOF or cancellation.
///
/// EOF queues `Shutdown` behind the pending requests so they are still
/// answered.
pub async fn line_reader<R>(
    input: R,
    defaults: IndexSet<AnalysisKind>,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let interactive = atty::is(atty::Stream::Stdin);
    let mut lines = input.lines();

    loop {
        if interactive {
            let mut stderr = tokio::io::stderr();
            stderr.write_all(b"> ").await?;
            stderr.flush().await?;
        }

        let line = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Input reader stopping");
                return Ok(());
            }
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            tracing::info!("End of input");
            send_or_cancel(&event_tx, AppEvent::Shutdown, &cancel).await?;
            return Ok(());
        };

        if let Some(request) = parse_line(&line, &defaults) {
            tracing::debug!("Queued request with {} kinds", request.kinds.len());
            if !send_or_cancel(&event_tx, AppEvent::Analyze(request), &cancel).await? {
                return Ok(());
            }
        }
    }
}

/// Wait for channel space unless cancelled first; false means cancelled
async fn send_or_cancel(
    event_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
    cancel: &CancellationToken,
) -> anyhow::Result<bool> {
    tokio::select! {
        _ = cancel.cancelled() => {
            tracing::info!("Input reader stopping");
            Ok(false)
        }
        sent = event_tx.send(event) => {
            sent?;
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> IndexSet<AnalysisKind> {
        [AnalysisKind::CountWords].into_iter().collect()
    }

    #[test]
    fn plain_line_uses_defaults() {
        let request = parse_line("  the quick fox ", &defaults()).unwrap();
        assert_eq!(request.text, "the quick fox");
        assert_eq!(request.kinds, defaults());
    }

    #[test]
    fn kind_prefix_selects_kinds() {
        let request = parse_line("synonyms, emocolor: good day", &defaults()).unwrap();
        assert_eq!(request.text, "good day");
        assert_eq!(
            request.kinds.into_iter().collect::<Vec<_>>(),
            vec![AnalysisKind::Synonyms, AnalysisKind::EmotionalColor]
        );
    }

    #[test]
    fn colon_inside_text_is_kept() {
        let request = parse_line("Note: buy tea", &defaults()).unwrap();
        assert_eq!(request.text, "Note: buy tea");
        assert_eq!(request.kinds, defaults());
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert!(parse_line("   ", &defaults()).is_none());
        assert!(parse_line("definitions:  ", &defaults()).is_none());
    }
}
