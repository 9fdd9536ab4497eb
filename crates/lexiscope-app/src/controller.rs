use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::BufReader;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::{AppEvent, event_loop};
use crate::io::line_reader;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub requests: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            requests: kanal::bounded_async(capacity.max(1)),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(state.config.app.channel_capacity),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Spawn the stdin reader and the event loop writing to stdout
    pub fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.requests.1.clone(),
            self.cancel_token.child_token(),
            tokio::io::stdout(),
        ));

        tasks.spawn(line_reader(
            BufReader::new(tokio::io::stdin()),
            self.state.default_kinds(),
            self.cancel_token.child_token(),
            self.channels.requests.0.clone(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
