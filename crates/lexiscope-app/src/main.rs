use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use lexiscope_types::{AnalysisKind, AnalysisRequest};
use tokio::signal;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub mod controller;
pub mod events;
pub mod io;
pub mod profile;
pub mod state;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::events::render_analysis;
use self::state::AppState;

/// Analyze text: translation, sentiment, word counts, related words, definitions and spelling
#[derive(Parser, Debug)]
#[command(name = "lexiscope")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Text to analyze once; without it requests are read from stdin line by line
    text: Option<String>,

    /// Analysis kind to run, repeatable (defaults come from the config)
    #[arg(short = 'k', long = "kind")]
    kinds: Vec<AnalysisKind>,

    /// JSON profile to load instead of environment variables
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    // stdout carries results only
    if json {
        let fmt_layer = fmt::layer().json().with_writer(std::io::stderr);
        tracing_subscriber::registry().with(env_filter).with(fmt_layer).init();
    } else {
        let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
        tracing_subscriber::registry().with(env_filter).with(fmt_layer).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    init_logging();

    let args = Args::parse();
    let config = profile::load_config(args.config.as_deref())?;
    let state = Arc::new(AppState::new(config));

    match args.text {
        Some(text) => run_once(&state, text, args.kinds).await,
        None => {
            run_interactive(state).await?;
            // A pending stdin read cannot be cancelled and would block runtime shutdown
            std::process::exit(0)
        }
    }
}

async fn run_once(
    state: &AppState,
    text: String,
    kinds: Vec<AnalysisKind>,
) -> anyhow::Result<ExitCode> {
    let request = if kinds.is_empty() {
        AnalysisRequest::new(text, state.default_kinds())
    } else {
        AnalysisRequest::new(text, kinds)
    };

    let (rendered, ok) = render_analysis(&state.analyzer, &request, true).await?;
    println!("{rendered}");

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

async fn run_interactive(state: Arc<AppState>) -> anyhow::Result<()> {
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    tracing::info!("Reading requests from stdin");

    loop {
        tokio::select! {
            _ = signal::ctrl_c() => {
                tracing::info!("Shutdown requested");
                controller.shutdown();
            }
            joined = tasks.join_next() => {
                match joined {
                    Some(Ok(Ok(()))) => {}
                    Some(Ok(Err(e))) => {
                        tracing::error!("Task failed: {e}");
                        controller.shutdown();
                    }
                    Some(Err(e)) => {
                        tracing::error!("Task panicked: {e}");
                        controller.shutdown();
                    }
                    None => break,
                }
            }
        }
    }

    Ok(())
}
