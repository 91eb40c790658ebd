//! Reddit post viewer - prints the newest posts of a subreddit.

use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use reddit_post_viewer::config::Config;
use reddit_post_viewer::viewer;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug).
    // Logs go to stderr; stdout carries only the viewer's output.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();
    info!("Reddit post viewer starting");

    let config = Config::from_env();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    // Every outcome has already been reported; the process always exits 0.
    let outcome = viewer::execute(config, &mut stdin.lock(), &mut stdout).await;

    info!(success = outcome.is_success(), "Reddit post viewer finished");
    Ok(())
}
