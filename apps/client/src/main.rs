mod config;
mod errors;
mod gateway;
mod models;
mod navigation;
mod result;
mod session;
mod setup;
mod ui;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::gateway::http::HttpGateway;
use crate::navigation::View;
use crate::ui::app::App;
use crate::ui::StdTerminal;

/// Terminal client for AI mock interviews: set up the role, answer the
/// generated questions, then read the scored feedback.
#[derive(Parser, Debug)]
#[command(name = "interview")]
#[command(version, about, long_about = None)]
struct Args {
    /// Backend base URL (overrides INTERVIEW_API_URL)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Per-request timeout in seconds, 0 to wait forever (overrides REQUEST_TIMEOUT_SECS)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Open an existing interview directly, skipping setup
    #[arg(long, value_name = "ID")]
    interview: Option<String>,

    /// Lines shown per page on the results screen
    #[arg(long, default_value_t = 40)]
    page_lines: usize,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::from_env(args.api_url.clone())?;
    if let Some(secs) = args.timeout {
        config = config.with_timeout_secs(secs);
    }

    // Logs go to stderr; stdout belongs to the interactive session.
    let level = if args.verbose { "debug" } else { config.rust_log.as_str() };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting interview client v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Backend: {} (timeout: {:?})",
        config.api_base_url, config.request_timeout
    );

    let gateway = HttpGateway::new(config.api_base_url.clone(), config.request_timeout)
        .context("Failed to build HTTP client")?;

    let start = match args.interview {
        Some(interview_id) => View::Interview {
            interview_id,
            handoff: None,
        },
        None => View::Setup,
    };

    let app = App::new(Arc::new(gateway), args.page_lines);
    let mut terminal = StdTerminal::new();
    app.run(&mut terminal, start)
        .await
        .context("Interview session aborted")?;

    info!("Goodbye");
    Ok(())
}
