//! ideadrop: terminal wizard that collects software ideas and posts them to
//! a configured webhook.
//!
//! Thin binary entry point that delegates to the CLI handlers.

use anyhow::Result;
use clap::Parser;

use crate::cli::args::{Cli, Commands};

mod cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env (non-fatal if missing)
    ideadrop_config::load_dotenv().ok();
    initialize_tracing();

    let args = Cli::parse();
    match args.command {
        Some(Commands::Share) => cli::share::handle_share_command(),
        None => cli::wizard_flow::handle_wizard_command().await,
    }
}

/// Honor `RUST_LOG` when set; stay silent otherwise.
fn initialize_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    }
}
