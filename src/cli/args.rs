//! Command-line surface.

use clap::{Parser, Subcommand};

/// Collect a software idea step by step and post it to the configured
/// webhook. Without a subcommand the interactive wizard starts.
#[derive(Debug, Parser)]
#[command(name = "ideadrop", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Copy the idea form's page link to the clipboard.
    Share,
}
