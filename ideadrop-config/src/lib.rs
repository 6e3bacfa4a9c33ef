//! Environment-backed configuration.
//!
//! Resolution is env-first: `.env` files are folded into the process
//! environment up front (non-fatal when missing), and the webhook endpoint is
//! then read from a plain variable. The resulting struct is handed to the
//! delivery sink as an injected dependency rather than consulted as ambient
//! global state.

use std::env;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

/// Environment variable naming the webhook endpoint URL.
pub const WEBHOOK_URL_ENV: &str = "IDEADROP_WEBHOOK_URL";

/// Environment variable overriding the page link offered by the share action.
pub const SHARE_URL_ENV: &str = "IDEADROP_SHARE_URL";

/// Share link used when no override is configured.
pub const DEFAULT_SHARE_URL: &str = "https://portfolio.nexusgit.info";

/// Load environment variables from a `.env` file.
///
/// Missing files are fine; a present-but-broken file logs a warning and is
/// otherwise ignored.
pub fn load_dotenv() -> Result<()> {
    match dotenvy::dotenv() {
        Ok(file) => {
            tracing::debug!("loaded environment variables from {}", file.display());
            Ok(())
        }
        Err(dotenvy::Error::Io(cause)) if cause.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(cause) => {
            tracing::warn!("failed to load .env file: {cause}");
            Ok(())
        }
    }
}

/// Webhook endpoint settings handed to the delivery sink.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WebhookConfig {
    /// Endpoint receiving the embed payload.
    pub url: String,
}

impl WebhookConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Resolve the endpoint from the process environment.
    pub fn from_env() -> Result<Self> {
        match nonempty_var(WEBHOOK_URL_ENV) {
            Some(url) => Ok(Self { url }),
            None => Err(anyhow!(
                "No webhook endpoint configured. Set {WEBHOOK_URL_ENV} (or add it to a .env file)."
            )),
        }
    }
}

/// The page link offered by the share action: the configured override, or the
/// project default.
pub fn share_url() -> String {
    nonempty_var(SHARE_URL_ENV).unwrap_or_else(|| DEFAULT_SHARE_URL.to_string())
}

fn nonempty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
