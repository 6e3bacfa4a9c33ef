//! Webhook delivery for idea submissions.
//!
//! One HTTP POST per submission to the configured endpoint. There is no retry
//! or backoff: a failed attempt surfaces to the wizard and resubmission is
//! user-triggered.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

use ideadrop_config::WebhookConfig;

use crate::payload::WebhookPayload;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Delivery failures. The wizard collapses all of them into one generic
/// retry message; causes are only distinguished in logs.
#[derive(Debug, Clone, Error)]
pub enum SinkError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("endpoint returned status {0}")]
    Status(u16),
}

/// Where finished submissions go. Implemented by the HTTP webhook sink below
/// and by in-memory fakes in tests.
#[async_trait]
pub trait IdeaSink: Send + Sync {
    async fn deliver(&self, payload: &WebhookPayload) -> Result<(), SinkError>;
}

/// HTTP sink posting embed payloads to a Discord-compatible webhook endpoint.
#[derive(Debug, Clone)]
pub struct WebhookSink {
    client: Client,
    config: WebhookConfig,
}

impl WebhookSink {
    pub fn new(config: WebhookConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
            config,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.url
    }
}

#[async_trait]
impl IdeaSink for WebhookSink {
    async fn deliver(&self, payload: &WebhookPayload) -> Result<(), SinkError> {
        let response = self
            .client
            .post(&self.config.url)
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|cause| SinkError::Request(cause.to_string()))?;

        let status = response.status();
        if status.is_success() {
            debug!("idea delivered to webhook");
            Ok(())
        } else {
            warn!("webhook rejected submission with status {status}");
            Err(SinkError::Status(status.as_u16()))
        }
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::answers::AnswerSet;
    use crate::payload::{EMBED_TITLE, build_payload};
    use crate::wizard::NotifyMethod;

    fn sample_payload() -> WebhookPayload {
        let mut answers = AnswerSet::new();
        answers.set_text("idea", "X");
        answers.set_text("problem", "Y");
        answers.platforms_mut().toggle("Browser");
        build_payload(&answers, NotifyMethod::Email, "a@b.co")
    }

    #[tokio::test]
    async fn delivery_succeeds_on_2xx() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/hook"))
            .and(header("Content-Type", "application/json"))
            .and(body_partial_json(serde_json::json!({
                "embeds": [{"title": EMBED_TITLE}]
            })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let sink = WebhookSink::new(WebhookConfig::new(format!("{}/hook", server.uri())));
        let result = sink.deliver(&sample_payload()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let sink = WebhookSink::new(WebhookConfig::new(server.uri()));
        let result = sink.deliver(&sample_payload()).await;
        match result {
            Err(SinkError::Status(code)) => assert_eq!(code, 404),
            other => panic!("expected a status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_request_error() {
        // port reserved and never listening
        let sink = WebhookSink::new(WebhookConfig::new("http://127.0.0.1:9/hook"));
        let result = sink.deliver(&sample_payload()).await;
        assert!(matches!(result, Err(SinkError::Request(_))));
    }
}
