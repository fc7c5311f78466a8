use std::time::Duration;

use reqwest::Url;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::prompt::{system_prompt, ChatRequest, ChatResponse, TotalsSnapshot};
use super::{AdvisoryReply, ReplySource};
use crate::config::AdvisoryConfig;
use crate::currency::CurrencyFormat;
use crate::errors::AdvisoryError;

/// Stateless client for the chat-completion endpoint.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct AdvisorySession {
    config: AdvisoryConfig,
    endpoint: Url,
    format: CurrencyFormat,
    http: reqwest::Client,
}

impl AdvisorySession {
    pub fn new(config: AdvisoryConfig, format: CurrencyFormat) -> Result<Self, AdvisoryError> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|err| AdvisoryError::InvalidEndpoint(format!("{}: {err}", config.endpoint)))?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            config,
            endpoint,
            format,
            http,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.config.api_key().is_some()
    }

    /// Runs one exchange. Failures are logged and folded into a canned reply.
    pub async fn ask(&self, prompt: &str, snapshot: TotalsSnapshot) -> AdvisoryReply {
        match self.exchange(prompt, &snapshot).await {
            Ok(text) => AdvisoryReply {
                text,
                source: ReplySource::Generated,
            },
            Err(AdvisoryError::MissingApiKey) => {
                info!("advisory request skipped: no API key configured");
                AdvisoryReply::not_configured()
            }
            Err(err) => {
                warn!(error = %err, "advisory exchange failed");
                AdvisoryReply::fallback()
            }
        }
    }

    /// Spawns [`AdvisorySession::ask`] on the current tokio runtime.
    ///
    /// The snapshot is moved into the task, so later ledger changes never reach
    /// the request. Must be called from within a runtime context.
    pub fn submit(&self, prompt: impl Into<String>, snapshot: TotalsSnapshot) -> AdvisoryTask {
        let session = self.clone();
        let prompt = prompt.into();
        let handle = tokio::spawn(async move { session.ask(&prompt, snapshot).await });
        AdvisoryTask { handle }
    }

    async fn exchange(
        &self,
        prompt: &str,
        snapshot: &TotalsSnapshot,
    ) -> Result<String, AdvisoryError> {
        let api_key = self.config.api_key().ok_or(AdvisoryError::MissingApiKey)?;
        let request = ChatRequest::new(
            self.config.model.clone(),
            self.config.temperature,
            system_prompt(snapshot, &self.format),
            prompt,
        );
        debug!(endpoint = %self.endpoint, model = %request.model, "sending advisory request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AdvisoryError::Status {
                status: status.as_u16(),
                body,
            });
        }
        ChatResponse::parse(&body)?.into_reply()
    }
}

/// Handle to an in-flight advisory exchange.
#[derive(Debug)]
pub struct AdvisoryTask {
    handle: JoinHandle<AdvisoryReply>,
}

impl AdvisoryTask {
    pub fn abort(&self) {
        self.handle.abort();
    }

    /// Waits for the reply. A cancelled or panicked task yields the fallback reply.
    pub async fn reply(self) -> AdvisoryReply {
        match self.handle.await {
            Ok(reply) => reply,
            Err(err) => {
                let err = if err.is_cancelled() {
                    AdvisoryError::Cancelled
                } else {
                    AdvisoryError::TaskFailed(err.to_string())
                };
                warn!(error = %err, "advisory task did not complete");
                AdvisoryReply::fallback()
            }
        }
    }
}
