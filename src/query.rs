//! The `query` flow: post a prompt, print what comes back.
//!
//! [`QueryClient::generate`] does the network work and returns either the
//! generated text or a [`QueryError`]. [`run`] wraps it with the status lines
//! and never fails on a bad endpoint; only a broken console is an error.

use crate::config::QueryConfig;
use crate::console::{Console, Tone};
use crate::protocol::{DecodeError, GenerateRequest, GenerateResponse};
use reqwest::Client;
use std::error::Error as StdError;
use std::io;
use tracing::{debug, info, trace, warn};

/// Line printed before the request goes out.
pub const SENDING: &str = "Sending data through the NET...";

/// Why a query produced no answer.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The HTTP exchange failed, including non-2xx statuses.
    #[error("Connection flatlined: {0}")]
    Transport(String),
    /// The server answered but the body wasn't a JSON object.
    #[error("Data corruption detected: {0}")]
    Decoding(String),
}

impl From<reqwest::Error> for QueryError {
    fn from(err: reqwest::Error) -> Self {
        QueryError::Transport(describe(&err))
    }
}

impl From<DecodeError> for QueryError {
    fn from(err: DecodeError) -> Self {
        QueryError::Decoding(describe(&err))
    }
}

/// Render an error and its causes as `outer: inner: ...`.
fn describe(err: &(dyn StdError + 'static)) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        // hyper and std often repeat the innermost message
        if !text.ends_with(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}

fn log_transport_failure(err: &reqwest::Error) {
    match err.status() {
        Some(status) => debug!(%status, "endpoint answered with an error status"),
        None => debug!("endpoint could not be reached: {}", err),
    }
}

/// HTTP client for the inference endpoint.
pub struct QueryClient {
    client: Client,
}

impl QueryClient {
    /// Client with reqwest's default policy; no timeout is set.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Send one generate request and pull the text out of the answer.
    pub async fn generate(&self, config: &QueryConfig) -> Result<String, QueryError> {
        let request = GenerateRequest {
            model: &config.model,
            prompt: &config.prompt,
        };

        debug!(url = %config.api_url, model = %config.model, "posting generate request");
        let response = self
            .client
            .post(&config.api_url)
            .json(&request)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .inspect_err(log_transport_failure)?;

        let body = response.text().await.inspect_err(log_transport_failure)?;
        trace!(bytes = body.len(), "response body received");

        let parsed = GenerateResponse::parse(&body)?;
        Ok(parsed.text())
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Run a query and report the outcome on `console`.
pub async fn run(
    client: &QueryClient,
    config: &QueryConfig,
    console: &mut dyn Console,
) -> io::Result<()> {
    console.emit(Tone::Info, SENDING)?;

    match client.generate(config).await {
        Ok(text) => {
            info!("query answered");
            console.emit(Tone::Success, &format!("NET Response: {}", text))
        }
        Err(e) => {
            warn!("query failed: {}", e);
            console.emit(Tone::Error, &e.to_string())
        }
    }
}
