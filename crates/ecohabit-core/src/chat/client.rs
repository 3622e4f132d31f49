//! HTTP client for the hosted text-generation endpoint.
//!
//! Wire format: `POST <endpoint>/models/<model-id>` with bearer auth and
//! `{"inputs": "<prompt>"}`; success is a JSON array of objects that may
//! carry `generated_text`.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::{ChatError, InferenceError};
use crate::storage::secrets;
use crate::storage::ChatConfig;

#[derive(Serialize)]
struct GenerateRequest<'a> {
    inputs: &'a str,
}

#[derive(Deserialize)]
struct Completion {
    generated_text: Option<String>,
}

pub struct InferenceClient {
    http_client: Client,
    endpoint: String,
    model_id: String,
    api_token: String,
    timeout: Duration,
}

impl InferenceClient {
    /// Create a client. `timeout` bounds the whole round trip, body included.
    ///
    /// The endpoint is only validated when a request is made, so a bad URL
    /// surfaces as a failed reply rather than a setup error.
    pub fn new(
        endpoint: impl Into<String>,
        model_id: impl Into<String>,
        api_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ChatError> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ChatError::ClientBuild)?;

        Ok(Self {
            http_client,
            endpoint: endpoint.into(),
            model_id: model_id.into(),
            api_token: api_token.into(),
            timeout,
        })
    }

    /// Create a client from config, resolving the token from the environment
    /// or keyring.
    pub fn from_config(config: &ChatConfig) -> Result<Self, ChatError> {
        let (token, source) = secrets::resolve_api_token().ok_or(ChatError::MissingToken)?;
        debug!(?source, "resolved inference API token");
        Self::with_token(config, token)
    }

    pub fn with_token(
        config: &ChatConfig,
        api_token: impl Into<String>,
    ) -> Result<Self, ChatError> {
        Self::new(&config.endpoint, &config.model_id, api_token, config.timeout())
    }

    /// Full request URL.
    pub fn request_url(&self) -> Result<Url, InferenceError> {
        let raw = format!(
            "{}/models/{}",
            self.endpoint.trim_end_matches('/'),
            self.model_id.trim_start_matches('/')
        );
        Url::parse(&raw).map_err(|source| InferenceError::InvalidEndpoint {
            endpoint: raw,
            source,
        })
    }

    /// Ask the model to continue `prompt` and return the first generated text.
    pub async fn generate(&self, prompt: &str) -> Result<String, InferenceError> {
        let url = self.request_url()?;
        debug!(%url, prompt_len = prompt.len(), "sending inference request");

        let resp = self
            .http_client
            .post(url)
            .bearer_auth(&self.api_token)
            .header(CONTENT_TYPE, "application/json")
            .json(&GenerateRequest { inputs: prompt })
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status();
        debug!(%status, "inference response received");
        if !status.is_success() {
            return Err(InferenceError::Status { status });
        }

        let body = resp.text().await.map_err(|e| self.transport_error(e))?;
        let completions: Vec<Completion> = serde_json::from_str(&body)?;

        completions
            .into_iter()
            .next()
            .and_then(|c| c.generated_text)
            .filter(|text| !text.is_empty())
            .ok_or(InferenceError::EmptyCompletion)
    }

    fn transport_error(&self, err: reqwest::Error) -> InferenceError {
        if err.is_timeout() {
            InferenceError::Timeout {
                timeout: self.timeout,
            }
        } else {
            InferenceError::Transport(err)
        }
    }
}
