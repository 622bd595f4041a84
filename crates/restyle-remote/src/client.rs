//! HTTPS client for the remote layout service.
//!
//! [`LayoutServiceClient`] sends one chat-completions request per prompt and
//! hands back the raw candidate document text. It is cheap to clone; clones
//! share the underlying connection pool.
//!
//! A client only exists when a credential is configured.
//! [`LayoutServiceClient::new`] returns `None` otherwise, which is how the
//! rest of the application learns that the remote path is disabled.

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, error, info, warn};

use crate::error::RemoteError;
use crate::protocol::{extract_content, ChatCompletionRequest};

/// Default chat-completions endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Default model.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Connection establishment timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Overall timeout for one request, including reading the body.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Connection settings for [`LayoutServiceClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub model: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

/// Client for the natural-language layout service.
#[derive(Clone)]
pub struct LayoutServiceClient {
    http_client: Client,
    api_key: String,
    config: ClientConfig,
}

impl fmt::Debug for LayoutServiceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutServiceClient")
            .field("endpoint", &self.config.endpoint)
            .field("model", &self.config.model)
            .finish_non_exhaustive()
    }
}

impl LayoutServiceClient {
    /// Create a client, or `None` when no usable credential is given.
    pub fn new(api_key: Option<String>, config: ClientConfig) -> Option<Self> {
        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        let Some(api_key) = api_key else {
            info!("No layout service credential configured; remote resolution disabled");
            return None;
        };

        let http_client = match Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
        {
            Ok(client) => client,
            Err(e) => {
                error!("Failed to build HTTP client: {}", e);
                return None;
            }
        };

        info!(
            "Layout service client ready (endpoint: {}, model: {})",
            config.endpoint, config.model
        );

        Some(Self {
            http_client,
            api_key,
            config,
        })
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// The model requested from the service.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Ask the service for an instruction document matching `prompt`.
    ///
    /// Returns the candidate document text exactly as the service produced
    /// it. The caller validates it.
    ///
    /// # Errors
    ///
    /// - [`RemoteError::Network`] on connection failure or timeout.
    /// - [`RemoteError::Status`] when the service answers with an error status.
    /// - [`RemoteError::Decode`] when the body has no `choices[0].message.content`.
    pub async fn request_instruction(&self, prompt: &str) -> Result<String, RemoteError> {
        let request = ChatCompletionRequest::for_prompt(&self.config.model, prompt);
        debug!(
            "Requesting layout instruction ({} chars) from {}",
            prompt.len(),
            self.config.endpoint
        );

        let response = self
            .http_client
            .post(&self.config.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Layout service returned HTTP {}", status.as_u16());
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body,
            });
        }

        match extract_content(&body) {
            Some(content) => {
                debug!("Layout service returned {} chars of content", content.len());
                Ok(content)
            }
            None => {
                warn!("Layout service response carried no message content");
                Err(RemoteError::Decode { body })
            }
        }
    }
}
