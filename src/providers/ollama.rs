/*!
 * Ollama client for streaming text generation.
 *
 * Talks to the `/api/generate` endpoint with `stream: true`. The response is
 * JSONL: one object per line carrying a `response` text fragment and a `done`
 * flag, which this client decodes incrementally into a fragment stream.
 */

use std::time::Duration;

use async_trait::async_trait;
use futures::channel::mpsc;
use futures_util::StreamExt;
use log::{debug, error};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;
use crate::providers::{FragmentStream, GenerationRequest, StreamingProvider};

/// Ollama client for interacting with the Ollama API
#[derive(Debug, Clone)]
pub struct Ollama {
    /// Base URL of the Ollama API
    base_url: String,
    /// HTTP client for making requests
    client: Client,
}

/// Wire request for the generate endpoint
#[derive(Debug, Serialize)]
struct ApiGenerationRequest<'a> {
    /// Model name to use for generation
    model: &'a str,
    /// Prompt to generate from
    prompt: &'a str,
    /// Additional model parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<GenerationOptions>,
    /// Whether to stream the response
    stream: bool,
}

/// Generation options for the Ollama API
#[derive(Debug, Serialize)]
struct GenerationOptions {
    /// Temperature for generation (default: 0.8)
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

/// One line of a streaming generate response
#[derive(Debug, Deserialize)]
struct StreamChunk {
    /// Generated text fragment
    #[serde(default)]
    response: String,
    /// Whether the generation is complete
    #[serde(default)]
    done: bool,
    /// Error reported inside the stream (e.g. model not found at load time)
    #[serde(default)]
    error: Option<String>,
}

/// Version response from the Ollama API
#[derive(Debug, Deserialize)]
struct VersionResponse {
    version: String,
}

impl Ollama {
    /// Create a new Ollama client from a complete base URL
    ///
    /// Ollama uses HTTP/1.1; the timeout covers the whole request including
    /// the streamed body.
    pub fn from_url(url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            base_url: url.into(),
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .http1_only()
                .build()
                .unwrap_or_default(),
        }
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the Ollama API version
    pub async fn version(&self) -> Result<String, ProviderError> {
        let url = format!("{}/api/version", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let version: VersionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;
        Ok(version.version)
    }
}

#[async_trait]
impl StreamingProvider for Ollama {
    /// Start a streaming generation against `/api/generate`.
    ///
    /// Failures before any line arrives (unreachable backend, non-success
    /// status) are returned directly; failures after that surface as an error
    /// item on the stream, leaving already-delivered fragments untouched.
    async fn stream_generate(
        &self,
        request: GenerationRequest,
    ) -> Result<FragmentStream, ProviderError> {
        let url = format!("{}/api/generate", self.base_url);
        let body = ApiGenerationRequest {
            model: &request.model,
            prompt: &request.prompt,
            options: request
                .temperature
                .map(|temperature| GenerationOptions {
                    temperature: Some(temperature),
                }),
            stream: true,
        };

        debug!("Starting generation with model '{}'", request.model);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Ollama API error ({}): {}", status, message);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let (tx, rx) = mpsc::unbounded::<Result<String, ProviderError>>();
        let mut bytes = response.bytes_stream();

        tokio::spawn(async move {
            // Lines can span chunk boundaries; buffer until a newline lands
            let mut buffer = String::new();
            'read: while let Some(chunk) = bytes.next().await {
                let chunk = match chunk {
                    Ok(chunk) => chunk,
                    Err(e) => {
                        let _ = tx.unbounded_send(Err(ProviderError::ConnectionError(
                            e.to_string(),
                        )));
                        break;
                    }
                };
                buffer.push_str(&String::from_utf8_lossy(&chunk));

                while let Some(pos) = buffer.find('\n') {
                    let line: String = buffer.drain(..=pos).collect();
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    match serde_json::from_str::<StreamChunk>(line) {
                        Ok(parsed) => {
                            if let Some(message) = parsed.error {
                                error!("Ollama reported an error mid-stream: {}", message);
                                let _ = tx
                                    .unbounded_send(Err(ProviderError::RequestFailed(message)));
                                break 'read;
                            }
                            if !parsed.response.is_empty()
                                && tx.unbounded_send(Ok(parsed.response)).is_err()
                            {
                                // Receiver dropped; stop reading
                                break 'read;
                            }
                            if parsed.done {
                                break 'read;
                            }
                        }
                        Err(e) => {
                            let _ = tx
                                .unbounded_send(Err(ProviderError::ParseError(e.to_string())));
                            break 'read;
                        }
                    }
                }
            }
        });

        Ok(Box::pin(rx))
    }

    /// Test the connection by querying the API version
    async fn test_connection(&self) -> Result<(), ProviderError> {
        self.version().await.map(|_| ())
    }
}
