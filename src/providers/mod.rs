/*!
 * Model backend implementations for streaming summary generation.
 *
 * This module contains client implementations for model backends:
 * - Ollama: Local LLM server, streaming generation
 * - Mock: Scripted backend for tests
 */

use std::fmt::Debug;
use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;

use crate::errors::ProviderError;

/// Ordered, finite stream of generated text fragments
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<String, ProviderError>> + Send>>;

/// Generation request passed to a model backend
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Model name to use for generation
    pub model: String,
    /// Prompt to generate from
    pub prompt: String,
    /// Temperature for generation; lower values bias toward deterministic output
    pub temperature: Option<f32>,
}

impl GenerationRequest {
    /// Create a new generation request
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            temperature: None,
        }
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Common trait for streaming model backends
///
/// This trait defines the interface that all backend implementations must
/// follow, allowing them to be used interchangeably by the summarizer.
#[async_trait]
pub trait StreamingProvider: Send + Sync + Debug {
    /// Start a generation and return its fragment stream
    ///
    /// # Arguments
    /// * `request` - The generation request
    ///
    /// # Returns
    /// * `Result<FragmentStream, ProviderError>` - The lazy fragment sequence,
    ///   or an error when the generation could not be started
    async fn stream_generate(
        &self,
        request: GenerationRequest,
    ) -> Result<FragmentStream, ProviderError>;

    /// Test the connection to the backend
    ///
    /// # Returns
    /// * `Result<(), ProviderError>` - Ok if the backend is reachable, or an error
    async fn test_connection(&self) -> Result<(), ProviderError>;
}

pub mod mock;
pub mod ollama;
