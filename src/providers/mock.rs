/*!
 * Mock model backend for testing.
 *
 * This module provides a scripted backend that simulates different behaviors:
 * - `MockProvider::working()` - Streams a fixed fragment script
 * - `MockProvider::failing()` - Errors before the stream starts
 * - `MockProvider::fail_after(n)` - Yields n fragments, then an error item
 * - `MockProvider::empty()` - Yields no fragments at all
 */

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::stream;

use crate::errors::ProviderError;
use crate::providers::{FragmentStream, GenerationRequest, StreamingProvider};

/// Behavior mode for the mock backend
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Streams the full fragment script
    Working,
    /// Fails before any fragment is produced
    Failing,
    /// Streams the given number of fragments, then an error item
    FailAfter { fragments: usize },
    /// Streams nothing and completes immediately
    Empty,
}

/// Scripted model backend for testing streaming behavior
#[derive(Debug, Clone)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Fragments yielded by the stream, in order
    script: Vec<String>,
    /// Last request seen, for assertions on prompt/model/temperature
    last_request: Arc<Mutex<Option<GenerationRequest>>>,
}

impl MockProvider {
    /// Create a new mock backend with the specified behavior and script
    pub fn new(behavior: MockBehavior, script: Vec<String>) -> Self {
        Self {
            behavior,
            script,
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a working mock that streams a default script
    pub fn working() -> Self {
        Self::with_script(["This is ", "a mock ", "summary."])
    }

    /// Create a working mock that streams the given fragments
    pub fn with_script<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            MockBehavior::Working,
            fragments.into_iter().map(Into::into).collect(),
        )
    }

    /// Create a failing mock that errors before streaming
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing, Vec::new())
    }

    /// Create a mock that streams n fragments of the default script, then errors
    pub fn fail_after(fragments: usize) -> Self {
        Self::new(
            MockBehavior::FailAfter { fragments },
            vec![
                "This is ".to_string(),
                "a mock ".to_string(),
                "summary.".to_string(),
            ],
        )
    }

    /// Create a mock whose stream completes without any fragments
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty, Vec::new())
    }

    /// The last generation request this backend received
    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl StreamingProvider for MockProvider {
    async fn stream_generate(
        &self,
        request: GenerationRequest,
    ) -> Result<FragmentStream, ProviderError> {
        *self.last_request.lock().unwrap() = Some(request);

        match &self.behavior {
            MockBehavior::Failing => Err(ProviderError::ConnectionError(
                "Simulated backend failure".to_string(),
            )),

            MockBehavior::Empty => {
                let items: Vec<Result<String, ProviderError>> = Vec::new();
                Ok(Box::pin(stream::iter(items)))
            }

            MockBehavior::Working => {
                let items: Vec<Result<String, ProviderError>> =
                    self.script.iter().cloned().map(Ok).collect();
                Ok(Box::pin(stream::iter(items)))
            }

            MockBehavior::FailAfter { fragments } => {
                let mut items: Vec<Result<String, ProviderError>> =
                    self.script.iter().take(*fragments).cloned().map(Ok).collect();
                items.push(Err(ProviderError::RequestFailed(
                    "Simulated mid-stream failure".to_string(),
                )));
                Ok(Box::pin(stream::iter(items)))
            }
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        match self.behavior {
            MockBehavior::Failing => Err(ProviderError::ConnectionError(
                "Simulated backend failure".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
