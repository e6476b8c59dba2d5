/*!
 * Streaming summary generation.
 *
 * Builds the instructional prompt from a transcript and exposes the model
 * backend's incremental output as an ordered, finite fragment stream. Each
 * call to [`SummaryService::summarize`] starts a fresh generation; streams
 * are consumed exactly once per run.
 */

use futures::StreamExt;
use log::debug;

use crate::app_config::SummarizerConfig;
use crate::errors::SummarizeError;
use crate::providers::{FragmentStream, GenerationRequest, StreamingProvider};

/// Placeholder substituted with the transcript body in the prompt template
pub const TRANSCRIPT_PLACEHOLDER: &str = "{transcript}";

/// Service that turns a transcript into a streamed summary
#[derive(Debug)]
pub struct SummaryService<P: StreamingProvider> {
    /// Model, temperature and prompt template settings
    config: SummarizerConfig,
    /// Model backend used for generation
    provider: P,
}

impl<P: StreamingProvider> SummaryService<P> {
    /// Create a new service from an explicit configuration and backend
    pub fn new(config: SummarizerConfig, provider: P) -> Self {
        Self { config, provider }
    }

    /// Substitute the transcript verbatim into the configured template.
    ///
    /// No length bound is applied; arbitrarily long transcripts are passed
    /// through as-is.
    pub fn build_prompt(&self, transcript: &str) -> String {
        self.config
            .prompt_template
            .replace(TRANSCRIPT_PLACEHOLDER, transcript)
    }

    /// Start a fresh summary generation for the transcript.
    ///
    /// # Arguments
    /// * `transcript` - The concatenated transcript text
    ///
    /// # Returns
    /// * `Result<SummaryStream, SummarizeError>` - The fragment stream, or an
    ///   error when the backend could not start generating
    pub async fn summarize(&self, transcript: &str) -> Result<SummaryStream, SummarizeError> {
        let prompt = self.build_prompt(transcript);
        debug!("Built prompt of {} characters", prompt.len());

        let request = GenerationRequest::new(self.config.model.as_str(), prompt)
            .temperature(self.config.temperature);

        let fragments = self.provider.stream_generate(request).await?;
        Ok(SummaryStream { fragments })
    }

    /// Test the connection to the model backend
    pub async fn test_connection(&self) -> Result<(), SummarizeError> {
        self.provider.test_connection().await.map_err(Into::into)
    }
}

/// Lazy, ordered, finite sequence of summary fragments
pub struct SummaryStream {
    fragments: FragmentStream,
}

impl SummaryStream {
    /// Next fragment, or `None` once the generation is complete.
    ///
    /// An `Err` item signals a mid-generation backend failure; fragments
    /// already delivered stay valid.
    pub async fn next_fragment(&mut self) -> Option<Result<String, SummarizeError>> {
        self.fragments
            .next()
            .await
            .map(|item| item.map_err(SummarizeError::from))
    }
}

/// Monotonically growing summary text built from streamed fragments
///
/// The display surface always shows the full accumulated value, never a diff.
#[derive(Debug, Default)]
pub struct SummaryAccumulator {
    text: String,
}

impl SummaryAccumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment and return the full accumulated text
    pub fn push(&mut self, fragment: &str) -> &str {
        self.text.push_str(fragment);
        &self.text
    }

    /// Current accumulated text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether nothing has been accumulated yet
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consume the accumulator, returning the final text
    pub fn into_text(self) -> String {
        self.text
    }
}
