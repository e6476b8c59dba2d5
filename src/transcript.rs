/*!
 * Transcript acquisition from the SearchAPI.io transcript-lookup endpoint.
 *
 * One GET request per run, no retry, no caching. The response body is parsed
 * separately from the transport so the parsing rules stay testable without a
 * live service.
 */

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::app_config::TranscriptConfig;
use crate::errors::TranscriptError;
use crate::url_resolver::VideoId;

/// One timestamped text chunk returned by the transcript API
#[derive(Debug, Deserialize)]
pub struct TranscriptSegment {
    /// Text content of the segment
    pub text: String,
}

/// Success-body shape of the transcript lookup endpoint
#[derive(Debug, Deserialize)]
pub struct TranscriptResponse {
    /// Ordered transcript segments; absent when the video has no transcript
    pub transcripts: Option<Vec<TranscriptSegment>>,
}

/// Source of video transcripts
///
/// The seam between the pipeline and the external lookup service; tests
/// substitute a scripted implementation here.
#[async_trait]
pub trait TranscriptSource: Send + Sync + Debug {
    /// Fetch the transcript for a video as one concatenated string
    async fn fetch(&self, video_id: &VideoId, api_key: &str) -> Result<String, TranscriptError>;
}

/// Client for the transcript lookup API
#[derive(Debug, Clone)]
pub struct TranscriptFetcher {
    /// Endpoint and engine settings
    config: TranscriptConfig,
    /// HTTP client for making requests
    client: Client,
}

impl TranscriptFetcher {
    /// Create a new fetcher with the given configuration
    pub fn new(config: TranscriptConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_default();
        Self { config, client }
    }
}

#[async_trait]
impl TranscriptSource for TranscriptFetcher {
    /// Fetch the transcript for a video and join its segments into one string.
    ///
    /// Issues a single GET request with the engine selector, the video
    /// reference and the access key as query parameters. Identical references
    /// are re-fetched on every invocation.
    async fn fetch(&self, video_id: &VideoId, api_key: &str) -> Result<String, TranscriptError> {
        debug!("Fetching transcript for video id: {}", video_id);

        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[
                ("engine", self.config.engine.as_str()),
                ("video_id", video_id.as_str()),
                ("api_key", api_key),
            ])
            .send()
            .await
            .map_err(|e| TranscriptError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            return Err(TranscriptError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| TranscriptError::RequestFailed(e.to_string()))?;

        parse_transcript_response(&body)
    }
}

/// Parse a transcript API response body and join the segment texts.
///
/// Segments are joined in the order received, separated by a single space. A
/// body without a `transcripts` array, with an empty one, or of any other
/// shape means the service had no transcript for the video.
pub fn parse_transcript_response(body: &str) -> Result<String, TranscriptError> {
    let parsed: TranscriptResponse =
        serde_json::from_str(body).map_err(|_| TranscriptError::NoTranscriptAvailable)?;

    match parsed.transcripts {
        Some(segments) if !segments.is_empty() => Ok(segments
            .iter()
            .map(|segment| segment.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")),
        _ => Err(TranscriptError::NoTranscriptAvailable),
    }
}
