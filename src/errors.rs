/*!
 * Error types for the ytswai application.
 *
 * This module contains custom error types for the different stages of the
 * summarization pipeline, using the thiserror crate for ergonomic error
 * definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when resolving a video URL to a video id
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The URL contains neither a `v=` marker nor a `youtu.be/` segment
    #[error("Invalid YouTube URL format: {0}")]
    InvalidUrlFormat(String),
}

/// Errors that can occur when talking to a model backend
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),
}

/// Errors that can occur when fetching a transcript
#[derive(Error, Debug)]
pub enum TranscriptError {
    /// Transport-level failure reaching the transcript API
    #[error("Failed to fetch transcript: {0}")]
    RequestFailed(String),

    /// The transcript API answered with a non-success status
    #[error("Transcript API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// The API was reachable but returned no usable transcript
    #[error("No transcripts found for this video")]
    NoTranscriptAvailable,
}

/// Errors that can occur during summary generation
#[derive(Error, Debug)]
pub enum SummarizeError {
    /// Error from the model backend
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from URL resolution
    #[error("URL error: {0}")]
    Resolve(#[from] ResolveError),

    /// Error from transcript fetching
    #[error("Transcript error: {0}")]
    Transcript(#[from] TranscriptError),

    /// Error from summary generation
    #[error("Summarization error: {0}")]
    Summarize(#[from] SummarizeError),

    /// Any other unexpected error
    #[error("Internal error: {0}")]
    Internal(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Internal(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::Internal(error.to_string())
    }
}
