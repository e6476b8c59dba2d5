/*!
 * # YTSwAI - YouTube Transcript Summarization with AI
 *
 * A Rust library for summarizing YouTube video transcripts using a locally
 * hosted language model.
 *
 * ## Features
 *
 * - Resolve a video id from watch-page and short-link URLs
 * - Fetch video transcripts through the SearchAPI.io lookup endpoint
 * - Stream an AI-generated summary to the terminal as it is produced
 * - Configurable model, temperature and prompt template
 * - Interactive session for summarizing several videos in a row
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `url_resolver`: Video id extraction from user-supplied URLs
 * - `transcript`: Transcript acquisition from the external lookup API
 * - `summarizer`: Prompt construction and streamed summary generation
 * - `app_controller`: Main application controller and run state machine
 * - `providers`: Client implementations for model backends:
 *   - `providers::ollama`: Ollama API client (streaming)
 *   - `providers::mock`: Scripted backend for tests
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod providers;
pub mod summarizer;
pub mod transcript;
pub mod url_resolver;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, RunReport, RunState};
pub use errors::{AppError, ProviderError, ResolveError, SummarizeError, TranscriptError};
pub use summarizer::{SummaryAccumulator, SummaryService, SummaryStream};
pub use transcript::{TranscriptFetcher, parse_transcript_response};
pub use url_resolver::{VideoId, extract_video_id};
