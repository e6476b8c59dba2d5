use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::summarizer::TRANSCRIPT_PLACEHOLDER;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Transcript API settings
    #[serde(default)]
    pub transcript: TranscriptConfig,

    /// Summarizer settings
    #[serde(default)]
    pub summarizer: SummarizerConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            transcript: TranscriptConfig::default(),
            summarizer: SummarizerConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

/// Transcript lookup service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranscriptConfig {
    /// Transcript lookup endpoint URL
    #[serde(default = "default_transcript_endpoint")]
    pub endpoint: String,

    /// Engine selector for the transcript-lookup mode
    #[serde(default = "default_transcript_engine")]
    pub engine: String,

    /// API key for the service
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            endpoint: default_transcript_endpoint(),
            engine: default_transcript_engine(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Summarizer configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SummarizerConfig {
    /// Model name (e.g. "deepscaler", "llama3.2:3b")
    #[serde(default = "default_model")]
    pub model: String,

    /// Ollama endpoint URL
    #[serde(default = "default_ollama_endpoint")]
    pub endpoint: String,

    /// Temperature parameter for generation (0.0 to 1.0)
    /// Lower values make output more deterministic, higher values more creative
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Prompt template for summarization
    /// Placeholder: {transcript}
    #[serde(default = "default_prompt_template")]
    pub prompt_template: String,

    /// Request timeout in seconds
    #[serde(default = "default_summarizer_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: default_ollama_endpoint(),
            temperature: default_temperature(),
            prompt_template: default_prompt_template(),
            timeout_secs: default_summarizer_timeout_secs(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_transcript_endpoint() -> String {
    "https://www.searchapi.io/api/v1/search".to_string()
}

fn default_transcript_engine() -> String {
    "youtube_transcripts".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_summarizer_timeout_secs() -> u64 {
    // Streaming generations on a local model can take a while
    120
}

fn default_model() -> String {
    "deepscaler".to_string()
}

fn default_ollama_endpoint() -> String {
    "http://localhost:11434".to_string()
}

fn default_temperature() -> f32 {
    0.1
}

fn default_prompt_template() -> String {
    "You are an expert summarizer. Provide a concise and accurate summary of the following transcript in your own words. Focus on the main points and key ideas, avoiding unnecessary details:\n\nTranscript: {transcript}\n\nSummary:".to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.transcript.endpoint.is_empty() {
            return Err(anyhow!("Transcript endpoint must not be empty"));
        }

        if self.transcript.engine.is_empty() {
            return Err(anyhow!("Transcript engine must not be empty"));
        }

        if self.summarizer.model.is_empty() {
            return Err(anyhow!("Summarizer model must not be empty"));
        }

        if self.summarizer.endpoint.is_empty() {
            return Err(anyhow!("Summarizer endpoint must not be empty"));
        }

        if !self
            .summarizer
            .prompt_template
            .contains(TRANSCRIPT_PLACEHOLDER)
        {
            return Err(anyhow!(
                "Prompt template must contain the {} placeholder",
                TRANSCRIPT_PLACEHOLDER
            ));
        }

        if !(0.0..=1.0).contains(&self.summarizer.temperature) {
            return Err(anyhow!(
                "Temperature must be between 0.0 and 1.0, got {}",
                self.summarizer.temperature
            ));
        }

        Ok(())
    }
}
