use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::io::{self, Write};
use std::time::{Duration, Instant};

use crate::app_config::Config;
use crate::errors::AppError;
use crate::providers::StreamingProvider;
use crate::providers::ollama::Ollama;
use crate::summarizer::{SummaryAccumulator, SummaryService};
use crate::transcript::{TranscriptFetcher, TranscriptSource};
use crate::url_resolver::extract_video_id;

// @module: Application controller for the summarization pipeline

/// Pipeline state for one run
///
/// `Done` and `Failed` are terminal; a new user action always restarts from
/// `Idle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunState {
    Idle,
    ResolvingUrl,
    FetchingTranscript,
    Summarizing,
    Done,
    Failed,
}

/// Outcome of one pipeline run
#[derive(Debug)]
pub struct RunReport {
    /// Terminal state of the run, `Done` or `Failed`
    pub state: RunState,
    /// Resolved video id, when resolution succeeded
    pub video_id: Option<String>,
    /// Characters of transcript submitted to the model
    pub transcript_chars: usize,
    /// Accumulated summary text; partial if the run failed mid-stream
    pub summary: String,
    /// The failure, when the run did not complete
    pub error: Option<AppError>,
}

impl RunReport {
    fn new() -> Self {
        Self {
            state: RunState::Idle,
            video_id: None,
            transcript_chars: 0,
            summary: String::new(),
            error: None,
        }
    }

    /// Whether the run reached `Done`
    pub fn succeeded(&self) -> bool {
        self.state == RunState::Done
    }
}

/// Main application controller for transcript summarization
pub struct Controller<P: StreamingProvider, S: TranscriptSource = TranscriptFetcher> {
    // @field: App configuration
    config: Config,
    // @field: Transcript source
    fetcher: S,
    // @field: Summary service over the model backend
    summarizer: SummaryService<P>,
}

impl Controller<Ollama> {
    // @method: Create a new controller wired to the configured Ollama backend
    pub fn with_config(config: Config) -> Result<Self> {
        let provider = Ollama::from_url(
            config.summarizer.endpoint.clone(),
            config.summarizer.timeout_secs,
        );
        Ok(Self::with_parts(
            config.clone(),
            provider,
            TranscriptFetcher::new(config.transcript),
        ))
    }
}

impl<P: StreamingProvider, S: TranscriptSource> Controller<P, S> {
    /// Create a controller with explicit backend and transcript source
    ///
    /// Tests use this to substitute scripted implementations at both seams.
    pub fn with_parts(config: Config, provider: P, fetcher: S) -> Self {
        let summarizer = SummaryService::new(config.summarizer.clone(), provider);
        Self {
            config,
            fetcher,
            summarizer,
        }
    }

    /// API key from the configuration file, may be empty
    pub fn config_api_key(&self) -> &str {
        &self.config.transcript.api_key
    }

    /// Test the connection to the model backend
    pub async fn test_connection(&self) -> Result<(), AppError> {
        self.summarizer.test_connection().await.map_err(Into::into)
    }

    /// Run the full pipeline once for a URL.
    ///
    /// Every failure is caught here and recorded on the report; partial
    /// summary text already written to the terminal stays visible. The error
    /// is not logged here so callers decide how to surface it.
    pub async fn run_once(&self, url: &str, api_key: &str) -> RunReport {
        let mut report = RunReport::new();
        match self.execute(url, api_key, &mut report).await {
            Ok(()) => report.state = RunState::Done,
            Err(e) => {
                report.state = RunState::Failed;
                report.error = Some(e);
            }
        }
        report
    }

    /// Drive one run through the pipeline stages, updating the report as each
    /// stage completes
    async fn execute(
        &self,
        url: &str,
        api_key: &str,
        report: &mut RunReport,
    ) -> Result<(), AppError> {
        let started = Instant::now();

        report.state = RunState::ResolvingUrl;
        debug!("Run state: {:?}", report.state);
        let video_id = extract_video_id(url)?;
        report.video_id = Some(video_id.to_string());
        info!("Resolved video id: {}", video_id);

        report.state = RunState::FetchingTranscript;
        debug!("Run state: {:?}", report.state);
        let progress = Self::spinner("Fetching transcript...");
        let transcript = match self.fetcher.fetch(&video_id, api_key).await {
            Ok(transcript) => {
                progress.finish_and_clear();
                transcript
            }
            Err(e) => {
                progress.finish_and_clear();
                return Err(e.into());
            }
        };
        report.transcript_chars = transcript.len();
        info!("Transcript length: {} characters", transcript.len());

        report.state = RunState::Summarizing;
        debug!("Run state: {:?}", report.state);
        let progress = Self::spinner("Generating summary...");
        let mut stream = match self.summarizer.summarize(&transcript).await {
            Ok(stream) => {
                progress.finish_and_clear();
                stream
            }
            Err(e) => {
                progress.finish_and_clear();
                return Err(e.into());
            }
        };

        let mut accumulator = SummaryAccumulator::new();
        let mut stdout = io::stdout();
        while let Some(fragment) = stream.next_fragment().await {
            match fragment {
                Ok(fragment) => {
                    // The terminal always shows the full accumulated value;
                    // appending the fragment keeps both in sync
                    accumulator.push(&fragment);
                    write!(stdout, "{}", fragment)?;
                    stdout.flush()?;
                }
                Err(e) => {
                    // Partial output stays on screen; no rollback
                    writeln!(stdout).ok();
                    report.summary = accumulator.into_text();
                    return Err(e.into());
                }
            }
        }
        writeln!(stdout)?;

        if accumulator.is_empty() {
            warn!("Model returned an empty summary");
        }
        report.summary = accumulator.into_text();

        info!(
            "Summary complete in {}",
            Self::format_duration(started.elapsed())
        );
        Ok(())
    }

    /// Run the long-running interactive session.
    ///
    /// Prompts for a URL, runs the pipeline, surfaces the outcome and loops.
    /// A failed run never ends the session; a blank line or EOF does.
    pub async fn run_session(&self, api_key: &str) -> Result<()> {
        info!("Enter a YouTube video URL to summarize (blank line to quit)");

        let stdin = io::stdin();
        loop {
            print!("Video URL> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.read_line(&mut line)? == 0 {
                break;
            }
            let url = line.trim();
            if url.is_empty() {
                break;
            }

            let report = self.run_once(url, api_key).await;
            match report.error {
                None => info!("Summary complete!"),
                Some(e) => error!("{}", e),
            }
        }

        info!("Session closed");
        Ok(())
    }

    // @returns: Spinner-style progress bar with the given status message
    fn spinner(message: &str) -> ProgressBar {
        let progress = ProgressBar::new_spinner();
        let template_result = ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        progress.set_style(template_result);
        progress.enable_steady_tick(Duration::from_millis(100));
        progress.set_message(message.to_string());
        progress
    }

    // @returns: Human readable duration
    fn format_duration(duration: Duration) -> String {
        let secs = duration.as_secs();
        if secs >= 60 {
            format!("{}m {}s", secs / 60, secs % 60)
        } else {
            format!("{}.{:01}s", secs, duration.subsec_millis() / 100)
        }
    }
}
