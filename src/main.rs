// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::Path;

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod errors;
mod providers;
mod summarizer;
mod transcript;
mod url_resolver;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

// @returns: log LevelFilter for a config log level
fn to_level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarize a video transcript using a local AI model (default command)
    #[command(alias = "sum")]
    Summarize(SummarizeArgs),

    /// Generate shell completions for ytswai
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct SummarizeArgs {
    /// YouTube video URL for a one-shot run (omit to start an interactive session)
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// SearchAPI.io API key
    #[arg(short, long, env = "SEARCHAPI_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Model name to use for summarization
    #[arg(short, long)]
    model: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// YTSwAI - YouTube Transcript Summarization with AI
///
/// Fetches the transcript of a YouTube video and streams an AI-generated
/// summary to the terminal as it is produced.
#[derive(Parser, Debug)]
#[command(name = "ytswai")]
#[command(author = "YTSwAI Team")]
#[command(version = "0.1.0")]
#[command(about = "AI-powered YouTube transcript summarizer")]
#[command(long_about = "YTSwAI fetches YouTube video transcripts and summarizes them with a locally hosted model, streaming the summary as it is generated.

EXAMPLES:
    ytswai                                               # Interactive session
    ytswai 'https://www.youtube.com/watch?v=dQw4w9WgXcQ' # One-shot run
    ytswai -m llama3.2:3b 'https://youtu.be/dQw4w9WgXcQ' # Use a specific model
    ytswai -a <key> <url>                                # Pass the API key explicitly
    ytswai --log-level debug <url>                       # Run with debug logging
    ytswai completions bash > ytswai.bash                # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically. The API key can come from --api-key, the
    SEARCHAPI_KEY environment variable, or the config file.

MODEL BACKEND:
    Summaries are generated by a local Ollama server (default:
    http://localhost:11434, model 'deepscaler', temperature 0.1).")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// YouTube video URL for a one-shot run (omit to start an interactive session)
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// SearchAPI.io API key
    #[arg(short, long, env = "SEARCHAPI_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Model name to use for summarization
    #[arg(short, long)]
    model: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "ytswai", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Summarize(args)) => run_summarize(args).await,
        None => {
            // Default behavior - use top-level args
            let summarize_args = SummarizeArgs {
                url: cli.url,
                api_key: cli.api_key,
                model: cli.model,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_summarize(summarize_args).await
        }
    }
}

async fn run_summarize(options: SummarizeArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(to_level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;
        config
    } else {
        // Create default configuration if not exists
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let config = Config::default();

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json).context(format!(
            "Failed to write default config to file: {}",
            config_path
        ))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(model) = &options.model {
        config.summarizer.model = model.clone();
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config
        .validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(to_level_filter(&config.log_level));
    }

    // Resolve the API key: CLI flag (or SEARCHAPI_KEY env var) first, then config
    let api_key = options
        .api_key
        .clone()
        .unwrap_or_else(|| config.transcript.api_key.clone());
    if api_key.is_empty() {
        return Err(anyhow!(
            "API key is required - pass --api-key, set SEARCHAPI_KEY, or add it to the config file"
        ));
    }

    // Create controller
    let controller = Controller::with_config(config)?;

    // A dead backend should be visible before the first run, but it only
    // becomes fatal once a summary is actually requested
    if let Err(e) = controller.test_connection().await {
        warn!("Model backend not reachable: {}", e);
    }

    match options.url {
        Some(url) => {
            // One-shot run; the exit code reflects the outcome
            let report = controller.run_once(&url, &api_key).await;
            match report.error {
                Some(e) => Err(anyhow::Error::new(e)),
                None => {
                    log::info!("Summary complete!");
                    Ok(())
                }
            }
        }
        None => controller.run_session(&api_key).await,
    }
}
