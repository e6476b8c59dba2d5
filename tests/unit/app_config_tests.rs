/*!
 * Tests for application configuration
 */

use ytswai::app_config::{Config, LogLevel, SummarizerConfig, TranscriptConfig};

#[test]
fn test_defaultConfig_shouldPassValidation() {
    Config::default().validate().unwrap();
}

#[test]
fn test_defaultConfig_shouldUseDocumentedDefaults() {
    let config = Config::default();

    assert_eq!(
        config.transcript.endpoint,
        "https://www.searchapi.io/api/v1/search"
    );
    assert_eq!(config.transcript.engine, "youtube_transcripts");
    assert!(config.transcript.api_key.is_empty());
    assert_eq!(config.summarizer.model, "deepscaler");
    assert_eq!(config.summarizer.endpoint, "http://localhost:11434");
    assert!((config.summarizer.temperature - 0.1).abs() < f32::EPSILON);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_defaultPromptTemplate_shouldContainPlaceholder() {
    assert!(
        SummarizerConfig::default()
            .prompt_template
            .contains("{transcript}")
    );
}

#[test]
fn test_transcriptConfig_timeout_shouldDefaultTo30s() {
    assert_eq!(TranscriptConfig::default().timeout_secs, 30);
}

#[test]
fn test_validate_withTemplateMissingPlaceholder_shouldFail() {
    let mut config = Config::default();
    config.summarizer.prompt_template = "Summarize it all".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withOutOfRangeTemperature_shouldFail() {
    let mut config = Config::default();
    config.summarizer.temperature = 1.5;
    assert!(config.validate().is_err());

    config.summarizer.temperature = -0.1;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withEmptyModel_shouldFail() {
    let mut config = Config::default();
    config.summarizer.model = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withEmptyTranscriptEndpoint_shouldFail() {
    let mut config = Config::default();
    config.transcript.endpoint = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_jsonRoundTrip_shouldPreserveValues() {
    let mut config = Config::default();
    config.transcript.api_key = "secret".to_string();
    config.summarizer.model = "llama3.2:3b".to_string();
    config.log_level = LogLevel::Debug;

    let json = serde_json::to_string_pretty(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.transcript.api_key, "secret");
    assert_eq!(parsed.summarizer.model, "llama3.2:3b");
    assert_eq!(parsed.log_level, LogLevel::Debug);
}

#[test]
fn test_config_fromPartialJson_shouldFillDefaults() {
    let parsed: Config = serde_json::from_str(r#"{"summarizer":{"model":"mistral"}}"#).unwrap();

    assert_eq!(parsed.summarizer.model, "mistral");
    assert_eq!(parsed.summarizer.endpoint, "http://localhost:11434");
    assert_eq!(parsed.transcript.engine, "youtube_transcripts");
}

#[test]
fn test_logLevel_serde_shouldUseLowercase() {
    assert_eq!(serde_json::to_string(&LogLevel::Debug).unwrap(), "\"debug\"");

    let parsed: LogLevel = serde_json::from_str("\"trace\"").unwrap();
    assert_eq!(parsed, LogLevel::Trace);
}
