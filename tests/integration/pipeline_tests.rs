/*!
 * End-to-end pipeline tests with scripted transcript and model backends
 */

use ytswai::app_controller::{Controller, RunState};
use ytswai::errors::AppError;
use ytswai::providers::mock::MockProvider;

use crate::common::mock_transcript::MockTranscriptSource;
use crate::common::test_config;

fn controller(
    provider: MockProvider,
    source: MockTranscriptSource,
) -> Controller<MockProvider, MockTranscriptSource> {
    Controller::with_parts(test_config(), provider, source)
}

#[tokio::test]
async fn test_runOnce_withTwoSegments_shouldProduceNonEmptySummary() {
    let controller = controller(
        MockProvider::with_script(["A short ", "summary."]),
        MockTranscriptSource::with_transcript("a b"),
    );

    let report = controller
        .run_once("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=5", "test-key")
        .await;

    assert_eq!(report.state, RunState::Done);
    assert!(report.succeeded());
    assert_eq!(report.video_id.as_deref(), Some("dQw4w9WgXcQ"));
    assert_eq!(report.transcript_chars, 3);
    assert_eq!(report.summary, "A short summary.");
    assert!(report.error.is_none());
}

#[tokio::test]
async fn test_runOnce_withShortLink_shouldResolveAndSucceed() {
    let controller = controller(
        MockProvider::working(),
        MockTranscriptSource::with_transcript("hello there"),
    );

    let report = controller
        .run_once("https://youtu.be/dQw4w9WgXcQ?si=share", "test-key")
        .await;

    assert!(report.succeeded());
    assert_eq!(report.video_id.as_deref(), Some("dQw4w9WgXcQ"));
    assert!(!report.summary.is_empty());
}

#[tokio::test]
async fn test_runOnce_withInvalidUrl_shouldFailWithResolveError() {
    let controller = controller(
        MockProvider::working(),
        MockTranscriptSource::with_transcript("a"),
    );

    let report = controller
        .run_once("https://example.com/clip/1", "test-key")
        .await;

    assert_eq!(report.state, RunState::Failed);
    assert!(!report.succeeded());
    assert!(matches!(report.error, Some(AppError::Resolve(_))));
    assert!(report.video_id.is_none());
    assert!(report.summary.is_empty());
}

#[tokio::test]
async fn test_runOnce_withMissingTranscript_shouldFailWithDistinctMessage() {
    let controller = controller(MockProvider::working(), MockTranscriptSource::Missing);

    let report = controller
        .run_once("https://youtu.be/dQw4w9WgXcQ", "test-key")
        .await;

    assert_eq!(report.state, RunState::Failed);
    let Some(AppError::Transcript(e)) = report.error else {
        panic!("Expected a transcript error");
    };
    assert!(e.to_string().contains("No transcripts found"));
}

#[tokio::test]
async fn test_runOnce_withUnreachableTranscriptApi_shouldReportTransportFailure() {
    let controller = controller(MockProvider::working(), MockTranscriptSource::Unreachable);

    let report = controller
        .run_once("https://youtu.be/dQw4w9WgXcQ", "test-key")
        .await;

    assert_eq!(report.state, RunState::Failed);
    let Some(AppError::Transcript(e)) = report.error else {
        panic!("Expected a transcript error");
    };
    assert!(e.to_string().contains("503"));
}

#[tokio::test]
async fn test_runOnce_withFailingBackend_shouldFailAfterTranscriptStage() {
    let controller = controller(
        MockProvider::failing(),
        MockTranscriptSource::with_transcript("a b"),
    );

    let report = controller
        .run_once("https://youtu.be/dQw4w9WgXcQ", "test-key")
        .await;

    assert_eq!(report.state, RunState::Failed);
    assert!(matches!(report.error, Some(AppError::Summarize(_))));
    // The transcript stage still completed before the backend failed
    assert_eq!(report.transcript_chars, 3);
}

#[tokio::test]
async fn test_runOnce_withMidStreamFailure_shouldKeepPartialSummary() {
    let controller = controller(
        MockProvider::fail_after(2),
        MockTranscriptSource::with_transcript("a b"),
    );

    let report = controller
        .run_once("https://youtu.be/dQw4w9WgXcQ", "test-key")
        .await;

    assert_eq!(report.state, RunState::Failed);
    assert!(matches!(report.error, Some(AppError::Summarize(_))));
    assert_eq!(report.summary, "This is a mock ");
}

#[tokio::test]
async fn test_runOnce_withEmptyGeneration_shouldSucceedWithEmptySummary() {
    let controller = controller(
        MockProvider::empty(),
        MockTranscriptSource::with_transcript("a b"),
    );

    let report = controller
        .run_once("https://youtu.be/dQw4w9WgXcQ", "test-key")
        .await;

    assert!(report.succeeded());
    assert!(report.summary.is_empty());
}

#[tokio::test]
async fn test_runOnce_calledTwice_shouldNotRetainStateBetweenRuns() {
    let controller = controller(
        MockProvider::with_script(["S"]),
        MockTranscriptSource::with_transcript("t"),
    );

    let first = controller.run_once("https://youtu.be/abc", "test-key").await;
    let second = controller.run_once("https://youtu.be/abc", "test-key").await;

    assert!(first.succeeded());
    assert!(second.succeeded());
    assert_eq!(first.summary, second.summary);
}

#[tokio::test]
async fn test_testConnection_shouldReflectBackendHealth() {
    let healthy = controller(
        MockProvider::working(),
        MockTranscriptSource::with_transcript("t"),
    );
    assert!(healthy.test_connection().await.is_ok());

    let dead = controller(
        MockProvider::failing(),
        MockTranscriptSource::with_transcript("t"),
    );
    assert!(dead.test_connection().await.is_err());
}
