/*!
 * Tests for the error type hierarchy
 */

use ytswai::errors::{AppError, ProviderError, ResolveError, SummarizeError, TranscriptError};

#[test]
fn test_resolveError_display_shouldIncludeOriginalUrl() {
    let error = ResolveError::InvalidUrlFormat("https://example.com/clip".to_string());
    assert!(error.to_string().contains("https://example.com/clip"));
    assert!(error.to_string().contains("Invalid YouTube URL format"));
}

#[test]
fn test_providerError_apiError_shouldIncludeStatusAndMessage() {
    let error = ProviderError::ApiError {
        status_code: 404,
        message: "model 'nope' not found".to_string(),
    };
    let text = error.to_string();
    assert!(text.contains("404"));
    assert!(text.contains("model 'nope' not found"));
}

#[test]
fn test_summarizeError_fromProviderError_shouldChainDisplay() {
    let error = SummarizeError::from(ProviderError::RequestFailed("model not found".to_string()));
    assert!(error.to_string().contains("model not found"));
}

#[test]
fn test_noTranscriptAvailable_shouldReadDifferentlyThanTransportFailure() {
    let missing = TranscriptError::NoTranscriptAvailable.to_string();
    let transport = TranscriptError::RequestFailed("connection refused".to_string()).to_string();
    assert_ne!(missing, transport);
}

#[test]
fn test_appError_fromResolveError_shouldWrap() {
    let error: AppError = ResolveError::InvalidUrlFormat("nope".to_string()).into();
    assert!(matches!(error, AppError::Resolve(_)));
}

#[test]
fn test_appError_fromTranscriptError_shouldWrap() {
    let error: AppError = TranscriptError::NoTranscriptAvailable.into();
    assert!(matches!(error, AppError::Transcript(_)));
    assert!(error.to_string().contains("No transcripts found"));
}

#[test]
fn test_appError_fromSummarizeError_shouldWrap() {
    let error: AppError =
        SummarizeError::Provider(ProviderError::ConnectionError("refused".to_string())).into();
    assert!(matches!(error, AppError::Summarize(_)));
}

#[test]
fn test_appError_fromAnyhow_shouldBecomeInternal() {
    let error: AppError = anyhow::anyhow!("boom").into();
    assert!(matches!(error, AppError::Internal(_)));
    assert!(error.to_string().contains("boom"));
}
