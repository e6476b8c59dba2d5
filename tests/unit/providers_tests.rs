/*!
 * Tests for model backend request builders and clients
 */

use ytswai::providers::GenerationRequest;
use ytswai::providers::ollama::Ollama;

#[test]
fn test_generationRequest_new_shouldCreateWithModelAndPrompt() {
    let request = GenerationRequest::new("deepscaler", "Hello, world!");
    assert_eq!(request.model, "deepscaler");
    assert_eq!(request.prompt, "Hello, world!");
    assert_eq!(request.temperature, None);
}

#[test]
fn test_generationRequest_temperature_shouldSetTemperature() {
    let request = GenerationRequest::new("deepscaler", "Hello").temperature(0.1);
    assert_eq!(request.temperature, Some(0.1));
}

#[test]
fn test_generationRequest_clone_shouldPreserveFields() {
    let request = GenerationRequest::new("deepscaler", "Hello").temperature(0.3);
    let cloned = request.clone();
    assert_eq!(cloned.model, request.model);
    assert_eq!(cloned.prompt, request.prompt);
    assert_eq!(cloned.temperature, request.temperature);
}

#[test]
fn test_ollama_fromUrl_shouldKeepBaseUrl() {
    let client = Ollama::from_url("http://localhost:11434", 120);
    assert_eq!(client.base_url(), "http://localhost:11434");
}
