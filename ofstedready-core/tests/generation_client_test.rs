mod common;

use common::{MockTransport, text_response};
use ofstedready_core::config::GenerationSettings;
use ofstedready_core::gemini::{GeminiClient, GenerationError, GenerationErrorKind};
use ofstedready_core::types::{DetailLevel, GenerationRequest, SchoolProfile};
use ofstedready_core::ContentGenerator;
use serde_json::json;
use std::sync::Arc;

fn client(transport: Arc<MockTransport>) -> GeminiClient {
    GeminiClient::with_transport("test-key".to_string(), "gemini-1.5-flash".to_string(), transport)
}

#[tokio::test]
async fn returns_text_of_first_candidate() {
    let transport = MockTransport::responding(200, text_response("Hello"));
    let result = client(transport.clone())
        .generate("Write a policy", DetailLevel::Standard)
        .await;
    assert_eq!(result, Ok("Hello".to_string()));
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn non_success_status_carries_service_message() {
    let body = json!({ "error": { "code": 403, "message": "blocked" } }).to_string();
    let transport = MockTransport::responding(403, body);
    let error = client(transport)
        .generate("Write a policy", DetailLevel::Basic)
        .await
        .unwrap_err();

    assert_eq!(
        error,
        GenerationError::Api {
            status: 403,
            message: "blocked".to_string()
        }
    );
    assert_eq!(error.kind(), GenerationErrorKind::Api);
}

#[tokio::test]
async fn string_error_payload_is_used_verbatim() {
    let body = json!({ "error": "quota exhausted" }).to_string();
    let transport = MockTransport::responding(429, body);
    let error = client(transport)
        .generate("Write a policy", DetailLevel::Basic)
        .await
        .unwrap_err();

    assert_eq!(error.message(), "quota exhausted");
    assert!(error.is_retryable());
}

#[tokio::test]
async fn transport_failure_is_reported_as_transport() {
    let transport = MockTransport::failing("connection refused");
    let error = client(transport)
        .generate("Write a policy", DetailLevel::Standard)
        .await
        .unwrap_err();

    assert_eq!(error, GenerationError::Transport("connection refused".to_string()));
    assert_eq!(error.to_string(), "API request failed: connection refused");
}

#[tokio::test]
async fn success_without_text_is_invalid_response() {
    let body = json!({ "candidates": [{ "finishReason": "SAFETY" }] }).to_string();
    let transport = MockTransport::responding(200, body.clone());
    let error = client(transport)
        .generate("Write a policy", DetailLevel::Standard)
        .await
        .unwrap_err();

    assert_eq!(error, GenerationError::InvalidResponse(body));
}

#[tokio::test]
async fn unparseable_success_body_is_invalid_response() {
    let transport = MockTransport::responding(200, "not json");
    let error = client(transport)
        .generate("Write a policy", DetailLevel::Standard)
        .await
        .unwrap_err();

    assert_eq!(error.kind(), GenerationErrorKind::InvalidResponse);
    assert_eq!(error.message(), "not json");
}

#[tokio::test]
async fn request_body_has_expected_shape() {
    let transport = MockTransport::responding(200, text_response("ok"));
    client(transport.clone())
        .generate("Write a policy", DetailLevel::Comprehensive)
        .await
        .unwrap();

    let (url, request) = transport.last_call().unwrap();
    assert_eq!(
        url,
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent?key=test-key"
    );

    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body["contents"][0]["parts"][0]["text"], "Write a policy");
    assert_eq!(body["generationConfig"]["maxOutputTokens"], 3000);
    assert_eq!(body["generationConfig"]["temperature"], 0.3);
    assert_eq!(body["generationConfig"]["topP"], 0.9);
    assert_eq!(body["generationConfig"]["stopSequences"], json!([]));

    let safety = body["safetySettings"].as_array().unwrap();
    assert_eq!(safety.len(), 4);
    assert!(
        safety
            .iter()
            .all(|setting| setting["threshold"] == "BLOCK_ONLY_HIGH")
    );
    assert_eq!(safety[0]["category"], "HARM_CATEGORY_HARASSMENT");
}

#[tokio::test]
async fn detail_level_sets_output_budget() {
    for (detail, budget) in [
        (DetailLevel::Basic, 1000),
        (DetailLevel::Standard, 2000),
        (DetailLevel::Comprehensive, 3000),
    ] {
        let transport = MockTransport::responding(200, text_response("ok"));
        client(transport.clone()).generate("p", detail).await.unwrap();
        let (_, request) = transport.last_call().unwrap();
        assert_eq!(request.generation_config.max_output_tokens, budget);
    }
}

#[tokio::test]
async fn configured_settings_are_sent() {
    let transport = MockTransport::responding(200, text_response("ok"));
    let settings = GenerationSettings {
        temperature: 0.7,
        stop_sequences: vec!["END".to_string()],
        ..GenerationSettings::default()
    };
    client(transport.clone())
        .with_settings(settings)
        .generate("p", DetailLevel::Standard)
        .await
        .unwrap();

    let (_, request) = transport.last_call().unwrap();
    assert_eq!(request.generation_config.temperature, 0.7);
    assert_eq!(request.generation_config.stop_sequences, vec!["END".to_string()]);
}

#[tokio::test]
async fn generator_rejects_missing_key_without_network() {
    let transport = MockTransport::responding(200, text_response("unused"));
    let keyless = GeminiClient::with_transport(
        "   ".to_string(),
        "gemini-1.5-flash".to_string(),
        transport.clone(),
    );
    let generator = ContentGenerator::new(keyless);

    let result = generator
        .generate(&GenerationRequest::new("safeguarding"), &SchoolProfile::default())
        .await;
    assert_eq!(result, Err(GenerationError::MissingApiKey));
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn generator_sends_built_prompt() {
    let transport = MockTransport::responding(200, text_response("Draft policy"));
    let generator = ContentGenerator::new(client(transport.clone()));
    let request = GenerationRequest::new("complaints")
        .with_detail_level(DetailLevel::Basic)
        .with_additional_context("Federation of two schools");

    let text = generator
        .generate(&request, &SchoolProfile::default())
        .await
        .unwrap();
    assert_eq!(text, "Draft policy");

    let (_, sent) = transport.last_call().unwrap();
    let expected_prompt = generator.prompt_for(&request, &SchoolProfile::default());
    assert_eq!(sent.contents[0].parts[0].as_text(), Some(expected_prompt.as_str()));
    assert_eq!(sent.generation_config.max_output_tokens, 1000);
}
