//! Shared test helpers

#![allow(dead_code)]

use async_trait::async_trait;
use ofstedready_core::gemini::{GenerateContentRequest, HttpResponse, HttpTransport, TransportError};
use parking_lot::Mutex;
use std::sync::Arc;

/// Transport that replays one scripted outcome and records what it was sent
pub struct MockTransport {
    outcome: Result<HttpResponse, TransportError>,
    calls: Mutex<Vec<(String, GenerateContentRequest)>>,
}

impl MockTransport {
    pub fn responding(status: u16, body: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(HttpResponse::new(status, body)),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(TransportError::new(message)),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn last_call(&self) -> Option<(String, GenerateContentRequest)> {
        self.calls.lock().last().cloned()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn post_json(
        &self,
        url: &str,
        request: &GenerateContentRequest,
    ) -> Result<HttpResponse, TransportError> {
        self.calls.lock().push((url.to_string(), request.clone()));
        self.outcome.clone()
    }
}

pub fn text_response(text: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
    .to_string()
}
