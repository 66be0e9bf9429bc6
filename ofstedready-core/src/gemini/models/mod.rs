pub mod request;
pub mod response;

pub use request::{
    GenerateContentRequest, GenerationConfig, HarmBlockThreshold, HarmCategory, SafetySetting,
};
pub use response::{ApiErrorBody, Candidate, GenerateContentResponse};

use serde::{Deserialize, Serialize};

/// A turn of content; requests carry exactly one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part::text(text)],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}
