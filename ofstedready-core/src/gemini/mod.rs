//! Gemini API client
//!
//! Separates HTTP configuration, the transport seam, wire models and the
//! failure taxonomy.

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use client::{ClientConfig, GeminiClient};
pub use error::{GenerationError, GenerationErrorKind, TransportError};
pub use models::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    HarmBlockThreshold, HarmCategory, Part, SafetySetting,
};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
