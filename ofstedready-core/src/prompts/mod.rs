//! Prompt construction for generation requests

pub mod builder;
pub mod templates;

pub use builder::{PromptBuilder, build_prompt};
pub use templates::{ADDITIONAL_CONTEXT_MARKER, PromptTemplates};
