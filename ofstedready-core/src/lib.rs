//! # ofstedready-core - Runtime for OfstedReady
//!
//! `ofstedready-core` turns a school's profile and a statutory content type
//! (safeguarding policy, admission arrangements, pupil premium strategy, ...)
//! into a prompt for the Gemini `generateContent` API and returns the generated
//! draft for staff review.
//!
//! ## Highlights
//!
//! - **Content Catalog**: 26 content types from the "What maintained schools
//!   must publish online" guidance, each carrying its required sections,
//!   gov.uk requirement, quality criteria and statutory reference.
//! - **Prompt Builder**: one shared template keeps every content type framed
//!   the same way; the catalog only supplies the variable parts.
//! - **Generation Client**: a single-shot Gemini request with configurable
//!   sampling and safety thresholds and a typed failure taxonomy.
//! - **Configuration-First**: API, generation and school settings come from
//!   `ofstedready.toml`, with the API key read from the environment.
//!
//! ## Quickstart
//!
//! ```rust,ignore
//! use ofstedready_core::{ConfigManager, ContentGenerator, GenerationRequest};
//! use ofstedready_core::types::{DetailLevel, OutputFormat};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let manager = ConfigManager::load()?;
//!     let generator = ContentGenerator::from_config(manager.config())?;
//!
//!     let request = GenerationRequest::new("safeguarding")
//!         .with_output_format(OutputFormat::Structured)
//!         .with_detail_level(DetailLevel::Comprehensive);
//!
//!     let text = generator.generate(&request, &manager.config().school).await?;
//!     println!("{text}");
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod gemini;
pub mod generator;
pub mod prompts;
pub mod rate_limiter;
pub mod types;

pub use catalog::{ContentTypeSpec, lookup, statutory_reference_for};
pub use config::{ConfigManager, OfstedReadyConfig};
pub use gemini::{GeminiClient, GenerationError, GenerationErrorKind, HttpTransport};
pub use generator::{ContentGenerator, GenerationResult};
pub use prompts::PromptBuilder;
pub use rate_limiter::{RateLimitExceeded, RateLimiter};
pub use types::{DetailLevel, GenerationRequest, OutputFormat, SchoolProfile, SchoolType};
