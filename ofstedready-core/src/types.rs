//! Common types shared by the catalog, prompt builder and generation client

use crate::config::constants::{defaults, tokens};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Presentation style requested for the generated document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Detailed,
    BulletPoints,
    Structured,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [Self::Detailed, Self::BulletPoints, Self::Structured];

    /// Identifier used on the wire and in configuration
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Detailed => "detailed",
            Self::BulletPoints => "bullet_points",
            Self::Structured => "structured",
        }
    }

    /// Parse a format from user input, accepting `bullet-points` as an alias
    pub fn from_str(value: &str) -> Option<Self> {
        let normalized = value.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|format| normalized.eq_ignore_ascii_case(format.as_str()))
    }

    pub fn allowed_values() -> &'static [&'static str] {
        &["detailed", "bullet_points", "structured"]
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Detailed
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verbosity tier; drives both the prompt wording and the output token budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailLevel {
    Basic,
    Standard,
    Comprehensive,
}

impl DetailLevel {
    pub const ALL: [DetailLevel; 3] = [Self::Basic, Self::Standard, Self::Comprehensive];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Standard => "standard",
            Self::Comprehensive => "comprehensive",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|level| normalized.eq_ignore_ascii_case(level.as_str()))
    }

    pub fn allowed_values() -> &'static [&'static str] {
        &["basic", "standard", "comprehensive"]
    }

    /// Upper bound on generated tokens for this tier
    pub fn max_output_tokens(self) -> u32 {
        match self {
            Self::Basic => tokens::BASIC_MAX_OUTPUT_TOKENS,
            Self::Standard => tokens::STANDARD_MAX_OUTPUT_TOKENS,
            Self::Comprehensive => tokens::COMPREHENSIVE_MAX_OUTPUT_TOKENS,
        }
    }
}

impl Default for DetailLevel {
    fn default() -> Self {
        Self::Standard
    }
}

impl fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token budget for a raw detail-level string.
///
/// Unrecognised values get the standard budget.
pub fn max_output_tokens(raw_level: &str) -> u32 {
    DetailLevel::from_str(raw_level)
        .map(DetailLevel::max_output_tokens)
        .unwrap_or(tokens::DEFAULT_MAX_OUTPUT_TOKENS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchoolType {
    Primary,
    Secondary,
    Special,
    Nursery,
    AllThrough,
}

impl SchoolType {
    pub const ALL: [SchoolType; 5] = [
        Self::Primary,
        Self::Secondary,
        Self::Special,
        Self::Nursery,
        Self::AllThrough,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Special => "special",
            Self::Nursery => "nursery",
            Self::AllThrough => "all_through",
        }
    }

    /// Wording used inside prompts ("a UK all-through school")
    pub fn label(self) -> &'static str {
        match self {
            Self::AllThrough => "all-through",
            other => other.as_str(),
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        let normalized = value.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| normalized.eq_ignore_ascii_case(kind.as_str()))
    }
}

impl Default for SchoolType {
    fn default() -> Self {
        Self::Primary
    }
}

impl fmt::Display for SchoolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// School details interpolated into every prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolProfile {
    #[serde(default = "default_school_name")]
    pub name: String,

    #[serde(default = "default_headteacher")]
    pub headteacher: String,

    #[serde(default)]
    pub school_type: SchoolType,

    /// Free text, e.g. "4-11" or "11-18"
    #[serde(default = "default_age_range")]
    pub age_range: String,
}

fn default_school_name() -> String {
    defaults::SCHOOL_NAME.to_string()
}
fn default_headteacher() -> String {
    defaults::HEADTEACHER_NAME.to_string()
}
fn default_age_range() -> String {
    defaults::AGE_RANGE.to_string()
}

impl Default for SchoolProfile {
    fn default() -> Self {
        Self {
            name: default_school_name(),
            headteacher: default_headteacher(),
            school_type: SchoolType::default(),
            age_range: default_age_range(),
        }
    }
}

/// What the caller wants generated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub content_type_id: String,
    #[serde(default)]
    pub output_format: OutputFormat,
    #[serde(default)]
    pub detail_level: DetailLevel,
    #[serde(default)]
    pub additional_context: Option<String>,
}

impl GenerationRequest {
    pub fn new(content_type_id: impl Into<String>) -> Self {
        Self {
            content_type_id: content_type_id.into(),
            output_format: OutputFormat::default(),
            detail_level: DetailLevel::default(),
            additional_context: None,
        }
    }

    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    pub fn with_detail_level(mut self, detail_level: DetailLevel) -> Self {
        self.detail_level = detail_level;
        self
    }

    pub fn with_additional_context(mut self, context: impl Into<String>) -> Self {
        self.additional_context = Some(context.into());
        self
    }

    /// Additional context, exactly as supplied, unless it is empty
    pub fn context(&self) -> Option<&str> {
        self.additional_context
            .as_deref()
            .filter(|context| !context.is_empty())
    }
}
