//! Command-line interface module
//!
//! Argument parsing lives in [`args`]; each command has its own handler.

pub mod args;
pub mod config;
pub mod generate;
pub mod init;
pub mod list;
pub mod prompt;

pub use args::*;
pub use config::handle_config_command;
pub use generate::handle_generate_command;
pub use init::handle_init_command;
pub use list::handle_list_command;
pub use prompt::handle_prompt_command;

use anyhow::{Result, bail};
use ofstedready_core::catalog;
use ofstedready_core::types::{DetailLevel, GenerationRequest, OutputFormat};

/// Validate CLI request options and turn them into a [`GenerationRequest`]
pub fn build_request(args: &RequestArgs) -> Result<GenerationRequest> {
    let content_type = args.content_type.trim();
    if !args.allow_fallback && !catalog::contains(content_type) {
        bail!(
            "Unknown content type '{content_type}'. Run `ofstedready list` to see valid ids, \
             or pass --allow-fallback to use the {} template.",
            catalog::DEFAULT_CONTENT_TYPE
        );
    }

    let Some(output_format) = OutputFormat::from_str(&args.format) else {
        bail!(
            "Invalid format '{}'. Expected one of: {}",
            args.format,
            OutputFormat::allowed_values().join(", ")
        );
    };
    let Some(detail_level) = DetailLevel::from_str(&args.detail) else {
        bail!(
            "Invalid detail level '{}'. Expected one of: {}",
            args.detail,
            DetailLevel::allowed_values().join(", ")
        );
    };

    let mut request = GenerationRequest::new(content_type)
        .with_output_format(output_format)
        .with_detail_level(detail_level);
    // blank --context values are treated as absent on the command line
    if let Some(context) = args.context.as_deref().filter(|c| !c.trim().is_empty()) {
        request = request.with_additional_context(context);
    }
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(content_type: &str) -> RequestArgs {
        RequestArgs {
            content_type: content_type.to_string(),
            format: "bullet-points".to_string(),
            detail: "basic".to_string(),
            context: Some("Two-form entry".to_string()),
            allow_fallback: false,
        }
    }

    #[test]
    fn builds_request_from_valid_options() {
        let request = build_request(&args("safeguarding")).unwrap();
        assert_eq!(request.content_type_id, "safeguarding");
        assert_eq!(request.output_format, OutputFormat::BulletPoints);
        assert_eq!(request.detail_level, DetailLevel::Basic);
        assert_eq!(request.context(), Some("Two-form entry"));
    }

    #[test]
    fn rejects_unknown_content_type_without_fallback() {
        let error = build_request(&args("nope")).unwrap_err();
        assert!(error.to_string().contains("Unknown content type 'nope'"));

        let mut permissive = args("nope");
        permissive.allow_fallback = true;
        assert!(build_request(&permissive).is_ok());
    }

    #[test]
    fn blank_context_flag_is_dropped() {
        let mut blank = args("ethos");
        blank.context = Some("   ".to_string());
        assert_eq!(build_request(&blank).unwrap().additional_context, None);
    }

    #[test]
    fn rejects_unknown_detail_level() {
        let mut bad = args("ethos");
        bad.detail = "exhaustive".to_string();
        let error = build_request(&bad).unwrap_err();
        assert!(error.to_string().contains("basic, standard, comprehensive"));
    }
}
