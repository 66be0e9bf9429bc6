use super::{GenerateArgs, build_request};
use anyhow::{Context, Result, anyhow};
use chrono::{Local, NaiveDate};
use console::style;
use ofstedready_core::catalog;
use ofstedready_core::config::OfstedReadyConfig;
use ofstedready_core::config::constants::{defaults, models};
use ofstedready_core::rate_limiter::RateLimiter;
use ofstedready_core::{ContentGenerator, GenerationErrorKind, GenerationRequest};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Handle the generate command
pub async fn handle_generate_command(
    config: &OfstedReadyConfig,
    workspace: &Path,
    args: &GenerateArgs,
) -> Result<()> {
    let request = build_request(&args.request)?;

    enforce_rate_limit(config, workspace, &args.user)?;

    let model = config.api.model.as_str();
    if !models::google::SUPPORTED_MODELS.contains(&model) {
        warn!(model, "Model is not one of the known Gemini models; the request may fail");
    }

    let generator = ContentGenerator::from_config(config)?;
    let spec = catalog::lookup(&request.content_type_id);
    eprintln!(
        "{} {} ({}, {})",
        style("Generating").blue().bold(),
        spec.title,
        request.output_format,
        request.detail_level
    );

    let content = match generator.generate(&request, &config.school).await {
        Ok(content) => content,
        Err(error) => {
            if error.kind() == GenerationErrorKind::MissingApiKey {
                eprintln!(
                    "{}",
                    style(missing_key_hint(&config.api.api_key_env)).dim()
                );
            }
            if error.is_retryable() {
                eprintln!("{}", style("This failure is usually temporary; try again shortly.").dim());
            }
            return Err(anyhow!(error)).context("Content generation failed");
        }
    };

    let today = Local::now().date_naive();
    let rendered = if args.json {
        let record = json!({
            "content_type": request.content_type_id,
            "title": spec.title,
            "output_format": request.output_format,
            "detail_level": request.detail_level,
            "school": config.school.name,
            "generated_on": today.to_string(),
            "content": content,
        });
        serde_json::to_string_pretty(&record).context("Failed to serialize generated content")?
    } else {
        content
    };

    let destination = match (&args.output, args.save) {
        (Some(path), _) => Some(path.clone()),
        (None, true) => Some(workspace.join(default_output_name(&request, today, args.json))),
        (None, false) => None,
    };

    match destination {
        Some(path) => {
            fs::write(&path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "Saved generated content");
            eprintln!("{} {}", style("Saved").green().bold(), path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn missing_key_hint(api_key_env: &str) -> String {
    format!("Export {api_key_env} (or GOOGLE_API_KEY), or set api_key under [api] in ofstedready.toml.")
}

/// Count this run against `user`'s window, which persists in the workspace
fn enforce_rate_limit(config: &OfstedReadyConfig, workspace: &Path, user: &str) -> Result<()> {
    let Some(limiter) = RateLimiter::from_config(&config.rate_limit) else {
        return Ok(());
    };

    let state_path = workspace
        .join(defaults::CONFIG_DIR_NAME)
        .join(defaults::RATE_LIMIT_STATE_FILE);
    if let Err(error) = limiter.load_state(&state_path) {
        warn!("Ignoring unreadable rate limit state: {error:#}");
    }

    let admitted = limiter.check(user);
    limiter.save_state(&state_path)?;
    admitted.map_err(|e| anyhow!(e))
}

/// `<content-type>-<date>.<ext>`, e.g. `safeguarding-2024-09-01.txt`
fn default_output_name(request: &GenerationRequest, date: NaiveDate, json: bool) -> PathBuf {
    let extension = if json { "json" } else { "txt" };
    PathBuf::from(format!(
        "{}-{}.{extension}",
        request.content_type_id,
        date.format("%Y-%m-%d")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_holds_across_runs() {
        let workspace = tempfile::tempdir().unwrap();
        let mut config = OfstedReadyConfig::default();
        config.rate_limit.requests_per_window = 2;

        enforce_rate_limit(&config, workspace.path(), "head").unwrap();
        enforce_rate_limit(&config, workspace.path(), "head").unwrap();
        let error = enforce_rate_limit(&config, workspace.path(), "head").unwrap_err();
        assert!(error.to_string().contains("(2 per minute)"));

        enforce_rate_limit(&config, workspace.path(), "office").unwrap();
        assert!(
            workspace
                .path()
                .join(".ofstedready")
                .join("rate_limit.json")
                .exists()
        );
    }

    #[test]
    fn missing_key_hint_names_configured_variable() {
        let hint = missing_key_hint("SCHOOL_GEMINI_KEY");
        assert!(hint.starts_with("Export SCHOOL_GEMINI_KEY"));
    }

    #[test]
    fn disabled_rate_limit_writes_no_state() {
        let workspace = tempfile::tempdir().unwrap();
        let mut config = OfstedReadyConfig::default();
        config.rate_limit.enabled = false;
        config.rate_limit.requests_per_window = 0;

        enforce_rate_limit(&config, workspace.path(), "head").unwrap();
        assert!(!workspace.path().join(".ofstedready").exists());
    }

    #[test]
    fn default_output_name_carries_type_and_date() {
        let request = GenerationRequest::new("pupil_premium");
        let date = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        assert_eq!(
            default_output_name(&request, date, false),
            PathBuf::from("pupil_premium-2024-09-01.txt")
        );
        assert_eq!(
            default_output_name(&request, date, true),
            PathBuf::from("pupil_premium-2024-09-01.json")
        );
    }
}
