use anyhow::Result;
use ofstedready_core::config::api_keys::resolve_api_key_with;
use ofstedready_core::config::{ConfigManager, OfstedReadyConfig};
use ofstedready_core::gemini::{HarmBlockThreshold, HarmCategory};
use ofstedready_core::rate_limiter::RateLimiter;
use ofstedready_core::types::SchoolType;
use std::fs;
use tempfile::TempDir;

#[test]
fn defaults_match_documented_values() {
    let config = OfstedReadyConfig::default();
    assert_eq!(config.api.model, "gemini-1.5-flash");
    assert_eq!(config.api.api_key_env, "GEMINI_API_KEY");
    assert_eq!(config.api.request_timeout_secs, 60);
    assert_eq!(config.api.max_redirects, 5);
    assert_eq!(config.generation.temperature, 0.3);
    assert_eq!(config.generation.top_p, 0.9);
    assert_eq!(config.generation.safety_threshold, HarmBlockThreshold::BlockOnlyHigh);
    assert_eq!(config.generation.safety_categories.len(), 4);
    assert_eq!(config.school.name, "[School Name]");
    assert_eq!(config.school.headteacher, "[Headteacher Name]");
    assert_eq!(config.school.age_range, "4-11");
    assert_eq!(config.rate_limit.requests_per_window, 15);
    assert_eq!(config.rate_limit.window_secs, 60);
}

#[test]
fn partial_file_fills_in_defaults() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("ofstedready.toml");
    fs::write(
        &path,
        r#"
[school]
name = "St Mary's C of E Primary"
school_type = "all_through"

[generation]
safety_threshold = "BLOCK_MEDIUM_AND_ABOVE"
safety_categories = ["HARM_CATEGORY_HARASSMENT"]
"#,
    )?;

    let manager = ConfigManager::load_from_file(&path)?;
    let config = manager.config();
    assert_eq!(config.school.name, "St Mary's C of E Primary");
    assert_eq!(config.school.school_type, SchoolType::AllThrough);
    assert_eq!(config.school.headteacher, "[Headteacher Name]");
    assert_eq!(config.api.model, "gemini-1.5-flash");
    assert_eq!(
        config.generation.safety_settings().len(),
        1
    );
    assert_eq!(
        config.generation.safety_categories,
        vec![HarmCategory::Harassment]
    );
    assert_eq!(
        config.generation.safety_threshold,
        HarmBlockThreshold::BlockMediumAndAbove
    );
    Ok(())
}

#[test]
fn sample_config_round_trips() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join(".ofstedready").join("ofstedready.toml");
    OfstedReadyConfig::create_sample_config(&path)?;

    let manager = ConfigManager::load_from_workspace(dir.path())?;
    assert_eq!(manager.config(), &OfstedReadyConfig::default());
    assert_eq!(manager.config_path(), Some(path.as_path()));
    Ok(())
}

#[test]
fn malformed_file_is_an_error() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("ofstedready.toml");
    fs::write(&path, "[school\nname = ")?;

    let error = ConfigManager::load_from_file(&path).unwrap_err();
    assert!(error.to_string().contains("Failed to parse config file"));
    Ok(())
}

#[test]
fn environment_key_wins_over_file_key() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("ofstedready.toml");
    fs::write(
        &path,
        "[api]\napi_key = \"file-key\"\napi_key_env = \"OFSTEDREADY_TEST_KEY\"\n",
    )?;
    let config = ConfigManager::load_from_file(&path)?.config().clone();
    let sources = config.api_key_sources();

    let from_env = resolve_api_key_with(&sources, |name| {
        (name == "OFSTEDREADY_TEST_KEY").then(|| "env-key".to_string())
    });
    assert_eq!(from_env.as_deref(), Some("env-key"));

    let from_file = resolve_api_key_with(&sources, |_| None);
    assert_eq!(from_file.as_deref(), Some("file-key"));
    Ok(())
}

#[test]
fn rate_limit_section_configures_limiter() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("ofstedready.toml");
    fs::write(&path, "[rate_limit]\nrequests_per_window = 2\nwindow_secs = 30\n")?;
    let config = ConfigManager::load_from_file(&path)?.config().clone();

    let limiter = RateLimiter::from_config(&config.rate_limit).unwrap();
    assert_eq!(limiter.requests_per_window(), 2);
    assert!(limiter.check("head").is_ok());
    assert!(limiter.check("head").is_ok());
    let error = limiter.check("head").unwrap_err();
    assert_eq!(
        error.to_string(),
        "You have exceeded the maximum number of requests (2 per 30 seconds). Please try again later."
    );
    Ok(())
}
