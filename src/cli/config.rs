use anyhow::{Context, Result};
use console::style;
use ofstedready_core::config::{ConfigManager, mask_api_key};

/// Handle the config command
pub fn handle_config_command(manager: &ConfigManager) -> Result<()> {
    let source = manager
        .config_path()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "built-in defaults".to_string());
    println!("{} {}", style("Configuration from").blue().bold(), source);

    let mut config = manager.config().clone();
    let resolved_key = config.resolve_api_key();
    config.api.api_key = config.api.api_key.as_deref().map(mask_api_key);

    let rendered =
        toml::to_string_pretty(&config).context("Failed to serialize configuration")?;
    println!("\n{rendered}");

    match resolved_key {
        Some(key) => println!("API key: {}", style(mask_api_key(&key)).green()),
        None => println!(
            "API key: {} (set {} or GOOGLE_API_KEY)",
            style("not configured").red(),
            config.api.api_key_env
        ),
    }
    Ok(())
}
