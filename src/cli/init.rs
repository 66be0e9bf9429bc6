use anyhow::{Context, Result, bail};
use console::style;
use ofstedready_core::config::OfstedReadyConfig;
use ofstedready_core::config::constants::defaults;
use std::path::Path;

/// Handle the init command
pub fn handle_init_command(workspace: &Path, force: bool) -> Result<()> {
    let output = workspace.join(defaults::CONFIG_FILE_NAME);
    if output.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite it.",
            output.display()
        );
    }

    OfstedReadyConfig::create_sample_config(&output)
        .with_context(|| format!("Failed to initialize {}", output.display()))?;

    println!(
        "{} {}",
        style("Created").green().bold(),
        output.display()
    );
    println!(
        "Set {} in your environment or .env file, then edit the [school] section.",
        defaults::DEFAULT_API_KEY_ENV
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ofstedready_core::config::ConfigManager;

    #[test]
    fn writes_loadable_config_and_refuses_overwrite() {
        let workspace = tempfile::tempdir().unwrap();
        handle_init_command(workspace.path(), false).unwrap();

        let manager = ConfigManager::load_from_workspace(workspace.path()).unwrap();
        assert_eq!(manager.config(), &OfstedReadyConfig::default());

        assert!(handle_init_command(workspace.path(), false).is_err());
        assert!(handle_init_command(workspace.path(), true).is_ok());
    }
}
