use anyhow::{Context, Result};
use console::style;
use ofstedready_core::catalog;

/// Handle the list command
pub fn handle_list_command(json: bool) -> Result<()> {
    if json {
        let entries: Vec<_> = catalog::all().collect();
        let rendered = serde_json::to_string_pretty(&entries)
            .context("Failed to serialize content catalog")?;
        println!("{rendered}");
        return Ok(());
    }

    println!(
        "{}",
        style(format!("{} content types", catalog::len())).blue().bold()
    );
    let width = catalog::ids().map(str::len).max().unwrap_or(0);
    for spec in catalog::all() {
        println!(
            "  {:<width$}  {}",
            style(spec.id).cyan(),
            spec.title,
        );
        println!("  {:<width$}  {}", "", style(spec.statutory_reference).dim());
    }
    Ok(())
}
