use super::{RequestArgs, build_request};
use anyhow::Result;
use ofstedready_core::config::OfstedReadyConfig;
use ofstedready_core::prompts::PromptBuilder;

/// Handle the prompt command: print the prompt without sending it
pub fn handle_prompt_command(config: &OfstedReadyConfig, args: &RequestArgs) -> Result<()> {
    let request = build_request(args)?;
    let prompt = PromptBuilder::new().build(&request, &config.school);
    println!("{prompt}");
    Ok(())
}
