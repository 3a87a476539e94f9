//! Task extraction command.

use clap::Args;
use std::path::PathBuf;

use brainflow_core::{Config, TaskExtractor};

#[derive(Args)]
pub struct ExtractArgs {
    /// Brain dump text (reads stdin when omitted)
    pub text: Option<String>,
    /// Read the brain dump from a file
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Output as a JSON array
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ExtractArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let text = super::read_input(args.text, args.file)?;
    let fragments = TaskExtractor::with_config(config.extractor.clone()).extract(&text);

    if args.json || config.output.json {
        println!("{}", serde_json::to_string_pretty(&fragments)?);
        return Ok(());
    }

    if fragments.is_empty() {
        println!("No tasks found.");
    }
    for (i, fragment) in fragments.iter().enumerate() {
        println!("{}. {}", i + 1, fragment);
    }
    Ok(())
}
