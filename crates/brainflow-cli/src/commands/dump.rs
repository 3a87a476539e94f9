//! Brain dump command: extract, classify, optionally save.

use clap::Args;
use std::path::PathBuf;

use brainflow_core::{
    process_brain_dump, BrainDumpItem, BrainDumpSummary, Config, EnergyCategory,
    EnergyClassifier, Inbox, TaskExtractor,
};

#[derive(Args)]
pub struct DumpArgs {
    /// Brain dump text (reads stdin when omitted)
    pub text: Option<String>,
    /// Read the brain dump from a file
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
    /// Append the items to the inbox
    #[arg(long)]
    pub save: bool,
}

pub fn run(args: DumpArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let text = super::read_input(args.text, args.file)?;
    let extractor = TaskExtractor::with_config(config.extractor.clone());
    let items = process_brain_dump(&text, &extractor, &EnergyClassifier::new());

    if args.json || config.output.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        print_items(&items);
        let summary = BrainDumpSummary::from_items(&items);
        println!("\n{}", format_summary(&summary));
    }

    if args.save && !items.is_empty() {
        let mut inbox = Inbox::open()?;
        let count = items.len();
        tracing::debug!(count, existing = inbox.len(), "appending to inbox");
        inbox.append(items);
        inbox.save()?;
        eprintln!("Saved {count} item(s) to {}", inbox.path().display());
    }
    Ok(())
}

/// One line per item: `[CATEGORY] text (confidence)`.
pub fn print_items(items: &[BrainDumpItem]) {
    if items.is_empty() {
        println!("No tasks found.");
        return;
    }
    for item in items {
        match (&item.category, &item.error) {
            (Some(category), _) => {
                let confidence = match (item.overridden, item.confidence) {
                    (true, _) => "manual".to_string(),
                    (false, Some(c)) => c.to_string(),
                    (false, None) => "-".to_string(),
                };
                println!(
                    "{}  [{:<6}] {} ({})",
                    super::short_id(&item.id),
                    category.as_str(),
                    item.text,
                    confidence
                );
            }
            (None, Some(err)) => {
                println!("{}  [  ??  ] {} ({})", super::short_id(&item.id), item.text, err);
            }
            (None, None) => println!("{}  [  ??  ] {}", super::short_id(&item.id), item.text),
        }
    }
}

pub fn format_summary(summary: &BrainDumpSummary) -> String {
    let counts: Vec<String> = EnergyCategory::ALL
        .iter()
        .map(|c| {
            let n = summary.by_category.get(c.as_str()).copied().unwrap_or(0);
            format!("{} {}", c.as_str(), n)
        })
        .collect();
    format!("{} task(s): {}", summary.total, counts.join(", "))
}
