//! Inbox commands for saved brain dump items.

use clap::Subcommand;

use brainflow_core::{BrainDumpItem, BrainDumpSummary, EnergyCategory, Inbox};

#[derive(Subcommand)]
pub enum InboxAction {
    /// List saved items
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Only show one category (DEEP, STEADY, LOW, NONE)
        #[arg(long)]
        category: Option<EnergyCategory>,
    },
    /// Override an item's category by hand
    Override {
        /// Item ID or unique prefix
        id: String,
        /// New category (DEEP, STEADY, LOW, NONE)
        category: EnergyCategory,
    },
    /// Remove an item
    Remove {
        /// Item ID or unique prefix
        id: String,
    },
    /// Remove all items
    Clear,
}

pub fn run(action: InboxAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut inbox = Inbox::open()?;
    match action {
        InboxAction::List { json, category } => {
            let items: Vec<BrainDumpItem> = match category {
                Some(category) => inbox.by_category(category).into_iter().cloned().collect(),
                None => inbox.items().to_vec(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                super::dump::print_items(&items);
                if !items.is_empty() {
                    let summary = BrainDumpSummary::from_items(&items);
                    println!("\n{}", super::dump::format_summary(&summary));
                }
            }
        }
        InboxAction::Override { id, category } => {
            let item = inbox.override_category(&id, category)?;
            println!("{} -> {}", super::short_id(&item.id), category);
            inbox.save()?;
        }
        InboxAction::Remove { id } => {
            let item = inbox.remove(&id)?;
            inbox.save()?;
            println!("Removed: {}", item.text);
        }
        InboxAction::Clear => {
            let count = inbox.clear();
            inbox.save()?;
            println!("Removed {count} item(s)");
        }
    }
    Ok(())
}
