use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use brainflow_core::Config;

mod commands;

#[derive(Parser)]
#[command(name = "brainflow", version, about = "Brainflow CLI")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a brain dump into task fragments
    Extract(commands::extract::ExtractArgs),
    /// Classify one task by energy category
    Classify(commands::classify::ClassifyArgs),
    /// Extract and classify a brain dump
    Dump(commands::dump::DumpArgs),
    /// Saved brain dump items
    Inbox {
        #[command(subcommand)]
        action: commands::inbox::InboxAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

fn init_logging(verbose: u8, configured_level: &str) {
    let fallback_level = match verbose {
        0 => configured_level,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("BRAINFLOW_LOG")
        .or_else(|_| EnvFilter::try_new(fallback_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    let config = Config::load_or_default();
    init_logging(cli.verbose, &config.logging.level);

    let result = match cli.command {
        Commands::Extract(args) => commands::extract::run(args, &config),
        Commands::Classify(args) => commands::classify::run(args, &config),
        Commands::Dump(args) => commands::dump::run(args, &config),
        Commands::Inbox { action } => commands::inbox::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "brainflow", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
