//! Energy classification command.

use clap::Args;

use brainflow_core::{ClassificationOutcome, Config, EnergyCategory, EnergyClassifier};

#[derive(Args)]
pub struct ClassifyArgs {
    /// Task description (multiple words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
    /// Show per-category scores and detected cues
    #[arg(long)]
    pub explain: bool,
}

pub fn run(args: ClassifyArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let text = args.text.join(" ");
    let json = args.json || config.output.json;
    let explain = args.explain || config.output.show_scores;

    let detail = match EnergyClassifier::new().classify_detailed(&text) {
        Ok(detail) => detail,
        Err(err) => {
            if json {
                let outcome = ClassificationOutcome::Rejected {
                    error: err.to_string(),
                };
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            }
            return Err(err.into());
        }
    };

    if json {
        let out = if explain {
            serde_json::to_string_pretty(&detail)?
        } else {
            serde_json::to_string_pretty(&detail.classification)?
        };
        println!("{out}");
        return Ok(());
    }

    let result = &detail.classification;
    println!("Category:    {} ({})", result.category, result.category.label());
    println!("Confidence:  {}", result.confidence);
    println!("{}", result.explanation);

    if explain {
        println!("\nScores:");
        for category in EnergyCategory::ALL {
            println!("  {:<7} {}", category.as_str(), detail.scores.get(category));
        }
        println!("Complexity:  {:?}", detail.complexity);
        match detail.time_estimate {
            Some(time) => println!("Time:        {time:?}"),
            None => println!("Time:        -"),
        }
    }
    Ok(())
}
