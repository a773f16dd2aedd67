use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use triage::config::Config;
use triage::evaluation::ModelEvaluation;
use triage::output::terminal;
use triage::scoring::classifier::TicketClassifier;

/// Triage: customer support ticket classifier demo.
///
/// Classifies free-form ticket text into one of five categories and shows
/// the full probability breakdown, alongside the demo model's canned
/// evaluation numbers.
#[derive(Parser)]
#[command(name = "triage", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a ticket (pass text as an argument or pipe it on stdin)
    Classify {
        /// The ticket text; omit to read it from stdin
        text: Option<String>,

        /// Seed the uncertainty perturbation for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Print the result as JSON instead of the bar chart
        #[arg(long)]
        json: bool,
    },

    /// Classify the built-in example tickets
    Examples {
        /// Seed the uncertainty perturbation for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the model evaluation (accuracy, confusion matrix, class report)
    Report {
        /// Print the evaluation as JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Show the active keyword table
    Keywords {
        /// Print the table as JSON instead of the formatted list
        #[arg(long)]
        json: bool,
    },
}

/// The example tickets offered by the demo, one per category.
const EXAMPLE_TICKETS: [&str; 5] = [
    "I'm having an issue with my product. The software keeps crashing every time I try to open it. Please help me fix this problem.",
    "I would like to request a refund for my recent purchase. The product didn't meet my expectations.",
    "Can you help me understand my recent billing statement? I see a charge I don't recognize.",
    "I want to cancel my subscription effective immediately. Please process this cancellation request.",
    "Does your product support integration with third-party applications? I need more information about features.",
];

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("triage=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Classify { text, seed, json } => {
            let text = match text {
                Some(text) => text,
                None => std::io::read_to_string(std::io::stdin())?,
            };

            // Blank tickets are a caller-side mistake, not an engine case.
            // Reject them before invoking the classifier.
            if text.trim().is_empty() {
                anyhow::bail!("Ticket text is empty. Pass some text or pipe it on stdin.");
            }

            let classifier = load_classifier(&config)?;
            let mut rng = config.rng(seed);
            let result = classifier.classify_with(&text, &mut rng);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                terminal::display_classification(&text, &result);
            }
        }

        Commands::Examples { seed } => {
            let classifier = load_classifier(&config)?;
            let mut rng = config.rng(seed);

            println!(
                "\n{}",
                format!("=== Example Tickets ({}) ===", EXAMPLE_TICKETS.len()).bold()
            );

            for ticket in EXAMPLE_TICKETS {
                let result = classifier.classify_with(ticket, &mut rng);
                terminal::display_classification(ticket, &result);
            }
        }

        Commands::Report { json } => {
            let eval = ModelEvaluation::reference();
            if json {
                println!("{}", serde_json::to_string_pretty(&eval)?);
            } else {
                terminal::display_evaluation(&eval);
            }
        }

        Commands::Keywords { json } => {
            let classifier = load_classifier(&config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(classifier.table())?);
            } else {
                terminal::display_keyword_table(classifier.table());
            }
        }
    }

    Ok(())
}

/// Build the classifier from the configured keyword table.
fn load_classifier(config: &Config) -> Result<TicketClassifier> {
    let table = config.keyword_table()?;
    if let Some(path) = &config.keywords_path {
        info!(path = %path.display(), "Loaded keyword table override");
    }
    Ok(TicketClassifier::new(table))
}
