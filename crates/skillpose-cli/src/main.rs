//! skillpose CLI — classify calisthenics skill poses from landmark files.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use skillpose::{ClassifyConfig, Landmark, PoseClassifier, PoseLabel};

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "skillpose")]
#[command(about = "Classify calisthenics skill poses from MediaPipe Pose landmarks (33 points)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify one landmark frame.
    Classify(CliClassifyArgs),

    /// Print the recognized pose labels in tie-break order.
    Labels,
}

#[derive(Debug, Clone, Args)]
struct CliClassifyArgs {
    /// Path to a JSON array of 33 landmark objects {x, y, z, visibility}.
    #[arg(long)]
    landmarks: PathBuf,

    /// Path to write the classification result (JSON). Prints to stdout
    /// when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Visibility threshold for the low-visibility advisory.
    #[arg(long, default_value = "0.4")]
    min_visibility: f64,

    /// Omit the per-pose score map from the output.
    #[arg(long)]
    no_scores: bool,
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Classify(args) => run_classify(args),
        Commands::Labels => {
            for label in PoseLabel::ALL {
                println!("{}", label);
            }
            Ok(())
        }
    }
}

fn run_classify(args: CliClassifyArgs) -> CliResult<()> {
    tracing::info!("Loading landmarks: {}", args.landmarks.display());
    let text = std::fs::read_to_string(&args.landmarks)?;
    let landmarks: Vec<Landmark> = serde_json::from_str(&text)?;

    let classifier = PoseClassifier::with_config(ClassifyConfig {
        min_visibility: args.min_visibility,
    });
    let result = classifier.classify(&landmarks)?;

    tracing::info!("Best pose: {} ({:.2})", result.label, result.confidence);
    for warning in &result.warnings {
        tracing::warn!("{}", warning);
    }

    let mut json = serde_json::to_value(&result)?;
    if args.no_scores {
        if let Some(obj) = json.as_object_mut() {
            obj.remove("scores");
        }
    }
    let rendered = serde_json::to_string_pretty(&json)?;

    match args.out {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            tracing::info!("Result written to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
