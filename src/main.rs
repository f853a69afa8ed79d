use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use graylab::models::AppConfig;
use graylab::services::StudyPipeline;

#[derive(Parser)]
#[command(name = "graylab")]
#[command(about = "Gray-level reduction and edge study for sample photographs")]
struct Cli {
    /// Local photograph to study instead of downloading the configured sample
    #[arg(short, long, global = true)]
    image: Option<PathBuf>,

    /// Output directory (overrides the configured one)
    #[arg(short, long, global = true)]
    output_dir: Option<PathBuf>,

    /// Config file (YAML); the embedded default is used otherwise
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full study and assemble the combined contact sheet
    All,
    /// Save the original photograph (RGB)
    Original,
    /// Convert to grayscale and report the number of distinct gray levels
    Gray,
    /// Reduce gray levels over the configured (or given) series
    Levels {
        /// Level counts to study, e.g. -l 2 -l 16 (defaults to the configured series)
        #[arg(short, long)]
        levels: Vec<u16>,
    },
    /// Canny edge detection
    Edges {
        /// Low gradient threshold
        #[arg(long)]
        low: Option<f32>,

        /// High gradient threshold
        #[arg(long)]
        high: Option<f32>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "graylab=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref());
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }

    let pipeline = StudyPipeline::new(config)?;
    let photo = pipeline.acquire(cli.image.as_deref())?;

    let report = match cli.command.unwrap_or(Commands::All) {
        Commands::All => pipeline.run_all(&photo)?,
        Commands::Original => pipeline.run_original(&photo)?,
        Commands::Gray => pipeline.run_gray(&photo)?,
        Commands::Levels { levels } => {
            let series = if levels.is_empty() {
                None
            } else {
                Some(levels)
            };
            pipeline.run_levels(&photo, series.as_deref())?
        }
        Commands::Edges { low, high } => pipeline.run_edges(&photo, low, high)?,
    };

    tracing::info!(files = report.outputs.len(), "Study complete");
    Ok(())
}
