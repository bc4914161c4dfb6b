use clap::{ArgAction, Parser, Subcommand};
use env_logger::{Builder, Env};
use log::LevelFilter;
use std::path::PathBuf;

use leafscan::{Detector, DetectorConfig};

#[derive(Parser)]
#[command(name = "leafscan")]
#[command(about = "Detect plant diseases in leaf photographs")]
struct Cli {
    #[command(flatten)]
    detector: DetectorConfig,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze one image without opening the window
    Analyze {
        /// Path to input image file
        #[arg(value_name = "IMAGE")]
        image_path: PathBuf,

        /// Save the annotated image to this file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    // Without -v, RUST_LOG wins if set
    let mut builder = if verbose == 0 && std::env::var_os("RUST_LOG").is_some() {
        Builder::from_env(Env::default())
    } else {
        let level = match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        let mut builder = Builder::new();
        builder.filter_level(level);
        builder
    };
    builder.format_timestamp(None).init();
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose);
    args.detector.validate()?;

    match args.command {
        Some(Command::Analyze { image_path, output }) => {
            analyze(&args.detector, &image_path, output.as_deref())
        }
        None => run_gui(args.detector),
    }
}

fn analyze(
    config: &DetectorConfig,
    image_path: &std::path::Path,
    output: Option<&std::path::Path>,
) -> anyhow::Result<()> {
    let detector = Detector::load(config)?;
    let analysis = detector.analyze(image_path)?;

    println!("=== Disease Analysis Results ===");
    for finding in analysis.findings() {
        println!("  {}", finding.summary());
    }
    println!("\n=== Disease Description ===");
    println!("{}", analysis.description());

    if let Some(output) = output {
        analysis
            .annotated
            .save(output)
            .map_err(|e| anyhow::anyhow!("Failed to save {}: {}", output.display(), e))?;
        println!("\nAnnotated image saved to {}", output.display());
    }

    Ok(())
}

#[cfg(feature = "gui")]
fn run_gui(config: DetectorConfig) -> anyhow::Result<()> {
    leafscan::gui::run(config).map_err(|e| anyhow::anyhow!("GUI error: {}", e))
}

#[cfg(not(feature = "gui"))]
fn run_gui(_config: DetectorConfig) -> anyhow::Result<()> {
    anyhow::bail!("leafscan was built without the `gui` feature; use `leafscan analyze IMAGE`")
}
