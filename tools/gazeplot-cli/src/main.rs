//! Gazeplot CLI: replay recorded landmark streams into gaze charts.
//!
//! Usage:
//!   gazeplot render <STREAM>   Replay a landmark stream and write SVG charts
//!   gazeplot info <STREAM>     Show landmark stream information
//!   gazeplot config            Show or initialize the configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gazeplot_common::config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "gazeplot",
    about = "Eye-gaze charts from face landmark streams",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a landmark stream through a gaze session
    Render {
        /// Path to the landmark stream (JSONL)
        stream: PathBuf,

        /// Output directory for the SVG charts
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Also draw the combined XY direction chart
        #[arg(long)]
        direction: bool,

        /// Pace frames at the stream's capture rate
        #[arg(long)]
        realtime: bool,

        /// Write the landmark markers of the last face
        #[arg(long)]
        overlay: bool,
    },

    /// Show landmark stream information
    Info {
        /// Path to the landmark stream (JSONL)
        stream: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration
    Config {
        /// Write the effective configuration to the config path
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load();

    // Initialize logging
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    gazeplot_common::logging::init_logging(&logging);

    match cli.command {
        Commands::Render {
            stream,
            output,
            direction,
            realtime,
            overlay,
        } => commands::render::run(&config, stream, output, direction, realtime, overlay).await,
        Commands::Info { stream, json } => commands::info::run(stream, json),
        Commands::Config { init } => commands::config::run(&config, init),
    }
}
