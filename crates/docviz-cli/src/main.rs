//! CLI application for visual document analysis.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{analyze, config, extract};

/// docviz - Word clouds, frequency charts, bigram graphs and sentiment from documents
#[derive(Parser)]
#[command(name = "docviz")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a document and render the chart as PNG
    Analyze(analyze::AnalyzeArgs),

    /// Print the text extracted from a document
    Extract(extract::ExtractArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Analyze(args) => analyze::run(args, cli.config.as_deref()).await,
        Commands::Extract(args) => extract::run(args).await,
        Commands::Config(args) => config::run(args, cli.config.as_deref()).await,
    }
}
