//! CLI application for extracting and validating structured data in text.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{analyze, categories, config, sample, validate};

/// textscan - Find and validate emails, phones, dates, IDs, postal codes, URLs and plates in text
#[derive(Parser)]
#[command(name = "textscan")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract and validate every category in a text
    Analyze(analyze::AnalyzeArgs),

    /// Validate a single value against one category
    Validate(validate::ValidateArgs),

    /// List the recognized categories
    Categories,

    /// Print the sample text
    Sample,

    /// Manage configuration
    Config(config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
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
        Commands::Analyze(args) => analyze::run(args, cli.config.as_deref()),
        Commands::Validate(args) => validate::run(args, cli.config.as_deref()),
        Commands::Categories => categories::run(),
        Commands::Sample => sample::run(),
        Commands::Config(args) => config::run(args, cli.config.as_deref()),
    }
}
