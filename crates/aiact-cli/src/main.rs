//! # aiact CLI entry point
//!
//! Parses command-line arguments, initializes tracing and dispatches to the
//! subcommand handlers in the library crate.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use aiact_cli::analyze::{run_analyze, AnalyzeArgs};
use aiact_cli::classify::{run_classify, ClassifyArgs};
use aiact_cli::rank::{run_rank, RankArgs};
use aiact_cli::render::OutputFormat;
use aiact_cli::{ApiArgs, Presentation};
use aiact_core::RiskScale;

/// EU AI Act compliance reports from the terminal.
///
/// Submits websites to the compliance-analysis service, ranks stored
/// reports by main risk score and classifies raw scores offline.
#[derive(Parser, Debug)]
#[command(name = "aiact", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Risk bucket scheme: four-band or five-band.
    #[arg(long, default_value = "five-band", global = true)]
    scale: RiskScale,

    #[command(flatten)]
    api: ApiArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a website and print its compliance report card.
    Analyze(AnalyzeArgs),

    /// Rank a user's stored reports by main risk score.
    Rank(RankArgs),

    /// Classify raw scores into risk buckets without contacting the service.
    Classify(ClassifyArgs),
}

fn filter_for(verbose: u8) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

fn init_tracing(verbose: u8, json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbose))
        .with_writer(std::io::stderr)
        .with_target(false);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "aiact starting");

    let presentation = Presentation {
        format: cli.format,
        scale: cli.scale,
    };

    let result = match &cli.command {
        Commands::Analyze(args) => run_analyze(args, &cli.api, presentation).await,
        Commands::Rank(args) => run_rank(args, &cli.api, presentation).await,
        Commands::Classify(args) => run_classify(args, presentation),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::debug!("{e:#}");
            eprintln!("{}", error_line(&e));
            ExitCode::from(1)
        }
    }
}

/// The line printed on stderr for a failed command, with the full context chain.
fn error_line(e: &anyhow::Error) -> String {
    format!("Error: {e:#}")
}
