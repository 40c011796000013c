//! Command-line interface for bin-fixtures
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # 100 records of every set, JSON Lines on stdout
//! bin-fixtures generate --schema fixtures.yaml --count 100
//!
//! # Two sets with an explicit seed, into a file
//! bin-fixtures generate --schema fixtures.yaml \
//!   --set users --set orders \
//!   --seed 7 --output fixtures.jsonl
//! ```
//!
//! ## Validate
//! ```bash
//! BIN_FIXTURES_SCHEMA=fixtures.yaml bin-fixtures validate
//! ```
//!
//! Set `RUST_LOG=info` to see progress logs on stderr.

use bin_fixtures::fixtures::{generate::run_generate, validate::run_validate};
use bin_fixtures::{GenerateArgs, ValidateArgs};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bin-fixtures")]
#[command(about = "Generate record fixtures for key-value database tests")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate records as JSON Lines
    Generate(GenerateArgs),

    /// Check a fixture schema and list its sets
    Validate(ValidateArgs),
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::Validate(args) => {
            let stdout = std::io::stdout();
            run_validate(&args, &mut stdout.lock())
        }
    }
}
