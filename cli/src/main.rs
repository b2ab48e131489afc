//! xoshiro-vectors - reference vector reporter for xoshiro256**
//!
//! Expands seeds into fixed-length sequences of every derived value kind
//! and renders them as fixture text or JSON.
//!
//! # Examples
//!
//! ```bash
//! # Canonical seeds, 30 values per kind, fixture text format
//! xoshiro-vectors
//!
//! # Custom seed, 100 values per kind, JSON written to a file
//! xoshiro-vectors --seed 0x1,0x2,0x3,0x4 --count 100 --format json -o vectors.json
//!
//! # Fingerprint the first million raw draws of each canonical seed
//! xoshiro-vectors --digest 1000000
//!
//! # Replay a fixture file against the generator
//! xoshiro-vectors --verify vectors.txt
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use xoshiro_core_rs::{Seed, VectorConfig};

mod error;
mod fixture;
mod render;

use error::{CliError, CliResult};

/// Reference vector reporter for the xoshiro256** generator
#[derive(Parser, Debug)]
#[command(name = "xoshiro-vectors")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,

    /// Seed as four comma-separated hex words (repeatable)
    #[arg(short, long = "seed", value_name = "W0,W1,W2,W3")]
    seeds: Vec<String>,

    /// Values per kind (default: 30, or the config file's count)
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// JSON config file with `seeds` and `count`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print SHA-256 fingerprints of the first DRAWS raw draws instead
    #[arg(long, value_name = "DRAWS")]
    digest: Option<usize>,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Check a fixture text file against the generator instead
    #[arg(long, value_name = "FILE", conflicts_with_all = ["seeds", "config", "digest"])]
    verify: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn parse_seed(arg: &str) -> CliResult<Seed> {
    let words: Vec<&str> = arg.split(',').collect();
    Ok(Seed::from_hex_words(words.as_slice())?)
}

/// Build the effective config: file (or defaults), then CLI overrides
fn resolve_config(cli: &Cli) -> CliResult<VectorConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading vector config");
            VectorConfig::from_json(&std::fs::read_to_string(path)?)?
        }
        None => VectorConfig::default(),
    };

    if !cli.seeds.is_empty() {
        config.seeds = cli
            .seeds
            .iter()
            .map(|arg| parse_seed(arg))
            .collect::<CliResult<Vec<Seed>>>()?;
    }
    if let Some(count) = cli.count {
        config.count = count;
    }

    config.validate()?;
    Ok(config)
}

fn emit(output: Option<&Path>, text: &str) -> CliResult<()> {
    match output {
        Some(path) => {
            std::fs::write(path, text)?;
            tracing::info!(path = %path.display(), bytes = text.len(), "wrote vectors");
        }
        None => print!("{}", text),
    }
    Ok(())
}

/// Parse a fixture file and replay every set; returns the number of sets
fn verify_fixture(path: &Path) -> CliResult<usize> {
    tracing::debug!(path = %path.display(), "verifying fixture");
    let sets = fixture::parse_fixture(&std::fs::read_to_string(path)?)?;

    for set in &sets {
        set.verify().map_err(CliError::Verify)?;
    }
    tracing::info!(sets = sets.len(), "fixture matches generator");
    Ok(sets.len())
}

fn run(cli: &Cli) -> CliResult<()> {
    if let Some(path) = &cli.verify {
        let verified = verify_fixture(path)?;
        return emit(cli.output.as_deref(), &format!("verified {} seed(s)\n", verified));
    }

    let config = resolve_config(cli)?;
    tracing::debug!(seeds = config.seeds.len(), count = config.count, "resolved config");

    let text = match cli.digest {
        Some(draws) => render::render_digests(&config.seeds, draws)?,
        None => {
            let sets = config.generate();
            match cli.format {
                Format::Text => render::render_text(&sets)?,
                Format::Json => render::render_json(&sets)?,
            }
        }
    };

    emit(cli.output.as_deref(), &text)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
