//! Binary entrypoint for the overlay generator.
//!
//! Delegates all logic to the library crate; no local modules here.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

use poster_overlay::compose::compose;
use poster_overlay::config::OverlayOptions;

/// Simple CLI
#[derive(Debug, Parser)]
#[command(name = "poster-overlay", about = "Poster and background overlay generator")]
struct Cli {
    /// Path to a YAML (or .json) overlay options file
    #[arg(short = 'O', long, value_name = "FILE", default_value = "overlay.yaml")]
    options: PathBuf,

    /// Output PNG path
    #[arg(short, long, value_name = "FILE", default_value = "overlay.png")]
    output: PathBuf,

    /// Deterministic grain seed; omit for a fresh RNG per run
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) -> Result<()> {
    // map -v to log level
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("poster_overlay={}", level).parse()?);
    fmt().with_env_filter(filter).with_target(true).init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let options = OverlayOptions::from_file(&cli.options)
        .with_context(|| format!("loading overlay options from {}", cli.options.display()))?;

    let image = match cli.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            compose(&options, &mut rng)?
        }
        None => {
            let mut rng = rand::rng();
            compose(&options, &mut rng)?
        }
    };

    image
        .save(&cli.output)
        .with_context(|| format!("writing overlay to {}", cli.output.display()))?;
    info!(
        width = image.width(),
        height = image.height(),
        path = %cli.output.display(),
        "wrote overlay"
    );
    Ok(())
}
