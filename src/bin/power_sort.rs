//! CLI for running power tracing experiments.
//!
//! Usage:
//!   power-sort                          # Quicksort, 50000 random values, 30 runs
//!   power-sort "Merge Sort" --size 1000 # Pick sorter and size
//!   power-sort --config exp.toml        # Load settings, flags override
//!   power-sort --list                   # List available sorters

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use power_sort::config::ExperimentConfig;
use power_sort::dataset::OrderingMode;
use power_sort::registry::build_registry;
use power_sort::tui;

#[derive(Parser, Debug)]
#[command(name = "power-sort", version, about = "Marker-delimited sorting runs for power tracing")]
struct Cli {
    /// Sorter name, e.g. "quick", "Merge Sort", "COUNTINGSORT"
    algorithm: Option<String>,

    /// Dataset length
    #[arg(long, short = 's')]
    size: Option<usize>,

    /// Ordering: sorted, reverse, random1, random2, random3, or index 0-4
    #[arg(long, short = 'o')]
    ordering: Option<OrderingMode>,

    /// Number of sort runs
    #[arg(long, short = 'r')]
    runs: Option<usize>,

    /// Marker phase width in milliseconds
    #[arg(long, short = 'm')]
    marker_ms: Option<u64>,

    /// TOML configuration file
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Pin the experiment to the current CPU core
    #[arg(long)]
    pin: bool,

    /// Keep all replicas and check they are sorted
    #[arg(long)]
    verify: bool,

    /// List available sorters and exit
    #[arg(long, short = 'l')]
    list: bool,
}

impl Cli {
    /// Load the config file (or defaults) and apply command-line overrides
    fn resolve_config(&self) -> Result<ExperimentConfig> {
        let mut config = match &self.config {
            Some(path) => ExperimentConfig::from_toml_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => ExperimentConfig::default(),
        };

        if let Some(algorithm) = &self.algorithm {
            config.algorithm = algorithm.clone();
        }
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(ordering) = self.ordering {
            config.ordering = ordering;
        }
        if let Some(runs) = self.runs {
            config.runs = runs;
        }
        if let Some(marker_ms) = self.marker_ms {
            config.marker_width_ms = marker_ms;
        }
        config.pin_cpu |= self.pin;
        config.keep_results |= self.verify;

        Ok(config)
    }
}

/// Initialise the `tracing` subscriber on stderr.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("power_sort=info"));

    if std::env::var("POWER_SORT_LOG_JSON").is_ok() {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn run(cli: Cli) -> Result<()> {
    let registry = build_registry();

    if cli.list {
        tui::print_available_sorters(&registry);
        return Ok(());
    }

    let config = cli.resolve_config()?;
    let mut experiment = config
        .build(&registry)
        .with_context(|| format!("available sorters: {:?}", registry.list_names()))?;

    tui::print_header();
    tui::print_experiment_box(&experiment);

    let elapsed = experiment
        .run_experiment()
        .with_context(|| format!("{} aborted", experiment))?;

    let verified = if config.keep_results {
        let outcome = experiment.verify_results();
        if let Err(e) = &outcome {
            tracing::error!(error = %e, "result verification failed");
        }
        Some(outcome.is_ok())
    } else {
        None
    };

    tui::print_summary(elapsed, experiment.sort_timing_summary().as_ref(), verified);

    if verified == Some(false) {
        anyhow::bail!("sorted replicas failed verification");
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
