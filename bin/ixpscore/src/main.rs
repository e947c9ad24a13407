//! IXP score command-line tool.
//!
//! ```bash
//! # One BUY run where every reading passes
//! ixpscore run -d buy -s all-pass
//!
//! # Reproducible SELL run with a failure every 8th reading, as JSON
//! ixpscore run -d sell -s some-fail --seed 42 --json
//!
//! # Every scenario in a TOML file
//! ixpscore file config/scenarios.toml
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use common::{Config, Direction, Scenario};
use scoring::{IxpSession, SampleGenerator, ScenarioFileConfig, ScenarioRegistry, ScoreReport};

#[derive(Parser)]
#[command(name = "ixpscore")]
#[command(about = "Compare 15-minute and 1-hour IXP readings and derive the IXP score", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate and score a single sample
    Run {
        /// Trade direction (buy, sell)
        #[arg(short, long)]
        direction: Direction,

        /// Sample shape (all-pass, some-fail)
        #[arg(short, long, default_value = "all-pass")]
        scenario: Scenario,

        /// Number of readings (defaults to IXP_READINGS or 36)
        #[arg(short = 'n', long)]
        readings: Option<usize>,

        /// Generator seed (defaults to IXP_SEED, then entropy)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Score every scenario listed in a TOML file
    File {
        /// Scenario file (defaults to IXP_SCENARIO_PATH)
        path: Option<String>,

        /// Print the reports as a JSON array
        #[arg(long, default_value = "false")]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    // ── Logging ──────────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // ── Config ────────────────────────────────────────────────────────────────
    let cfg = Config::from_env().context("failed to load configuration")?;

    match cli.command {
        Commands::Run {
            direction,
            scenario,
            readings,
            seed,
            json,
        } => {
            let len = readings.unwrap_or(cfg.readings);
            let generator = SampleGenerator::from_seed_option(seed.or(cfg.seed));
            let session = IxpSession::new(generator, direction, scenario, len)
                .context("failed to generate sample")?;
            let report = session.report(format!("{direction} {scenario}"))?;
            info!(
                %direction,
                %scenario,
                sum = report.result.sum_of_outcomes,
                score = report.result.score,
                "Scored sample"
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{report}");
            }
        }
        Commands::File { path, json } => {
            let path = path.unwrap_or_else(|| cfg.scenario_path.clone());
            let file_cfg = ScenarioFileConfig::load(&path)?;
            let registry = ScenarioRegistry::from_config(&file_cfg, &cfg)?;
            let reports = registry.run()?;
            info!(path = %path, count = reports.len(), "Scenario file scored");
            print_reports(&reports, json)?;
        }
    }

    Ok(())
}

fn print_reports(reports: &[ScoreReport], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(reports)?);
        return Ok(());
    }

    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{report}");
    }
    Ok(())
}
