use tracing::{info, warn};

use common::{Config, Direction, Error, Result, Scenario};

use crate::config::{ScenarioConfig, ScenarioFileConfig};
use crate::report::ScoreReport;
use crate::sample::SampleGenerator;

/// A scenario ready to run: selection, length and seed all resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioRun {
    pub name: String,
    pub direction: Direction,
    pub scenario: Scenario,
    pub readings: usize,
    pub seed: Option<u64>,
}

impl ScenarioRun {
    /// Generate and score this scenario.
    pub fn evaluate(&self) -> Result<ScoreReport> {
        let mut generator = SampleGenerator::from_seed_option(self.seed);
        let readings = generator.generate(self.direction, self.scenario, self.readings)?;
        ScoreReport::build(self.name.clone(), self.direction, self.scenario, readings)
    }
}

/// Holds every scenario from a scenario file and evaluates them in file order.
pub struct ScenarioRegistry {
    runs: Vec<ScenarioRun>,
}

impl ScenarioRegistry {
    /// Resolve every entry against the runtime defaults.
    /// Fails on the first entry with an invalid length.
    pub fn from_config(file_cfg: &ScenarioFileConfig, defaults: &Config) -> Result<Self> {
        let mut runs = Vec::with_capacity(file_cfg.scenarios.len());

        for cfg in &file_cfg.scenarios {
            let run = resolve(cfg, defaults)?;
            info!(
                name = %run.name,
                direction = %run.direction,
                scenario = %run.scenario,
                readings = run.readings,
                "Registered scenario"
            );
            runs.push(run);
        }

        if runs.is_empty() {
            warn!("Scenario file contains no scenarios");
        }

        Ok(Self { runs })
    }

    pub fn runs(&self) -> &[ScenarioRun] {
        &self.runs
    }

    /// Evaluate every scenario. Stops at the first failure.
    pub fn run(&self) -> Result<Vec<ScoreReport>> {
        self.runs
            .iter()
            .map(|run| {
                let report = run.evaluate()?;
                info!(
                    name = %report.name,
                    sum = report.result.sum_of_outcomes,
                    score = report.result.score,
                    "Scenario scored"
                );
                Ok(report)
            })
            .collect()
    }
}

fn resolve(cfg: &ScenarioConfig, defaults: &Config) -> Result<ScenarioRun> {
    let readings = cfg.readings.unwrap_or(defaults.readings);
    if readings == 0 {
        return Err(Error::Config(format!(
            "scenario '{}' must have at least 1 reading",
            cfg.name
        )));
    }
    Ok(ScenarioRun {
        name: cfg.name.clone(),
        direction: cfg.direction,
        scenario: cfg.kind,
        readings,
        seed: cfg.seed.or(defaults.seed),
    })
}
