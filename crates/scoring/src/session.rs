use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;

use common::{Direction, Reading, Result, Scenario, ScoreResult};

use crate::ixp::compute_score;
use crate::report::ScoreReport;
use crate::sample::SampleGenerator;

/// Interactive scoring state: a direction, a scenario and the sample drawn for them.
///
/// Changing either selection regenerates the sample immediately, so the
/// sequence always matches the current selection.
pub struct IxpSession<R = StdRng> {
    generator: SampleGenerator<R>,
    direction: Direction,
    scenario: Scenario,
    len: usize,
    readings: Vec<Reading>,
}

impl<R: Rng> IxpSession<R> {
    pub fn new(
        mut generator: SampleGenerator<R>,
        direction: Direction,
        scenario: Scenario,
        len: usize,
    ) -> Result<Self> {
        let readings = generator.generate(direction, scenario, len)?;
        Ok(Self {
            generator,
            direction,
            scenario,
            len,
            readings,
        })
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn scenario(&self) -> Scenario {
        self.scenario
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    /// Switch direction. Returns `true` if the sample was regenerated.
    pub fn set_direction(&mut self, direction: Direction) -> Result<bool> {
        if direction == self.direction {
            return Ok(false);
        }
        self.direction = direction;
        self.regenerate()?;
        Ok(true)
    }

    /// Switch scenario. Returns `true` if the sample was regenerated.
    pub fn set_scenario(&mut self, scenario: Scenario) -> Result<bool> {
        if scenario == self.scenario {
            return Ok(false);
        }
        self.scenario = scenario;
        self.regenerate()?;
        Ok(true)
    }

    /// Draw a fresh sample for the current selection.
    pub fn regenerate(&mut self) -> Result<()> {
        self.readings = self
            .generator
            .generate(self.direction, self.scenario, self.len)?;
        debug!(direction = %self.direction, scenario = %self.scenario, "Session regenerated");
        Ok(())
    }

    pub fn score(&self) -> Result<ScoreResult> {
        compute_score(&self.readings, self.direction)
    }

    pub fn report(&self, name: impl Into<String>) -> Result<ScoreReport> {
        ScoreReport::build(name, self.direction, self.scenario, self.readings.clone())
    }
}
