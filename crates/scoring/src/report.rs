use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use common::{Direction, Outcome, Reading, Result, Scenario, ScoreResult};

use crate::ixp::compute_score;

/// Everything needed to show one scored sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub name: String,
    pub direction: Direction,
    pub scenario: Scenario,
    /// Condition checked on each reading, e.g. `15m IXP > 1h IXP`.
    pub condition: String,
    /// Sum a perfect run reaches, as displayed (`+36`).
    pub target_sum: String,
    pub readings: Vec<Reading>,
    pub result: ScoreResult,
    pub generated_at: DateTime<Utc>,
}

impl ScoreReport {
    /// Score `readings` and assemble the report.
    pub fn build(
        name: impl Into<String>,
        direction: Direction,
        scenario: Scenario,
        readings: Vec<Reading>,
    ) -> Result<Self> {
        let result = compute_score(&readings, direction)?;
        Ok(Self {
            name: name.into(),
            direction,
            scenario,
            condition: direction.condition().to_string(),
            target_sum: result.target_sum_label(),
            readings,
            result,
            generated_at: Utc::now(),
        })
    }

    pub fn verdict(&self) -> &'static str {
        if self.result.all_passed() {
            "Excellent! All comparisons passed"
        } else {
            "Weak signal - some comparisons failed"
        }
    }
}

impl std::fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.result.len;
        writeln!(f, "== {} ({} / {}) ==", self.name, self.direction, self.scenario)?;
        writeln!(f, "Condition: {}", self.condition)?;
        writeln!(f)?;
        writeln!(f, "{:>4} {:>6} {:>8} {:>8} {:>4}", "#", "t(s)", "15m", "1h", "cmp")?;
        for r in &self.readings {
            writeln!(
                f,
                "{:>4} {:>6} {:>8.1} {:>8.1} {:>+4}",
                r.index,
                r.offset_secs,
                r.short_value,
                r.long_value,
                Outcome::of(self.direction, r.short_value, r.long_value).value(),
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Passed (+1): {} / {n}", self.result.pass_count)?;
        writeln!(f, "Failed (-1): {} / {n}", self.result.fail_count)?;
        writeln!(
            f,
            "Sum of comparisons: {} (target {})",
            self.result.sum_of_outcomes, self.target_sum
        )?;
        write!(f, "IXP score: {:.1}  {}", self.result.score, self.verdict())
    }
}
