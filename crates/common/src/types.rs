use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Number of readings in one evaluation: a 3-minute window sampled every 5 seconds.
pub const DEFAULT_READINGS: usize = 36;

/// Score awarded when every reading agrees with the trade direction.
pub const STRONG_SCORE: f64 = 5.0;

/// Score awarded when at least one reading disagrees.
pub const WEAK_SCORE: f64 = 0.5;

/// Trade direction being confirmed by the IXP comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Buy,
    Sell,
}

impl Direction {
    /// Whether a single reading satisfies this direction.
    /// Ties never pass.
    pub fn holds(self, short_value: f64, long_value: f64) -> bool {
        match self {
            Direction::Buy => short_value > long_value,
            Direction::Sell => short_value < long_value,
        }
    }

    /// The condition checked per reading, as shown to the user.
    pub fn condition(self) -> &'static str {
        match self {
            Direction::Buy => "15m IXP > 1h IXP",
            Direction::Sell => "15m IXP < 1h IXP",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Buy => write!(f, "BUY"),
            Direction::Sell => write!(f, "SELL"),
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "buy" => Ok(Direction::Buy),
            "sell" => Ok(Direction::Sell),
            other => Err(Error::InvalidInput(format!(
                "direction must be 'buy' or 'sell', got: '{other}'"
            ))),
        }
    }
}

/// Which shape of synthetic data to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// Every reading satisfies the direction.
    AllPass,
    /// Every 8th reading is forced to fail.
    SomeFail,
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scenario::AllPass => write!(f, "all-pass"),
            Scenario::SomeFail => write!(f, "some-fail"),
        }
    }
}

impl FromStr for Scenario {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "all-pass" | "pass" => Ok(Scenario::AllPass),
            "some-fail" | "fail" => Ok(Scenario::SomeFail),
            other => Err(Error::InvalidInput(format!(
                "scenario must be 'all-pass' or 'some-fail', got: '{other}'"
            ))),
        }
    }
}

/// Result of comparing one reading against the direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
}

impl Outcome {
    pub fn of(direction: Direction, short_value: f64, long_value: f64) -> Self {
        if direction.holds(short_value, long_value) {
            Outcome::Pass
        } else {
            Outcome::Fail
        }
    }

    /// `+1` for a pass, `-1` for a fail.
    pub fn value(self) -> i32 {
        match self {
            Outcome::Pass => 1,
            Outcome::Fail => -1,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+}", self.value())
    }
}

/// One sampled pair of IXP values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// 1-based position in the sequence.
    pub index: usize,
    /// Seconds since the start of the sampling window.
    pub offset_secs: u64,
    /// 15-minute IXP value.
    pub short_value: f64,
    /// 1-hour IXP value.
    pub long_value: f64,
    /// Outcome recorded when the reading was sampled.
    pub outcome: Outcome,
}

impl Reading {
    pub fn new(
        index: usize,
        offset_secs: u64,
        short_value: f64,
        long_value: f64,
        direction: Direction,
    ) -> Self {
        Self {
            index,
            offset_secs,
            short_value,
            long_value,
            outcome: Outcome::of(direction, short_value, long_value),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.short_value.is_finite() && self.long_value.is_finite()
    }
}

/// Aggregate of one evaluated sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Sum of all outcomes, in `[-len, len]`.
    pub sum_of_outcomes: i32,
    pub pass_count: usize,
    pub fail_count: usize,
    pub len: usize,
    /// Either [`STRONG_SCORE`] or [`WEAK_SCORE`].
    pub score: f64,
}

impl ScoreResult {
    pub fn all_passed(&self) -> bool {
        self.fail_count == 0
    }

    /// Sum a perfect run reaches, e.g. `+36`. Outcomes are normalised to the
    /// direction, so the target is positive for BUY and SELL alike.
    pub fn target_sum_label(&self) -> String {
        format!("{:+}", self.len as i32)
    }
}

/// Duration and cadence of the sampling buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplingWindow {
    pub window_secs: u64,
    pub interval_secs: u64,
}

impl SamplingWindow {
    pub fn buffer_size(&self) -> usize {
        if self.interval_secs == 0 {
            return 0;
        }
        (self.window_secs / self.interval_secs) as usize
    }

    /// Offset of the reading at `position` (zero-based).
    pub fn offset_of(&self, position: usize) -> u64 {
        position as u64 * self.interval_secs
    }
}

impl Default for SamplingWindow {
    fn default() -> Self {
        Self {
            window_secs: 180,
            interval_secs: 5,
        }
    }
}
