//! Synthetic IXP data for demonstrating the score.
//!
//! Values are drawn from fixed bands chosen so the two series separate
//! visually. The bands are set up so that the scenario's outcome guarantee
//! holds for every draw:
//!
//! - `AllPass`: the short band lies strictly on the passing side of the long band.
//! - `SomeFail`: every 8th reading (zero-based) takes a short value strictly on
//!   the failing side of the long band; the remaining readings may go either way.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use common::{Direction, Error, Reading, Result, SamplingWindow, Scenario};

/// Every reading whose zero-based position is a multiple of this is forced to fail.
pub const FAIL_EVERY: usize = 8;

/// Half-open value range `[base, base + spread)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub base: f64,
    pub spread: f64,
}

impl Band {
    const fn new(base: f64, spread: f64) -> Self {
        Self { base, spread }
    }

    pub fn upper(&self) -> f64 {
        self.base + self.spread
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.base + rng.gen::<f64>() * self.spread
    }
}

/// Bands used for one direction/scenario combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bands {
    pub short: Band,
    pub long: Band,
    /// Short band used on forced-fail readings, if any.
    pub forced_fail: Option<Band>,
}

impl Bands {
    pub fn for_case(direction: Direction, scenario: Scenario) -> Self {
        match (direction, scenario) {
            (Direction::Buy, Scenario::AllPass) => Bands {
                short: Band::new(65.0, 8.0),
                long: Band::new(55.0, 5.0),
                forced_fail: None,
            },
            (Direction::Buy, Scenario::SomeFail) => Bands {
                short: Band::new(60.0, 10.0),
                long: Band::new(55.0, 8.0),
                forced_fail: Some(Band::new(52.0, 3.0)),
            },
            (Direction::Sell, Scenario::AllPass) => Bands {
                short: Band::new(45.0, 5.0),
                long: Band::new(55.0, 8.0),
                forced_fail: None,
            },
            (Direction::Sell, Scenario::SomeFail) => Bands {
                short: Band::new(50.0, 10.0),
                long: Band::new(55.0, 5.0),
                forced_fail: Some(Band::new(60.0, 3.0)),
            },
        }
    }
}

/// Draw `n` readings for the given direction and scenario from `rng`.
pub fn generate_sample<R: Rng + ?Sized>(
    direction: Direction,
    scenario: Scenario,
    n: usize,
    window: SamplingWindow,
    rng: &mut R,
) -> Result<Vec<Reading>> {
    if n == 0 {
        return Err(Error::InvalidInput("sample length must be at least 1".to_string()));
    }

    let bands = Bands::for_case(direction, scenario);
    let readings: Vec<Reading> = (0..n)
        .map(|i| {
            let mut short_value = bands.short.sample(rng);
            let long_value = bands.long.sample(rng);
            if let Some(fail) = bands.forced_fail {
                if i % FAIL_EVERY == 0 {
                    short_value = fail.sample(rng);
                }
            }
            Reading::new(i + 1, window.offset_of(i), short_value, long_value, direction)
        })
        .collect();

    debug!(%direction, %scenario, n, "Generated sample");
    Ok(readings)
}

/// Sample generator owning its random source.
///
/// Construct with a seed for reproducible output, or from entropy for the
/// demo behaviour.
#[derive(Debug, Clone)]
pub struct SampleGenerator<R = StdRng> {
    rng: R,
    window: SamplingWindow,
}

impl SampleGenerator<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Seeded when `seed` is given, entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> SampleGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            window: SamplingWindow::default(),
        }
    }

    pub fn with_window(mut self, window: SamplingWindow) -> Self {
        self.window = window;
        self
    }

    pub fn window(&self) -> SamplingWindow {
        self.window
    }

    pub fn generate(
        &mut self,
        direction: Direction,
        scenario: Scenario,
        n: usize,
    ) -> Result<Vec<Reading>> {
        generate_sample(direction, scenario, n, self.window, &mut self.rng)
    }
}
