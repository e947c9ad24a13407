use tracing::debug;

use crate::{Error, Result, DEFAULT_READINGS};

/// Runtime defaults loaded from environment variables at startup.
/// Every variable is optional; malformed values are a configuration error.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Scenario file evaluated by `ixpscore file` when no path is given.
    pub scenario_path: String,

    /// Sequence length used when a run does not specify one.
    pub readings: usize,

    /// Seed for the sample generator. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scenario_path: "config/scenarios.toml".to_string(),
            readings: DEFAULT_READINGS,
            seed: None,
        }
    }
}

impl Config {
    /// Load configuration from the environment, reading `.env` if present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // ignore error if .env not present
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let readings = match lookup("IXP_READINGS") {
            Some(raw) => parse_var::<usize>("IXP_READINGS", &raw)?,
            None => defaults.readings,
        };
        if readings == 0 {
            return Err(Error::Config("IXP_READINGS must be at least 1".to_string()));
        }

        let seed = lookup("IXP_SEED")
            .map(|raw| parse_var::<u64>("IXP_SEED", &raw))
            .transpose()?;

        let cfg = Config {
            scenario_path: lookup("IXP_SCENARIO_PATH").unwrap_or(defaults.scenario_path),
            readings,
            seed,
        };
        debug!(?cfg, "Loaded configuration");
        Ok(cfg)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| Error::Config(format!("{key} is not a valid number: '{}'", raw.trim())))
}
