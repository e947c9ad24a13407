use serde::{Deserialize, Serialize};

use common::{Direction, Error, Result, Scenario};

/// Top-level scenario file (TOML).
///
/// Example `config/scenarios.toml`:
/// ```toml
/// [[scenario]]
/// name = "Perfect buy"
/// direction = "buy"
/// kind = "all-pass"
/// readings = 36
/// seed = 7
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScenarioFileConfig {
    #[serde(rename = "scenario", default)]
    pub scenarios: Vec<ScenarioConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScenarioConfig {
    /// Human-readable name shown in reports.
    pub name: String,
    /// "buy" or "sell", any case.
    #[serde(deserialize_with = "de_direction")]
    pub direction: Direction,
    /// "all-pass" or "some-fail".
    pub kind: Scenario,
    /// Sequence length. Falls back to the configured default when absent.
    #[serde(default)]
    pub readings: Option<usize>,
    /// Generator seed. Falls back to the configured seed, then entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl ScenarioFileConfig {
    /// Load from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read scenario file at '{path}': {e}"))
        })?;
        Self::parse(&content)
            .map_err(|e| Error::Config(format!("failed to parse scenario file at '{path}': {e}")))
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }
}

fn de_direction<'de, D>(deserializer: D) -> std::result::Result<Direction, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_entries_with_optional_fields() {
        let cfg = ScenarioFileConfig::parse(
            r#"
            [[scenario]]
            name = "Perfect buy"
            direction = "buy"
            kind = "all-pass"
            seed = 7

            [[scenario]]
            name = "Shaky sell"
            direction = "SELL"
            kind = "some-fail"
            readings = 12
            "#,
        )
        .unwrap();

        assert_eq!(cfg.scenarios.len(), 2);
        assert_eq!(cfg.scenarios[0].direction, Direction::Buy);
        assert_eq!(cfg.scenarios[0].readings, None);
        assert_eq!(cfg.scenarios[0].seed, Some(7));
        assert_eq!(cfg.scenarios[1].direction, Direction::Sell);
        assert_eq!(cfg.scenarios[1].kind, Scenario::SomeFail);
        assert_eq!(cfg.scenarios[1].readings, Some(12));
    }

    #[test]
    fn empty_file_has_no_scenarios() {
        assert!(ScenarioFileConfig::parse("").unwrap().scenarios.is_empty());
    }

    #[test]
    fn unknown_direction_is_a_config_error() {
        let err = ScenarioFileConfig::parse(
            r#"
            [[scenario]]
            name = "bad"
            direction = "hold"
            kind = "all-pass"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = ScenarioFileConfig::load("does/not/exist.toml").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.toml"));
    }
}
