use std::env;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::error::{DatawireError, DatawireResult};

const DEFAULT_SAMPLE_FREQUENCY: f64 = 1.0;
const DEFAULT_LOG_FILTER: &str = "datawire=info";

/// Runtime settings for the datawire handlers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Samples per second emitted for each link.
    #[serde(default = "default_sample_frequency")]
    pub sample_frequency: f64,

    /// Default tracing directive, combined with `RUST_LOG`.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_sample_frequency() -> f64 {
    DEFAULT_SAMPLE_FREQUENCY
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_frequency: DEFAULT_SAMPLE_FREQUENCY,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `DATAWIRE_SAMPLE_FREQUENCY` (Hz) and `DATAWIRE_LOG` are optional.
    pub fn from_env() -> DatawireResult<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an explicit variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> DatawireResult<Self> {
        let sample_frequency = match var("DATAWIRE_SAMPLE_FREQUENCY") {
            Some(raw) => raw.trim().parse::<f64>().map_err(|_| {
                DatawireError::Config(format!(
                    "DATAWIRE_SAMPLE_FREQUENCY must be a number, got {raw:?}"
                ))
            })?,
            None => DEFAULT_SAMPLE_FREQUENCY,
        };
        let log_filter = var("DATAWIRE_LOG").unwrap_or_else(default_log_filter);

        let config = Self {
            sample_frequency,
            log_filter,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load and parse a TOML config file. I/O and parse failures surface as
    /// [`DatawireError::Anyhow`] carrying the file path.
    pub fn load(path: &Path) -> DatawireResult<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DatawireResult<()> {
        if !self.sample_frequency.is_finite() || self.sample_frequency <= 0.0 {
            return Err(DatawireError::Config(format!(
                "sample_frequency must be a positive number, got {}",
                self.sample_frequency
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_vars(vars(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn reads_frequency_and_filter() {
        let config = Config::from_vars(vars(&[
            ("DATAWIRE_SAMPLE_FREQUENCY", "10"),
            ("DATAWIRE_LOG", "datawire=debug"),
        ]))
        .unwrap();
        assert_eq!(config.sample_frequency, 10.0);
        assert_eq!(config.log_filter, "datawire=debug");
    }

    #[test]
    fn rejects_non_numeric_frequency() {
        let err = Config::from_vars(vars(&[("DATAWIRE_SAMPLE_FREQUENCY", "fast")])).unwrap_err();
        assert!(matches!(err, DatawireError::Config(_)));
    }

    #[test]
    fn rejects_non_positive_frequency() {
        for raw in ["0", "-5", "inf", "NaN"] {
            let result = Config::from_vars(vars(&[("DATAWIRE_SAMPLE_FREQUENCY", raw)]));
            assert!(result.is_err(), "{raw} should be rejected");
        }
    }

    #[test]
    fn parses_toml_with_defaults() {
        let config: Config = toml::from_str("sample_frequency = 100.0").unwrap();
        assert_eq!(config.sample_frequency, 100.0);
        assert_eq!(config.log_filter, "datawire=info");
    }

    #[test]
    fn toml_rejects_unknown_keys() {
        assert!(toml::from_str::<Config>("frequency = 1.0").is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Config::load(Path::new("/nonexistent/datawire.toml")).unwrap_err();
        assert!(matches!(err, DatawireError::Anyhow(_)));
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn load_reads_a_file_and_reports_bad_toml() {
        let dir = std::env::temp_dir().join(format!("datawire-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let good = dir.join("good.toml");
        std::fs::write(&good, "sample_frequency = 10.0\nlog_filter = \"datawire=debug\"\n").unwrap();
        let config = Config::load(&good).unwrap();
        assert_eq!(config.sample_frequency, 10.0);
        assert_eq!(config.log_filter, "datawire=debug");

        let bad = dir.join("bad.toml");
        std::fs::write(&bad, "sample_frequency = [").unwrap();
        let err = Config::load(&bad).unwrap_err();
        assert!(matches!(err, DatawireError::Anyhow(_)));
        assert!(err.to_string().contains("Failed to parse config file"));

        let zero = dir.join("zero.toml");
        std::fs::write(&zero, "sample_frequency = 0.0").unwrap();
        assert!(matches!(Config::load(&zero), Err(DatawireError::Config(_))));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
