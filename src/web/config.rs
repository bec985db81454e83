use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::thresholds::{ThresholdError, WellClearThresholds};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid thresholds: {0}")]
    InvalidThresholds(#[from] ThresholdError),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub thresholds: WellClearThresholds,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.thresholds.validate()?;
        Ok(config)
    }

    /// Load `path` when given, otherwise fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.web.bind, "0.0.0.0:8080");
        assert_eq!(config.thresholds, WellClearThresholds::default());
    }

    #[test]
    fn reads_overrides_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "web:\n  bind: 127.0.0.1:9000\nthresholds:\n  dmod_ft: 2200\n  tau_mod_thr_s: 20"
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.web.bind, "127.0.0.1:9000");
        assert_eq!(config.thresholds.dmod_ft, 2200.0);
        assert_eq!(config.thresholds.tau_mod_thr_s, 20.0);
        assert_eq!(config.thresholds.dh_thr_ft, 450.0);
    }

    #[test]
    fn load_without_path_is_default() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.thresholds, WellClearThresholds::default());
    }

    #[test]
    fn malformed_yaml_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "thresholds: [1, 2").unwrap();
        assert!(matches!(
            Config::from_file(file.path()),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn non_positive_thresholds_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "thresholds:\n  dmod_ft: 0").unwrap();
        assert!(matches!(
            Config::from_file(file.path()),
            Err(ConfigError::InvalidThresholds(ThresholdError::Invalid { name: "dmod_ft", .. }))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "thresholds:\n  dh_thr_ft: -450").unwrap();
        assert!(matches!(
            Config::load(Some(file.path())),
            Err(ConfigError::InvalidThresholds(_))
        ));
    }
}
