use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FlybyError, Result};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for flyby, stored in the platform config directory as
/// `config.json`. There is no ambient default dataset: the path a load uses
/// is always either an explicit argument or this configured value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FlybyConfig {
    /// Default close-approach dataset to load when no explicit path is given.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

impl FlybyConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FlybyError::Io)?;
        let config: FlybyConfig =
            serde_json::from_str(&content).map_err(FlybyError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory, creating it if needed.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FlybyError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(FlybyError::Serialization)?;
        fs::write(config_path, content).map_err(FlybyError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_data_file() {
        let config = FlybyConfig::default();
        assert_eq!(config.data_file, None);
    }

    #[test]
    fn load_missing_config_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let config = FlybyConfig::load(dir.path().join("nowhere")).unwrap();
        assert_eq!(config, FlybyConfig::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();

        let config = FlybyConfig {
            data_file: Some(PathBuf::from("/data/neo_data.csv")),
        };
        config.save(dir.path()).unwrap();

        let loaded = FlybyConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn save_creates_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        FlybyConfig::default().save(&nested).unwrap();
        assert!(nested.join(CONFIG_FILENAME).exists());
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();

        assert!(FlybyConfig::load(dir.path()).is_err());
    }
}
