use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::ioutils::write_file;

/// Settings persisted by the `setup` command and read back by `create`.
///
/// Stored as YAML, by default under `config/config.yml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Absolute path of the WordPress theme the artifacts are written into.
    pub theme: PathBuf,
}

impl Settings {
    pub fn new<P: Into<PathBuf>>(theme: P) -> Self {
        Self { theme: theme.into() }
    }

    /// Loads the settings file, failing with `MissingConfiguration` when the
    /// file does not exist or carries an empty theme path.
    pub fn load<P: AsRef<Path>>(config_file: P) -> Result<Self> {
        let config_file = config_file.as_ref();
        let missing = || Error::MissingConfiguration {
            config_file: config_file.display().to_string(),
        };

        let contents = std::fs::read_to_string(config_file).map_err(|_| missing())?;
        let settings: Settings = serde_yaml::from_str(&contents)?;

        if settings.theme.as_os_str().is_empty() {
            return Err(missing());
        }
        Ok(settings)
    }

    /// Writes the settings file, creating parent directories as needed.
    pub fn save<P: AsRef<Path>>(&self, config_file: P) -> Result<()> {
        let contents = serde_yaml::to_string(self)?;
        write_file(&contents, config_file)
    }
}
