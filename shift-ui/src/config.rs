//! Wizard configuration loaded from TOML.
//!
//! ```toml
//! bulk_start_time = "09:00"   # "" leaves new cards without a start time
//! bulk_end_time = "18:00"
//! settle_window_ms = 400
//! log_level = "info"
//! log_file = "shift-wizard.log"
//! ```
//!
//! Every key is optional.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use shift_core::{BulkDefaults, ModelError, ShiftTime};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid bulk default time: {0}")]
    InvalidTime(#[from] ModelError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    pub bulk_start_time: String,
    pub bulk_end_time: String,
    pub settle_window_ms: u64,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            bulk_start_time: "09:00".to_string(),
            bulk_end_time: "18:00".to_string(),
            settle_window_ms: 400,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl WizardConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.bulk_defaults()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// The bulk start/end as times; blank strings mean unset.
    pub fn bulk_defaults(&self) -> Result<BulkDefaults, ConfigError> {
        Ok(BulkDefaults::new(
            ShiftTime::parse_optional(&self.bulk_start_time)?,
            ShiftTime::parse_optional(&self.bulk_end_time)?,
        ))
    }

    pub fn settle_window(&self) -> Duration {
        Duration::from_millis(self.settle_window_ms)
    }
}
