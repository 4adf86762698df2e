use crate::auth::Credentials;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_duration_hours;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the configuration directory.
pub const HOME_ENV: &str = "SHIFTCLOCK_HOME";

/// Keys every configuration file is expected to spell out.
pub const KNOWN_FIELDS: &[&str] = &["data_file", "standard_shift", "months_to_show", "log_level"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_standard_shift")]
    pub standard_shift: String,
    #[serde(default = "default_months_to_show")]
    pub months_to_show: u32,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<Credentials>,
}

fn default_data_file() -> String {
    Config::default_data_file().to_string_lossy().to_string()
}
fn default_standard_shift() -> String {
    "8h".to_string()
}
fn default_months_to_show() -> u32 {
    3
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            standard_shift: default_standard_shift(),
            months_to_show: default_months_to_show(),
            log_level: default_log_level(),
            auth: None,
        }
    }
}

impl Config {
    /// `$SHIFTCLOCK_HOME`, or `~/.shiftclock`
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var(HOME_ENV)
            && !dir.trim().is_empty()
        {
            return PathBuf::from(dir);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".shiftclock")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftclock.conf")
    }

    /// Return the default path of the shift data file
    pub fn default_data_file() -> PathBuf {
        Self::config_dir().join("shifts.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(path, yaml)?;
        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        self.standard_hours()?;
        if self.months_to_show == 0 {
            return Err(AppError::Config("months_to_show must be at least 1".into()));
        }
        Ok(())
    }

    /// Standard shift length in hours.
    pub fn standard_hours(&self) -> AppResult<f64> {
        parse_duration_hours(&self.standard_shift)
    }

    /// Resolved data file path; relative paths live in the config directory.
    pub fn data_path(&self) -> PathBuf {
        let p = expand_tilde(&self.data_file);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Known keys absent from a raw configuration file.
    pub fn missing_fields(content: &str) -> AppResult<Vec<&'static str>> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
        let map = value.as_mapping();
        Ok(KNOWN_FIELDS
            .iter()
            .copied()
            .filter(|key| !map.is_some_and(|m| m.contains_key(*key)))
            .collect())
    }

    /// Initialize the config directory, configuration file and data file.
    ///
    /// In test mode the configuration file is left alone.
    pub fn init_all(custom_data: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = if Self::config_file().exists() {
            Self::load()?
        } else {
            Self::default()
        };
        if let Some(data) = custom_data {
            config.data_file = data;
        }

        if !is_test {
            config.save_to(&Self::config_file())?;
        }
        Ok(config)
    }
}
