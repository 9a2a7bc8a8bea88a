use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Name of the SQLite file inside the database directory.
pub const DATABASE_FILE_NAME: &str = "timetrack.sqlite";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database directory (relative paths are resolved against the working directory)
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_ideal_work_duration")]
    pub ideal_work_duration: String,
    /// Last weekday of the reporting window: "friday" or "saturday"
    #[serde(default = "default_last_weekday")]
    pub last_weekday: String,
    #[serde(default = "default_true")]
    pub forced_events: bool,
    #[serde(default = "default_true")]
    pub show_deltas: bool,
    /// Measure today's work until now when no sleep event exists yet
    #[serde(default = "default_true")]
    pub open_day_until_now: bool,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_time_format")]
    pub time_format: String,
}

fn default_database() -> String {
    "db".to_string()
}
fn default_ideal_work_duration() -> String {
    "8h40m".to_string()
}
fn default_last_weekday() -> String {
    "friday".to_string()
}
fn default_true() -> bool {
    true
}
fn default_date_format() -> String {
    "%A %d.%m.%Y".to_string()
}
fn default_time_format() -> String {
    "%H:%M".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            ideal_work_duration: default_ideal_work_duration(),
            last_weekday: default_last_weekday(),
            forced_events: true,
            show_deltas: true,
            open_day_until_now: true,
            date_format: default_date_format(),
            time_format: default_time_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("timetrack")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".timetrack")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timetrack.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Self::from_yaml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Database directory with `~/` expanded.
    pub fn database_dir(&self) -> AppResult<PathBuf> {
        let trimmed = self.database.trim();
        if trimmed.is_empty() {
            return Err(AppError::Config("database location is empty".into()));
        }
        Ok(expand_tilde(trimmed))
    }

    /// Full path of the SQLite file inside the database directory.
    pub fn database_file(&self) -> AppResult<PathBuf> {
        Ok(self.database_dir()?.join(DATABASE_FILE_NAME))
    }
}
