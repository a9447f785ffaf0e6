use crate::errors::{AppError, AppResult};
use crate::models::TimePreset;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolves a leading `~/` against the user's home directory.
fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_calendar")]
    pub calendar: String,
    #[serde(default)]
    pub default_start_time: String,
    #[serde(default)]
    pub default_end_time: String,
    #[serde(default = "default_break_minutes")]
    pub default_break_minutes: String,
    /// Contract selected on empty contract selectors during bulk fill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_contract: Option<String>,
    #[serde(default)]
    pub presets: Vec<TimePreset>,
}

fn default_database() -> String {
    Config::config_dir()
        .join("rtimecard.sqlite")
        .to_string_lossy()
        .to_string()
}

fn default_calendar() -> String {
    Config::config_dir()
        .join("calendar.json")
        .to_string_lossy()
        .to_string()
}

fn default_break_minutes() -> String {
    "60".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            calendar: default_calendar(),
            default_start_time: String::new(),
            default_end_time: String::new(),
            default_break_minutes: default_break_minutes(),
            auto_contract: None,
            presets: Vec::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimecard")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtimecard")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimecard.conf")
    }

    /// Load configuration from `path`, or return defaults if the file does not exist
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    pub fn calendar_path(&self) -> PathBuf {
        expand_tilde(&self.calendar)
    }
}
