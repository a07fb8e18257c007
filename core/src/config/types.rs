use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, log to `file_name` under `directory`.
    #[serde(default = "default_logging_file")]
    pub file: bool,

    /// Log file name. Blank means `tutorbook.log`.
    #[serde(default = "default_logging_file_name")]
    pub file_name: String,

    /// EnvFilter string, e.g. "warn" or "tutorbook_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    /// Directory for log files. If empty or unset, uses ~/.tutorbook/logs.
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

fn default_logging_file() -> bool {
    false
}

fn default_logging_file_name() -> String {
    "tutorbook.log".to_string()
}

fn default_logging_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: default_logging_file(),
            file_name: default_logging_file_name(),
            level: default_logging_level(),
            directory: None,
        }
    }
}

impl LoggingConfig {
    /// Where file logging writes, or `None` when it is off.
    pub fn log_file_path(&self) -> Option<PathBuf> {
        if !self.file {
            return None;
        }
        let dir = match self
            .directory
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            Some(d) => PathBuf::from(d),
            None => std::env::temp_dir().join("tutorbook"),
        };
        let name = match self.file_name.trim() {
            "" => default_logging_file_name(),
            n => n.to_string(),
        };
        Some(dir.join(name))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON data file. Empty means ~/.tutorbook/data/tutorbook.json.
    #[serde(default)]
    pub data_file: String,
}
