pub mod config_dirs;
pub mod read_settings;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub use config_dirs::{default_settings_path, project_config_dir};
pub use read_settings::{load_settings, parse_settings};

/// Runtime settings. Every field has a default so an empty or partial
/// `settings.toml` is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tools: ToolSettings,
    pub process: ProcessSettings,
    pub logging: LoggingSettings,
}

/// Program names (or absolute paths) of the external utilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    pub sleep: String,
    pub grep: String,
    pub uname: String,
    pub df: String,
    pub chmod: String,
}

impl Default for ToolSettings {
    fn default() -> Self {
        ToolSettings {
            sleep: "sleep".into(),
            grep: "grep".into(),
            uname: "uname".into(),
            df: "df".into(),
            chmod: "chmod".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessSettings {
    /// How long the spawned delay process runs, in seconds.
    pub sleep_secs: u64,
}

impl Default for ProcessSettings {
    fn default() -> Self {
        ProcessSettings { sleep_secs: 2 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is not set.
    pub level: String,
    /// Write logs to this file instead of stderr.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            level: "warn".into(),
            file: None,
        }
    }
}
