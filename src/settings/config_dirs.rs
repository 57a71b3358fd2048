use std::path::PathBuf;

use directories_next::ProjectDirs;

const SETTINGS_FILE: &str = "settings.toml";

/// Per-user configuration directory, e.g. `~/.config/sysprobe` on Linux.
pub fn project_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "sysprobe").map(|d| d.config_dir().to_path_buf())
}

/// Where `load_settings(None)` looks for a settings file.
pub fn default_settings_path() -> Option<PathBuf> {
    project_config_dir().map(|d| d.join(SETTINGS_FILE))
}
