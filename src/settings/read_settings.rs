use std::fs;
use std::path::Path;

use crate::errors::{ProbeError, Result};
use crate::settings::{default_settings_path, Settings};

/// Parse settings from TOML text. `origin` is only used in error messages.
pub fn parse_settings(text: &str, origin: &Path) -> Result<Settings> {
    let settings: Settings = toml::from_str(text).map_err(|e| ProbeError::Config {
        path: origin.to_path_buf(),
        msg: e.to_string(),
    })?;
    validate(&settings, origin)?;
    Ok(settings)
}

/// Values that parse but cannot drive the suite.
fn validate(settings: &Settings, origin: &Path) -> Result<()> {
    // the delay child must still be alive when first polled
    if settings.process.sleep_secs == 0 {
        return Err(ProbeError::Config {
            path: origin.to_path_buf(),
            msg: "process.sleep_secs must be at least 1".into(),
        });
    }
    Ok(())
}

/// Load settings.
///
/// An explicit `path` must exist and parse. Without one, the per-user
/// `settings.toml` is used when present and defaults otherwise.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_settings_path() {
            Some(p) if p.is_file() => p,
            _ => {
                tracing::debug!("no settings file found, using defaults");
                return Ok(Settings::default());
            }
        },
    };
    let text = fs::read_to_string(&path).map_err(|e| ProbeError::Config {
        path: path.clone(),
        msg: e.to_string(),
    })?;
    let settings = parse_settings(&text, &path)?;
    tracing::debug!(path = %path.display(), "loaded settings");
    Ok(settings)
}
