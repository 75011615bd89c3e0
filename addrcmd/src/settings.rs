use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::platform::Platform;
use crate::report::ReportFormat;

/// Defaults read from a settings file. Command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub platform: Option<Platform>,
    pub format: Option<ReportFormat>,
}

impl Settings {
    /// Flag value if given, else the settings value, else the built-in default.
    pub fn platform_or(&self, flag: Option<Platform>) -> Platform {
        flag.or(self.platform).unwrap_or_default()
    }

    pub fn format_or(&self, flag: Option<ReportFormat>) -> ReportFormat {
        flag.or(self.format).unwrap_or_default()
    }
}

/// Errors returned when loading a settings file.
#[derive(Debug, Error)]
pub enum SettingsLoadError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Load settings from a TOML file.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| SettingsLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_settings(&raw, path.display().to_string())
}

fn parse_settings(raw: &str, path: String) -> Result<Settings, SettingsLoadError> {
    toml::from_str(raw).map_err(|source| SettingsLoadError::Parse { path, source })
}
