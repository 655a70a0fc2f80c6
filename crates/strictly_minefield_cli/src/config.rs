//! Settings file loading.

use std::path::Path;
use strictly_minefield::{ConfigError, ConfigErrorKind, Settings};
use tracing::{debug, info, instrument};

/// Loads settings from a TOML file, or defaults if the file is absent.
///
/// Missing keys take their default values. Range checks are left to game
/// construction.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the file exists but cannot be read or
/// parsed.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_settings(path: impl AsRef<Path>) -> Result<Settings, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        info!("Settings file not found, using defaults");
        return Ok(Settings::default());
    }

    debug!("Loading settings from file");
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::new(ConfigErrorKind::Read(e.to_string())))?;

    let settings: Settings = toml::from_str(&content)
        .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())))?;

    info!(?settings, "Settings loaded");
    Ok(settings)
}
