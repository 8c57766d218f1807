//! Settings parser for `config.toml`

use super::types::Settings;
use lockbox_core::logging::APP_DIR_NAME;
use lockbox_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";

/// Per-user configuration directory (`~/.config/lockbox-landing` on Linux)
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Default location of `config.toml`
pub fn default_config_path() -> PathBuf {
    config_dir().join(CONFIG_FILENAME)
}

/// Load settings from `config.toml`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Load settings from an explicitly requested file.
///
/// Unlike [`load_settings`], a missing file is an error: the user asked for it.
pub fn load_settings_strict(config_path: &Path) -> Result<Settings> {
    if !config_path.exists() {
        return Err(Error::config_not_found(config_path));
    }
    let content = std::fs::read_to_string(config_path)?;
    toml::from_str(&content)
        .map_err(|e| Error::config(format!("{}: {}", config_path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults_when_missing() {
        let temp = tempdir().unwrap();
        let settings = load_settings(&temp.path().join(CONFIG_FILENAME));

        assert_eq!(settings.toasts.lifetime_ms, 5000);
        assert_eq!(settings.tour.auto_open_delay_ms, 2000);
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);

        let config = r#"
[toasts]
lifetime_ms = 1500

[demo]
tick_ms = 50
max_increment = 5.0

[ui]
app_url = "https://files.example.org"
"#;
        std::fs::write(&path, config).unwrap();

        let settings = load_settings(&path);

        assert_eq!(settings.toasts.lifetime_ms, 1500);
        assert_eq!(settings.demo.tick_ms, 50);
        assert_eq!(settings.demo.max_increment, 5.0);
        assert_eq!(settings.ui.app_url, "https://files.example.org");
        assert_eq!(settings.scroll.back_to_top_threshold, 500);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.toasts.lifetime_ms, 5000);
    }

    #[test]
    fn test_load_settings_strict_missing_is_error() {
        let temp = tempdir().unwrap();
        let err = load_settings_strict(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_settings_strict_invalid_is_config_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[tour]\nauto_open_delay_ms = \"soon\"\n").unwrap();

        let err = load_settings_strict(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_default_config_path_under_app_dir() {
        let path = default_config_path();
        assert!(path.ends_with(Path::new(APP_DIR_NAME).join(CONFIG_FILENAME)));
    }
}
