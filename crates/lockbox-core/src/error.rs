//! Application error types

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Preference Storage Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Preference storage error: {message}")]
    Preferences { message: String },

    #[error("Preference storage is read-only")]
    PreferencesReadOnly,

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    // ─────────────────────────────────────────────────────────────
    // External Link Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to open {url}: {reason}")]
    OpenExternal { url: String, reason: String },
}

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn preferences(message: impl Into<String>) -> Self {
        Self::Preferences {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    pub fn open_external(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::OpenExternal {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::preferences("disk full");
        assert_eq!(err.to_string(), "Preference storage error: disk full");

        let err = Error::PreferencesReadOnly;
        assert!(err.to_string().contains("read-only"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_open_external_error_mentions_url() {
        let err = Error::open_external("https://app.example.com", "not found");
        assert!(err.to_string().contains("https://app.example.com"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_config_not_found_mentions_path() {
        let err = Error::config_not_found("/tmp/missing.toml");
        assert!(err.to_string().contains("/tmp/missing.toml"));
    }
}
