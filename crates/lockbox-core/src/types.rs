//! Core domain type definitions

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Application lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Event loop is running
    #[default]
    Running,
    /// Application is shutting down
    Quitting,
}

// ─────────────────────────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────────────────────────

/// Light/dark colour scheme preference.
///
/// Persisted as the lowercase strings `"light"` and `"dark"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    /// Persisted/display form
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// The opposite preference
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == ThemePreference::Dark
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}

/// 24-bit colour, independent of any rendering library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

// ─────────────────────────────────────────────────────────────────────────────
// Toasts
// ─────────────────────────────────────────────────────────────────────────────

/// Unique, monotonically increasing toast identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(pub u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    /// Short label shown in front of the message
    pub fn label(&self) -> &'static str {
        match self {
            ToastKind::Success => "OK",
            ToastKind::Error => "ERR",
            ToastKind::Info => "INFO",
        }
    }
}

/// A transient notification banner
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
    pub created_at: DateTime<Local>,
}

impl Toast {
    pub fn new(id: ToastId, kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            message: message.into(),
            created_at: Local::now(),
        }
    }

    /// Milliseconds since the toast was created (never negative)
    pub fn age_ms(&self, now: DateTime<Local>) -> u64 {
        (now - self.created_at).num_milliseconds().max(0) as u64
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Simulated progress
// ─────────────────────────────────────────────────────────────────────────────

/// Lifecycle of the simulated encryption demo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressStatus {
    #[default]
    Idle,
    Running,
    Complete,
}

impl ProgressStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProgressStatus::Idle => "Idle",
            ProgressStatus::Running => "Encrypting",
            ProgressStatus::Complete => "Complete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse_round_trip_strings() {
        assert_eq!("dark".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
        assert_eq!(
            " Light ".parse::<ThemePreference>(),
            Ok(ThemePreference::Light)
        );
        assert!("solarized".parse::<ThemePreference>().is_err());
    }

    #[test]
    fn test_theme_toggled_flips() {
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
    }

    #[test]
    fn test_theme_default_is_dark() {
        assert_eq!(ThemePreference::default(), ThemePreference::Dark);
        assert!(ThemePreference::default().is_dark());
    }

    #[test]
    fn test_theme_serde_lowercase() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            theme: ThemePreference,
        }
        let text = toml::to_string(&Wrapper {
            theme: ThemePreference::Light,
        })
        .unwrap();
        assert!(text.contains("theme = \"light\""));
        let back: Wrapper = toml::from_str("theme = \"dark\"").unwrap();
        assert_eq!(back.theme, ThemePreference::Dark);
    }

    #[test]
    fn test_toast_age_is_clamped() {
        let toast = Toast::new(ToastId(1), ToastKind::Info, "hello");
        let earlier = toast.created_at - chrono::Duration::seconds(1);
        assert_eq!(toast.age_ms(earlier), 0);
        let later = toast.created_at + chrono::Duration::milliseconds(250);
        assert_eq!(toast.age_ms(later), 250);
    }

    #[test]
    fn test_toast_id_ordering() {
        assert!(ToastId(1) < ToastId(2));
        assert_eq!(ToastId(7).to_string(), "#7");
    }

    #[test]
    fn test_progress_status_default_idle() {
        assert_eq!(ProgressStatus::default(), ProgressStatus::Idle);
    }
}
