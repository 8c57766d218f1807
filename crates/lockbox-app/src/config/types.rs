//! Configuration types for the Lockbox landing page
//!
//! Defines:
//! - `Settings` - Global application settings (`config.toml`)
//! - Per-component sub-settings with serde defaults

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application settings, every section optional in the file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub toasts: ToastSettings,

    #[serde(default)]
    pub tour: TourSettings,

    #[serde(default)]
    pub demo: DemoSettings,

    #[serde(default)]
    pub scroll: ScrollSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Toast notification settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToastSettings {
    /// How long a toast stays visible before auto-removal
    #[serde(default = "default_toast_lifetime_ms")]
    pub lifetime_ms: u64,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            lifetime_ms: default_toast_lifetime_ms(),
        }
    }
}

fn default_toast_lifetime_ms() -> u64 {
    5000
}

/// Feature tour settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TourSettings {
    /// Delay before the tour opens on a first visit
    #[serde(default = "default_auto_open_delay_ms")]
    pub auto_open_delay_ms: u64,
}

impl Default for TourSettings {
    fn default() -> Self {
        Self {
            auto_open_delay_ms: default_auto_open_delay_ms(),
        }
    }
}

fn default_auto_open_delay_ms() -> u64 {
    2000
}

/// Encryption demo settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DemoSettings {
    /// Interval between progress ticks.
    /// Clamped to a minimum of 10ms when scheduled.
    #[serde(default = "default_demo_tick_ms")]
    pub tick_ms: u64,

    /// Upper bound of the random per-tick increment.
    /// Values that are not positive and finite fall back to 15.0.
    #[serde(default = "default_max_increment")]
    pub max_increment: f64,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            tick_ms: default_demo_tick_ms(),
            max_increment: default_max_increment(),
        }
    }
}

fn default_demo_tick_ms() -> u64 {
    100
}

fn default_max_increment() -> f64 {
    15.0
}

/// Page scroll settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScrollSettings {
    /// Position beyond which the nav bar is drawn in its "scrolled" style
    #[serde(default = "default_scrolled_threshold")]
    pub scrolled_threshold: u32,

    /// Position beyond which the back-to-top button appears
    #[serde(default = "default_back_to_top_threshold")]
    pub back_to_top_threshold: u32,

    /// Scroll units represented by one terminal row
    #[serde(default = "default_units_per_row")]
    pub units_per_row: u32,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            scrolled_threshold: default_scrolled_threshold(),
            back_to_top_threshold: default_back_to_top_threshold(),
            units_per_row: default_units_per_row(),
        }
    }
}

fn default_scrolled_threshold() -> u32 {
    50
}

fn default_back_to_top_threshold() -> u32 {
    500
}

fn default_units_per_row() -> u32 {
    16
}

/// Icon rendering mode for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Unicode symbols (default)
    #[default]
    Unicode,
    /// Plain ASCII for terminals without Unicode fonts
    Ascii,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::Ascii => write!(f, "ascii"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Hosted application opened by the "Open Free" action
    #[serde(default = "default_app_url")]
    pub app_url: String,

    /// Browser command; empty means the platform default opener
    #[serde(default)]
    pub browser: String,

    /// Optional text-art file shown in the hero section
    #[serde(default)]
    pub hero_art: Option<PathBuf>,

    /// Icon mode: "unicode" (default) or "ascii"
    #[serde(default)]
    pub icons: IconMode,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            app_url: default_app_url(),
            browser: String::new(),
            hero_art: None,
            icons: IconMode::default(),
        }
    }
}

fn default_app_url() -> String {
    "https://app.lockbox.example".to_string()
}
