//! Configuration and preference storage for the Lockbox landing page
//!
//! Supports:
//! - `config.toml` - Global settings (timings, thresholds, links)
//! - `preferences.toml` - Persisted UI preference slots (theme, tour seen)

pub mod preferences;
pub mod settings;
pub mod types;

pub use preferences::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, THEME_KEY, TOUR_SEEN_KEY,
};
pub use settings::{config_dir, default_config_path, load_settings, load_settings_strict};
pub use types::*;
