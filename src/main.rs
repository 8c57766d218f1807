//! Lockbox - terminal landing page for the Lockbox secure file storage service
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use lockbox_app::config::{
    default_config_path, load_settings, load_settings_strict, FilePreferenceStore,
    MemoryPreferenceStore, PreferenceStore, Settings, THEME_KEY, TOUR_SEEN_KEY,
};
use lockbox_app::theme::detect_system_theme;
use lockbox_app::{AppState, Engine};
use lockbox_core::ThemePreference;
use tracing::{info, warn};

/// Lockbox - secure file storage, client-side encrypted
#[derive(Parser, Debug)]
#[command(name = "lockbox")]
#[command(about = "Terminal landing page for Lockbox", long_about = None)]
struct Args {
    /// Settings file; defaults to the user config directory
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Preference file holding the theme and tour flags
    #[arg(long, value_name = "PATH")]
    preferences: Option<PathBuf>,

    /// Keep preferences in memory only
    #[arg(long, conflicts_with = "preferences")]
    ephemeral: bool,

    /// Show the feature tour again on this launch
    #[arg(long)]
    reset_tour: bool,

    /// Start with this theme and remember it
    #[arg(long, value_name = "light|dark")]
    theme: Option<ThemePreference>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let log_dir = lockbox_core::logging::init()?;

    let settings = match &args.config {
        Some(path) => load_settings_strict(path)
            .wrap_err_with(|| format!("Failed to load {}", path.display()))?,
        None => load_settings(&default_config_path()),
    };
    let preferences = build_preferences(&args);
    let state = AppState::with_settings(settings, preferences, detect_system_theme());

    info!("Theme on launch: {}", state.theme.current());
    lockbox_tui::run(Engine::new(state))
        .await
        .wrap_err_with(|| format!("Lockbox stopped; logs are in {}", log_dir.display()))?;
    Ok(())
}

/// Open the preference store and apply the one-shot CLI overrides
fn build_preferences(args: &Args) -> Box<dyn PreferenceStore> {
    let mut store: Box<dyn PreferenceStore> = if args.ephemeral {
        Box::new(MemoryPreferenceStore::new())
    } else {
        let path = args
            .preferences
            .clone()
            .unwrap_or_else(FilePreferenceStore::default_path);
        Box::new(FilePreferenceStore::open(path))
    };

    if args.reset_tour {
        if let Err(e) = store.remove(TOUR_SEEN_KEY) {
            warn!("Could not reset the tour flag: {}", e);
        }
    }
    if let Some(theme) = args.theme {
        if let Err(e) = store.set(THEME_KEY, theme.as_str()) {
            warn!("Could not persist theme {}: {}", theme, e);
        }
    }
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("lockbox").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_theme_flag_is_persisted() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("preferences.toml");
        let args = parse(&["--preferences", path.to_str().unwrap(), "--theme", "light"]);

        build_preferences(&args);

        let reopened = FilePreferenceStore::open(&path);
        assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_reset_tour_clears_seen_flag() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("preferences.toml");
        {
            let mut store = FilePreferenceStore::open(&path);
            store.set(TOUR_SEEN_KEY, "true").unwrap();
        }

        let args = parse(&["--preferences", path.to_str().unwrap(), "--reset-tour"]);
        let store = build_preferences(&args);

        assert!(!store.get_flag(TOUR_SEEN_KEY));
        let state = AppState::with_settings(Settings::default(), store, None);
        assert!(state.tour.should_auto_open());
    }

    #[test]
    fn test_ephemeral_conflicts_with_preferences_path() {
        let result = Args::try_parse_from(["lockbox", "--ephemeral", "--preferences", "p.toml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        assert!(Args::try_parse_from(["lockbox", "--theme", "sepia"]).is_err());
    }
}
