//! Light/dark theme resolution, persistence and derived design tokens

use lockbox_core::prelude::*;
use lockbox_core::{Rgb, ThemePreference};

use crate::config::{PreferenceStore, THEME_KEY};

/// Colour tokens for one theme, computed once per theme change.
///
/// Every theme-conditional colour the renderer needs lives here; widgets read
/// tokens and never branch on the theme themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    pub background: Rgb,
    pub surface: Rgb,
    pub surface_raised: Rgb,
    pub border: Rgb,
    pub border_active: Rgb,
    pub text_primary: Rgb,
    pub text_secondary: Rgb,
    pub text_muted: Rgb,
    pub accent: Rgb,
    pub accent_alt: Rgb,
    pub success: Rgb,
    pub error: Rgb,
    pub info: Rgb,
}

impl ThemeTokens {
    pub fn for_theme(theme: ThemePreference) -> Self {
        match theme {
            ThemePreference::Dark => Self {
                background: Rgb(2, 6, 23),
                surface: Rgb(15, 23, 42),
                surface_raised: Rgb(30, 41, 59),
                border: Rgb(51, 65, 85),
                border_active: Rgb(96, 165, 250),
                text_primary: Rgb(241, 245, 249),
                text_secondary: Rgb(148, 163, 184),
                text_muted: Rgb(100, 116, 139),
                accent: Rgb(96, 165, 250),
                accent_alt: Rgb(192, 132, 252),
                success: Rgb(52, 211, 153),
                error: Rgb(248, 113, 113),
                info: Rgb(56, 189, 248),
            },
            ThemePreference::Light => Self {
                background: Rgb(248, 250, 252),
                surface: Rgb(255, 255, 255),
                surface_raised: Rgb(241, 245, 249),
                border: Rgb(203, 213, 225),
                border_active: Rgb(37, 99, 235),
                text_primary: Rgb(15, 23, 42),
                text_secondary: Rgb(71, 85, 105),
                text_muted: Rgb(148, 163, 184),
                accent: Rgb(37, 99, 235),
                accent_alt: Rgb(147, 51, 234),
                success: Rgb(5, 150, 105),
                error: Rgb(220, 38, 38),
                info: Rgb(2, 132, 199),
            },
        }
    }
}

/// Owns the active theme and its tokens
#[derive(Debug, Clone)]
pub struct ThemeController {
    current: ThemePreference,
    tokens: ThemeTokens,
}

impl Default for ThemeController {
    fn default() -> Self {
        Self::new(ThemePreference::default())
    }
}

impl ThemeController {
    pub fn new(theme: ThemePreference) -> Self {
        Self {
            current: theme,
            tokens: ThemeTokens::for_theme(theme),
        }
    }

    /// Resolve the startup theme and build a controller for it
    pub fn load(store: &dyn PreferenceStore, system: Option<ThemePreference>) -> Self {
        Self::new(Self::get_initial(store, system))
    }

    /// Startup resolution order: persisted slot, then the system signal, then dark.
    ///
    /// An unparseable persisted value counts as absent.
    pub fn get_initial(
        store: &dyn PreferenceStore,
        system: Option<ThemePreference>,
    ) -> ThemePreference {
        if let Some(raw) = store.get(THEME_KEY) {
            match raw.parse::<ThemePreference>() {
                Ok(theme) => {
                    debug!("Using persisted theme: {}", theme);
                    return theme;
                }
                Err(e) => warn!("Ignoring persisted theme: {}", e),
            }
        }

        match system {
            Some(theme) => {
                debug!("Using system theme: {}", theme);
                theme
            }
            None => ThemePreference::Dark,
        }
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    pub fn tokens(&self) -> &ThemeTokens {
        &self.tokens
    }

    /// Flip the theme and persist it.
    ///
    /// A storage failure is logged and the new theme stays memory-only.
    pub fn toggle(&mut self, store: &mut dyn PreferenceStore) -> ThemePreference {
        self.set(self.current.toggled(), store);
        self.current
    }

    /// Switch to `theme` and persist it, tolerating storage failures
    pub fn set(&mut self, theme: ThemePreference, store: &mut dyn PreferenceStore) {
        self.current = theme;
        self.tokens = ThemeTokens::for_theme(theme);

        if let Err(e) = store.set(THEME_KEY, theme.as_str()) {
            warn!("Theme preference not persisted, keeping it for this session: {}", e);
        }
    }
}

/// Read the terminal's colour scheme from `COLORFGBG`.
///
/// Returns `None` when the variable is unset or not understood.
pub fn detect_system_theme() -> Option<ThemePreference> {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| parse_colorfgbg(&value))
}

/// Parse a `COLORFGBG` value such as `"15;0"` or `"0;default;15"`.
///
/// The last field is the background palette index: 7 and 15 are light,
/// 0-6 and 8 are dark.
pub fn parse_colorfgbg(value: &str) -> Option<ThemePreference> {
    let background = value.rsplit(';').next()?.trim().parse::<u8>().ok()?;
    match background {
        7 | 15 => Some(ThemePreference::Light),
        0..=6 | 8 => Some(ThemePreference::Dark),
        _ => None,
    }
}
