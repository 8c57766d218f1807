//! Terminal colors for the active theme.
//!
//! Widgets never branch on light/dark: they read a [`Palette`] built from the
//! controller's current [`ThemeTokens`].

use lockbox_app::ThemeTokens;
use lockbox_core::Rgb;
use ratatui::style::Color;

pub fn color(rgb: Rgb) -> Color {
    let Rgb(r, g, b) = rgb;
    Color::Rgb(r, g, b)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub surface_raised: Color,
    pub border: Color,
    pub border_active: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub success: Color,
    pub error: Color,
    pub info: Color,
}

impl From<&ThemeTokens> for Palette {
    fn from(tokens: &ThemeTokens) -> Self {
        Self {
            background: color(tokens.background),
            surface: color(tokens.surface),
            surface_raised: color(tokens.surface_raised),
            border: color(tokens.border),
            border_active: color(tokens.border_active),
            text_primary: color(tokens.text_primary),
            text_secondary: color(tokens.text_secondary),
            text_muted: color(tokens.text_muted),
            accent: color(tokens.accent),
            accent_alt: color(tokens.accent_alt),
            success: color(tokens.success),
            error: color(tokens.error),
            info: color(tokens.info),
        }
    }
}
