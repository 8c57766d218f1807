//! Theme system for the landing page renderer.
//!
//! This module provides:
//! - `palette` - `ThemeTokens` converted to ratatui colors
//! - `styles` - Semantic style builder functions
//! - `icons` - Glyphs with ASCII fallbacks

pub mod icons;
pub mod palette;
pub mod styles;
