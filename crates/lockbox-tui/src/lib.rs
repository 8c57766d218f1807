//! lockbox-tui - Terminal UI for the Lockbox landing page
//!
//! Renders [`lockbox_app::AppState`] with ratatui and feeds terminal input
//! back to the [`lockbox_app::Engine`].

pub mod event;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
