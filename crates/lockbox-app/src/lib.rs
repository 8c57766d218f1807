//! lockbox-app - Landing page state model and orchestration for Lockbox
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the page's
//! UI state: theme, toasts, FAQ accordion, feature tour, encryption demo and
//! scroll flags. It also owns configuration, preference storage, timers and
//! the Engine that front ends drive.

pub mod actions;
pub mod config;
pub mod content;
pub mod disclosure;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod media;
pub mod message;
pub mod process;
pub mod progress;
pub mod scroll;
pub mod signals;
pub mod state;
pub mod theme;
pub mod timers;
pub mod toast;

// Re-export primary types
pub use disclosure::{Accordion, TourAction, TourAdvance, TourStepper};
pub use engine::Engine;
pub use handler::{TimerKey, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use progress::SimulatedProgressTask;
pub use scroll::{PageViewState, ScrollFlags, ScrollSignal, ScrollThresholds};
pub use state::{AppState, UiMode};
pub use theme::{ThemeController, ThemeTokens};
pub use toast::{ToastCenter, ToastPhase};
