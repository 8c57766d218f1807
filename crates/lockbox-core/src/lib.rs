//! # lockbox-core - Core Domain Types
//!
//! Foundation crate for the Lockbox landing page. Provides the domain types
//! shared by the state model and the renderer, error handling and logging
//! setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ThemePreference`] - Light or dark colour scheme, with its persisted form
//! - [`Toast`], [`ToastId`], [`ToastKind`] - Transient notifications
//! - [`ProgressStatus`] - Lifecycle of the simulated encryption demo
//! - [`Rgb`] - Renderer-independent colour value used by theme tokens
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum grouped by domain
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use lockbox_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all Lockbox crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use types::{AppPhase, ProgressStatus, Rgb, ThemePreference, Toast, ToastId, ToastKind};
