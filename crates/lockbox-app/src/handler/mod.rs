//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `demo`: Encryption demo handlers
//! - `scroll`: Scroll handlers

pub(crate) mod demo;
pub(crate) mod keys;
pub(crate) mod scroll;
pub(crate) mod update;


use std::time::Duration;

use lockbox_core::ToastId;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Identity of a scheduled timer. At most one timer per key is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKey {
    /// Auto-removal of one toast
    ToastExpiry(ToastId),
    /// Repeating encryption demo progress tick
    DemoTick,
    /// Delayed first-visit tour
    TourAutoOpen,
}

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Send `message` once after `after`
    ScheduleOnce {
        key: TimerKey,
        after: Duration,
        message: Message,
    },

    /// Send `message` every `every` until cancelled
    ScheduleRepeating {
        key: TimerKey,
        every: Duration,
        message: Message,
    },

    /// Abort a pending timer; unknown keys are ignored
    CancelTimer(TimerKey),

    /// Abort every pending timer (teardown)
    CancelAllTimers,

    /// Open a URL with the platform opener or a configured browser
    OpenExternal { url: String, browser: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    /// Action first, then a follow-up message
    pub fn action_then(action: UpdateAction, msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: Some(action),
        }
    }
}
