//! Message types for the landing page (TEA pattern)

use lockbox_core::{ToastId, ToastKind};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic redraws
    Tick,

    /// Page mounted: subscribe to scroll and arm the first-visit tour
    Startup,

    /// Tear down and exit
    Quit,

    // ─────────────────────────────────────────────────────────
    // Theme
    // ─────────────────────────────────────────────────────────
    ToggleTheme,

    // ─────────────────────────────────────────────────────────
    // Toasts
    // ─────────────────────────────────────────────────────────
    PushToast { kind: ToastKind, message: String },

    /// User closed a toast
    DismissToast(ToastId),

    /// Close whichever toast arrived first
    DismissOldestToast,

    /// Lifetime timer fired
    ToastExpired(ToastId),

    // ─────────────────────────────────────────────────────────
    // FAQ accordion
    // ─────────────────────────────────────────────────────────
    /// Toggle the item at the given index
    SelectFaq(usize),

    /// Move the keyboard cursor to the next item
    FaqCursorNext,

    /// Move the keyboard cursor to the previous item
    FaqCursorPrevious,

    /// Toggle the item under the cursor
    ToggleFaqAtCursor,

    // ─────────────────────────────────────────────────────────
    // Feature tour
    // ─────────────────────────────────────────────────────────
    /// Reopen the tour at step 0
    OpenTour,

    /// First-visit delay elapsed
    TourAutoOpen,

    /// Primary button: next step, or finish on the last one
    TourNext,

    TourPrevious,

    /// Skip/close the tour early
    CloseTour,

    // ─────────────────────────────────────────────────────────
    // Encryption demo
    // ─────────────────────────────────────────────────────────
    /// Enter input editing mode
    EditDemoInput,

    /// Leave input editing mode
    StopEditingDemo,

    DemoInput(char),

    DemoBackspace,

    StartDemo,

    /// Repeating progress timer fired
    DemoTick,

    ResetDemo,

    // ─────────────────────────────────────────────────────────
    // Scrolling
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    BackToTop,

    // ─────────────────────────────────────────────────────────
    // External link
    // ─────────────────────────────────────────────────────────
    /// Open the hosted application
    OpenApp,

    /// The platform opener failed
    OpenExternalFailed { url: String, reason: String },
}
