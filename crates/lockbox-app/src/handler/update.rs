//! Main update function - handles state transitions (TEA pattern)
//!
//! Demo and scroll handlers live in `demo` and `scroll`.

use std::time::Duration;

use lockbox_core::prelude::*;
use lockbox_core::{ToastId, ToastKind};

use crate::disclosure::TourAdvance;
use crate::message::Message;
use crate::state::AppState;

use super::{demo, keys::handle_key, scroll, TimerKey, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => scroll::sync_scroll_signal(state),

        Message::Startup => handle_startup(state),

        Message::Quit => {
            info!("Quit requested, tearing down");
            state.scroll.unsubscribe();
            state.toasts.clear();
            state.request_quit();
            UpdateResult::action(UpdateAction::CancelAllTimers)
        }

        // ─────────────────────────────────────────────────────────
        // Theme
        // ─────────────────────────────────────────────────────────
        Message::ToggleTheme => {
            let theme = state.theme.toggle(state.preferences.as_mut());
            info!("Theme switched to {}", theme);
            UpdateResult::message(Message::PushToast {
                kind: ToastKind::Info,
                message: format!("Switched to {} theme", theme),
            })
        }

        // ─────────────────────────────────────────────────────────
        // Toasts
        // ─────────────────────────────────────────────────────────
        Message::PushToast { kind, message } => {
            let id = state.toasts.push(kind, message);
            debug!("Toast {} pushed ({})", id, kind.label());
            UpdateResult::action(UpdateAction::ScheduleOnce {
                key: TimerKey::ToastExpiry(id),
                after: state.toasts.lifetime(),
                message: Message::ToastExpired(id),
            })
        }

        Message::DismissToast(id) => handle_dismiss_toast(state, id),

        Message::DismissOldestToast => match state.toasts.oldest() {
            Some(id) => UpdateResult::message(Message::DismissToast(id)),
            None => UpdateResult::none(),
        },

        Message::ToastExpired(id) => {
            if state.toasts.expire(id) {
                debug!("Toast {} expired", id);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // FAQ accordion
        // ─────────────────────────────────────────────────────────
        Message::SelectFaq(index) => {
            if state.faq.select(index) {
                state.faq_cursor = index;
            }
            UpdateResult::none()
        }

        Message::FaqCursorNext => {
            if !state.faq.is_empty() {
                state.faq_cursor = (state.faq_cursor + 1) % state.faq.len();
            }
            UpdateResult::none()
        }

        Message::FaqCursorPrevious => {
            if !state.faq.is_empty() {
                let len = state.faq.len();
                state.faq_cursor = (state.faq_cursor + len - 1) % len;
            }
            UpdateResult::none()
        }

        Message::ToggleFaqAtCursor => UpdateResult::message(Message::SelectFaq(state.faq_cursor)),

        // ─────────────────────────────────────────────────────────
        // Feature tour
        // ─────────────────────────────────────────────────────────
        Message::OpenTour => {
            state.demo_editing = false;
            state.tour.open();
            UpdateResult::action(UpdateAction::CancelTimer(TimerKey::TourAutoOpen))
        }

        Message::TourAutoOpen => {
            if state.tour.should_auto_open() {
                info!("Opening feature tour for first visit");
                state.demo_editing = false;
                state.tour.open();
            }
            UpdateResult::none()
        }

        Message::TourNext => {
            if let TourAdvance::Finished = state.tour.next(state.preferences.as_mut()) {
                info!("Feature tour finished");
            }
            UpdateResult::none()
        }

        Message::TourPrevious => {
            state.tour.previous();
            UpdateResult::none()
        }

        Message::CloseTour => {
            if state.tour.is_open() {
                let step = state.tour.current();
                state.tour.close(state.preferences.as_mut());
                debug!("Feature tour closed at step {}", step);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Encryption demo
        // ─────────────────────────────────────────────────────────
        Message::EditDemoInput => demo::handle_edit(state, true),
        Message::StopEditingDemo => demo::handle_edit(state, false),
        Message::DemoInput(c) => demo::handle_input(state, c),
        Message::DemoBackspace => demo::handle_backspace(state),
        Message::StartDemo => demo::handle_start(state),
        Message::DemoTick => demo::handle_tick(state),
        Message::ResetDemo => demo::handle_reset(state),

        // ─────────────────────────────────────────────────────────
        // Scrolling
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll::handle_scroll_up(state),
        Message::ScrollDown => scroll::handle_scroll_down(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),
        Message::BackToTop => scroll::handle_back_to_top(state),

        // ─────────────────────────────────────────────────────────
        // External link
        // ─────────────────────────────────────────────────────────
        Message::OpenApp => {
            let url = state.settings.ui.app_url.clone();
            info!("Opening hosted app: {}", url);
            UpdateResult::action(UpdateAction::OpenExternal {
                url,
                browser: state.settings.ui.browser.clone(),
            })
        }

        Message::OpenExternalFailed { url, reason } => {
            warn!("Failed to open {}: {}", url, reason);
            UpdateResult::message(Message::PushToast {
                kind: ToastKind::Error,
                message: format!("Could not open {}", url),
            })
        }
    }
}

/// Page mounted: start listening to scroll and arm the first-visit tour
fn handle_startup(state: &mut AppState) -> UpdateResult {
    state.scroll.subscribe();

    if state.tour.should_auto_open() {
        let delay = Duration::from_millis(state.settings.tour.auto_open_delay_ms);
        debug!("Tour not seen yet, auto-opening in {:?}", delay);
        return UpdateResult::action(UpdateAction::ScheduleOnce {
            key: TimerKey::TourAutoOpen,
            after: delay,
            message: Message::TourAutoOpen,
        });
    }
    UpdateResult::none()
}

fn handle_dismiss_toast(state: &mut AppState, id: ToastId) -> UpdateResult {
    if state.toasts.dismiss(id) {
        debug!("Toast {} dismissed", id);
    }
    // Cancel even if already gone; the registry ignores unknown keys
    UpdateResult::action(UpdateAction::CancelTimer(TimerKey::ToastExpiry(id)))
}
