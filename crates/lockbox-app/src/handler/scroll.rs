//! Scroll message handlers
//!
//! Moves the page viewport and feeds the new position to the scroll signal.

use lockbox_core::prelude::*;

use crate::state::AppState;

use super::UpdateResult;

pub fn handle_scroll_up(state: &mut AppState) -> UpdateResult {
    state.page_view.scroll_up(1);
    sync_scroll_signal(state)
}

pub fn handle_scroll_down(state: &mut AppState) -> UpdateResult {
    state.page_view.scroll_down(1);
    sync_scroll_signal(state)
}

pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    state.page_view.page_up();
    sync_scroll_signal(state)
}

pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    state.page_view.page_down();
    sync_scroll_signal(state)
}

pub fn handle_back_to_top(state: &mut AppState) -> UpdateResult {
    state.page_view.scroll_to_top();
    sync_scroll_signal(state)
}

/// Feed the current position to the signal.
///
/// Also runs on every tick so viewport clamping after a resize is picked up.
pub fn sync_scroll_signal(state: &mut AppState) -> UpdateResult {
    let position = state.scroll_position();
    if state.scroll.on_scroll(position) {
        debug!("Scroll flags now {:?}", state.scroll.flags());
    }
    UpdateResult::none()
}
