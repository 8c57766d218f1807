//! Encryption demo handlers

use std::time::Duration;

use lockbox_core::prelude::*;
use lockbox_core::ToastKind;

use crate::message::Message;
use crate::progress::TickOutcome;
use crate::state::AppState;

use super::{TimerKey, UpdateAction, UpdateResult};

pub fn handle_edit(state: &mut AppState, editing: bool) -> UpdateResult {
    state.demo_editing = editing && !state.demo.is_running();
    UpdateResult::none()
}

pub fn handle_input(state: &mut AppState, c: char) -> UpdateResult {
    if state.demo_editing {
        state.demo.push_char(c);
    }
    UpdateResult::none()
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    if state.demo_editing {
        state.demo.pop_char();
    }
    UpdateResult::none()
}

/// Start a run and its repeating tick. Empty input is refused silently.
pub fn handle_start(state: &mut AppState) -> UpdateResult {
    if !state.demo.start() {
        return UpdateResult::none();
    }

    state.demo_editing = false;
    let every = Duration::from_millis(state.settings.demo.tick_ms);
    info!("Encryption demo started ({} chars)", state.demo.input().len());
    UpdateResult::action(UpdateAction::ScheduleRepeating {
        key: TimerKey::DemoTick,
        every,
        message: Message::DemoTick,
    })
}

pub fn handle_tick(state: &mut AppState) -> UpdateResult {
    match state.demo.tick(&mut rand::thread_rng()) {
        TickOutcome::Advanced(value) => {
            trace!("Demo progress {:.1}", value);
            UpdateResult::none()
        }
        TickOutcome::Completed => {
            info!("Encryption demo complete");
            UpdateResult::action_then(
                UpdateAction::CancelTimer(TimerKey::DemoTick),
                Message::PushToast {
                    kind: ToastKind::Success,
                    message: "Encryption demo complete".to_string(),
                },
            )
        }
        // Tick raced a reset or completion
        TickOutcome::Ignored => {
            UpdateResult::action(UpdateAction::CancelTimer(TimerKey::DemoTick))
        }
    }
}

pub fn handle_reset(state: &mut AppState) -> UpdateResult {
    state.demo.reset();
    state.demo_editing = false;
    UpdateResult::action(UpdateAction::CancelTimer(TimerKey::DemoTick))
}
