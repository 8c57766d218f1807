//! Message processing: runs the TEA update loop and dispatches actions

use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use crate::timers::TimerRegistry;

/// Process a message and every follow-up it produces
pub fn process_message(
    state: &mut AppState,
    message: Message,
    timers: &mut TimerRegistry,
    msg_tx: &mpsc::Sender<Message>,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, timers, msg_tx);
        }

        msg = result.message;
    }
}
