//! Scheduled timers owned by the event loop
//!
//! Each timer is a tokio task that only sends a [`Message`] back to the loop.
//! Tasks never touch state, so aborting one is always safe.

use std::collections::HashMap;
use std::time::Duration;

use lockbox_core::prelude::*;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::handler::TimerKey;
use crate::message::Message;

/// Shortest repeating period accepted
pub const MIN_REPEAT_INTERVAL: Duration = Duration::from_millis(10);

/// Live timers keyed by [`TimerKey`]; dropping the registry aborts them all
#[derive(Debug, Default)]
pub struct TimerRegistry {
    timers: HashMap<TimerKey, JoinHandle<()>>,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send `message` once after `after`, replacing any timer under `key`
    pub fn schedule_once(
        &mut self,
        key: TimerKey,
        after: Duration,
        message: Message,
        msg_tx: mpsc::Sender<Message>,
    ) {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            if msg_tx.send(message).await.is_err() {
                trace!("Timer {:?} fired after the loop closed", key);
            }
        });
        self.insert(key, handle);
    }

    /// Send `message` every `every` until cancelled, replacing any timer under `key`
    pub fn schedule_repeating(
        &mut self,
        key: TimerKey,
        every: Duration,
        message: Message,
        msg_tx: mpsc::Sender<Message>,
    ) {
        let every = every.max(MIN_REPEAT_INTERVAL);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            // The first tick completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if msg_tx.send(message.clone()).await.is_err() {
                    break;
                }
            }
        });
        self.insert(key, handle);
    }

    fn insert(&mut self, key: TimerKey, handle: JoinHandle<()>) {
        if let Some(old) = self.timers.insert(key, handle) {
            debug!("Replacing live timer {:?}", key);
            old.abort();
        }
    }

    /// Abort the timer under `key`. Returns false if none was live.
    pub fn cancel(&mut self, key: TimerKey) -> bool {
        match self.timers.remove(&key) {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.timers.drain() {
            handle.abort();
        }
    }

    /// Whether a timer is registered and has not finished
    pub fn is_pending(&self, key: TimerKey) -> bool {
        self.timers.get(&key).is_some_and(|h| !h.is_finished())
    }

    /// Forget one-shot timers that already fired
    pub fn prune_finished(&mut self) {
        self.timers.retain(|_, handle| !handle.is_finished());
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

impl Drop for TimerRegistry {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
