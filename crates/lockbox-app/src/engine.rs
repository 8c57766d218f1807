//! Engine - owns the state, the message channel and the timers
//!
//! Front ends drive the engine: feed it input messages, drain timer messages
//! before each frame, and read `state` to render.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;
use crate::timers::TimerRegistry;

/// Capacity of the message channel
const CHANNEL_CAPACITY: usize = 256;

pub struct Engine {
    /// Application state (the Model)
    pub state: AppState,

    msg_tx: mpsc::Sender<Message>,

    msg_rx: mpsc::Receiver<Message>,

    timers: TimerRegistry,

    /// OS signal listener, present between `start` and `shutdown`
    signal_task: Option<JoinHandle<()>>,
}

impl Engine {
    /// Wrap `state`. Nothing is scheduled until [`Engine::start`].
    pub fn new(state: AppState) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);
        Self {
            state,
            msg_tx,
            msg_rx,
            timers: TimerRegistry::new(),
            signal_task: None,
        }
    }

    /// Mount the page: install the signal handler and run startup
    pub fn start(&mut self) {
        if let Some(old) = self
            .signal_task
            .replace(signals::spawn_signal_handler(self.msg_tx.clone()))
        {
            old.abort();
        }
        self.process_message(Message::Startup);
    }

    /// Process a single message through the TEA update cycle
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &mut self.timers, &self.msg_tx);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        if count > 0 {
            self.timers.prune_finished();
        }
        count
    }

    pub fn timers(&self) -> &TimerRegistry {
        &self.timers
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Whether the OS signal listener is still installed
    pub fn is_listening_for_signals(&self) -> bool {
        self.signal_task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Tear down: stop the signal listener, cancel timers and stop listening to scroll
    pub fn shutdown(&mut self) {
        info!("Engine shutting down");
        if let Some(task) = self.signal_task.take() {
            task.abort();
        }
        self.state.scroll.unsubscribe();
        self.timers.cancel_all();
        let dropped = std::iter::from_fn(|| self.msg_rx.try_recv().ok()).count();
        if dropped > 0 {
            debug!("Dropped {} pending messages", dropped);
        }
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        if let Some(task) = self.signal_task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::{MemoryPreferenceStore, Settings, TOUR_SEEN_KEY};
    use crate::handler::TimerKey;
    use lockbox_core::{ProgressStatus, ToastKind};

    fn engine() -> Engine {
        Engine::new(AppState::new())
    }

    /// Let timer tasks run, then process what they sent
    async fn advance(engine: &mut Engine, ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
        engine.drain_pending_messages();
    }

    #[tokio::test]
    async fn test_engine_drain_empty_channel() {
        let mut engine = engine();
        assert_eq!(engine.drain_pending_messages(), 0);
    }

    #[tokio::test]
    async fn test_engine_process_quit_message() {
        let mut engine = engine();
        engine.process_message(Message::Quit);
        assert!(engine.should_quit());
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_expires_after_lifetime() {
        let mut engine = engine();
        engine.process_message(Message::PushToast {
            kind: ToastKind::Info,
            message: "short lived".to_string(),
        });

        advance(&mut engine, 4999).await;
        assert_eq!(engine.state.toasts.len(), 1);

        advance(&mut engine, 2).await;
        assert!(engine.state.toasts.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismissed_toast_timer_is_cancelled() {
        let mut engine = engine();
        engine.process_message(Message::PushToast {
            kind: ToastKind::Success,
            message: "bye".to_string(),
        });
        let id = engine.state.toasts.visible()[0].id;

        engine.process_message(Message::DismissToast(id));
        assert!(engine.state.toasts.is_empty());
        assert!(!engine.timers().is_pending(TimerKey::ToastExpiry(id)));

        advance(&mut engine, 6000).await;
        assert!(engine.state.toasts.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_tour_auto_opens_after_delay() {
        let mut engine = engine();
        engine.process_message(Message::Startup);

        advance(&mut engine, 1999).await;
        assert!(!engine.state.tour.is_open());

        advance(&mut engine, 2).await;
        assert!(engine.state.tour.is_open());
    }

    #[tokio::test(start_paused = true)]
    async fn test_tour_does_not_auto_open_when_seen() {
        let store = MemoryPreferenceStore::new().with_value(TOUR_SEEN_KEY, "true");
        let state = AppState::with_settings(Settings::default(), Box::new(store), None);
        let mut engine = Engine::new(state);
        engine.process_message(Message::Startup);

        advance(&mut engine, 5000).await;
        assert!(!engine.state.tour.is_open());
    }

    #[tokio::test(start_paused = true)]
    async fn test_demo_completes_and_stops_ticking() {
        let mut engine = engine();
        engine.state.demo.set_input("secret");
        engine.process_message(Message::StartDemo);
        assert_eq!(engine.state.demo.status(), ProgressStatus::Running);

        let mut elapsed = 0;
        while engine.state.demo.status() == ProgressStatus::Running {
            advance(&mut engine, 100).await;
            elapsed += 100;
            assert!(elapsed < 600_000, "demo never completed");
            assert!(engine.state.demo.value() <= 100.0);
        }

        assert_eq!(engine.state.demo.status(), ProgressStatus::Complete);
        assert_eq!(engine.state.demo.value(), 100.0);
        assert!(!engine.timers().is_pending(TimerKey::DemoTick));
        assert_eq!(engine.state.toasts.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_stops_demo_ticks() {
        let mut engine = engine();
        engine.state.demo.set_input("secret");
        engine.process_message(Message::StartDemo);
        advance(&mut engine, 100).await;

        engine.process_message(Message::ResetDemo);
        advance(&mut engine, 1000).await;

        assert_eq!(engine.state.demo.status(), ProgressStatus::Idle);
        assert_eq!(engine.state.demo.value(), 0.0);
        assert!(engine.timers().is_empty());
    }

    #[tokio::test]
    async fn test_shutdown_stops_signal_listener() {
        let mut engine = engine();
        assert!(!engine.is_listening_for_signals());

        engine.start();
        assert!(engine.is_listening_for_signals());

        engine.shutdown();
        assert!(!engine.is_listening_for_signals());
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_pending_timers() {
        let mut engine = engine();
        engine.process_message(Message::Startup);
        engine.process_message(Message::PushToast {
            kind: ToastKind::Info,
            message: "pending".to_string(),
        });
        assert!(!engine.timers().is_empty());

        engine.shutdown();

        assert!(engine.timers().is_empty());
        assert!(!engine.state.scroll.is_subscribed());
        advance(&mut engine, 10_000).await;
        assert!(!engine.state.tour.is_open());
    }
}
