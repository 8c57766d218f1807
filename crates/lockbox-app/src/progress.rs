//! Simulated encryption demo: a fake asynchronous progress task
//!
//! The task only owns its state. The repeating tick that drives it is a timer
//! scheduled by the handler (see [`crate::handler::TimerKey::DemoTick`]).

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use lockbox_core::prelude::*;
use lockbox_core::ProgressStatus;
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Completion value; progress is clamped here
pub const PROGRESS_MAX: f64 = 100.0;

/// Per-tick increment bound used when none (or an unusable one) is configured
pub const DEFAULT_MAX_INCREMENT: f64 = 15.0;

/// Random characters appended to the preview
const PREVIEW_PADDING: usize = 16;

/// Outcome of a single tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Still running at the given value
    Advanced(f64),
    /// Reached 100 on this tick
    Completed,
    /// Not running; the tick was stale
    Ignored,
}

#[derive(Debug, Clone)]
pub struct SimulatedProgressTask {
    input: String,
    value: f64,
    status: ProgressStatus,
    output: Option<String>,
    max_increment: f64,
}

impl Default for SimulatedProgressTask {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_INCREMENT)
    }
}

impl SimulatedProgressTask {
    /// Build a task advancing by at most `max_increment` per tick.
    ///
    /// A bound that is not a positive finite number could never reach 100,
    /// so it is replaced by [`DEFAULT_MAX_INCREMENT`].
    pub fn new(max_increment: f64) -> Self {
        let max_increment = if max_increment.is_finite() && max_increment > 0.0 {
            max_increment
        } else {
            warn!(
                "Demo max_increment {} is not a positive number, using {}",
                max_increment, DEFAULT_MAX_INCREMENT
            );
            DEFAULT_MAX_INCREMENT
        };
        Self {
            input: String::new(),
            value: 0.0,
            status: ProgressStatus::Idle,
            output: None,
            max_increment,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn status(&self) -> ProgressStatus {
        self.status
    }

    /// Cosmetic preview, present once the task completed
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn is_running(&self) -> bool {
        self.status == ProgressStatus::Running
    }

    /// Replace the input text. Ignored while running.
    pub fn set_input(&mut self, input: impl Into<String>) {
        if !self.is_running() {
            self.input = input.into();
        }
    }

    pub fn push_char(&mut self, c: char) {
        if !self.is_running() {
            self.input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if !self.is_running() {
            self.input.pop();
        }
    }

    /// Begin a run.
    ///
    /// Returns false, leaving state untouched, when the input is blank or a
    /// run is already in progress.
    pub fn start(&mut self) -> bool {
        if self.input.trim().is_empty() {
            debug!("Demo start refused: empty input");
            return false;
        }
        if self.is_running() {
            debug!("Demo start ignored: already running");
            return false;
        }

        self.value = 0.0;
        self.output = None;
        self.status = ProgressStatus::Running;
        true
    }

    /// Advance by a uniform random increment in `[0, max_increment)`
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Ignored;
        }

        let step = rng.gen::<f64>() * self.max_increment;
        self.value = (self.value + step).min(PROGRESS_MAX);

        if self.value >= PROGRESS_MAX {
            self.value = PROGRESS_MAX;
            self.status = ProgressStatus::Complete;
            self.output = Some(scramble_preview(&self.input, rng));
            TickOutcome::Completed
        } else {
            TickOutcome::Advanced(self.value)
        }
    }

    /// Back to Idle with empty input, regardless of state
    pub fn reset(&mut self) {
        self.input.clear();
        self.value = 0.0;
        self.output = None;
        self.status = ProgressStatus::Idle;
    }
}

/// Visual stand-in for ciphertext: base64 of the input plus random padding.
///
/// This is not encryption. It is reversible and must never be presented as
/// protecting anything.
pub fn scramble_preview<R: Rng + ?Sized>(input: &str, rng: &mut R) -> String {
    let mut preview = STANDARD.encode(input.as_bytes());
    preview.extend((0..PREVIEW_PADDING).map(|_| char::from(rng.sample(Alphanumeric))));
    preview
}
