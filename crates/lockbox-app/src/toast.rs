//! Toast notification queue
//!
//! The center only stores toasts; expiry timers are scheduled by the handler
//! through [`crate::UpdateAction`] so that removal stays a plain state change.

use std::time::Duration;

use chrono::{DateTime, Local};
use lockbox_core::{Toast, ToastId, ToastKind};

/// Default lifetime of a toast
pub const TOAST_LIFETIME: Duration = Duration::from_millis(5000);

/// Length of the enter/exit transitions drawn by the renderer
pub const TOAST_TRANSITION_MS: u64 = 300;

/// Where a toast is in its visible lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Shown,
    Leaving,
}

/// Ordered set of live toasts, oldest first
#[derive(Debug, Clone)]
pub struct ToastCenter {
    toasts: Vec<Toast>,
    next_id: u64,
    lifetime: Duration,
}

impl Default for ToastCenter {
    fn default() -> Self {
        Self::new(TOAST_LIFETIME)
    }
}

impl ToastCenter {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 1,
            lifetime,
        }
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Append a toast at the tail and return its id
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push(Toast::new(id, kind, message));
        id
    }

    /// Remove a toast on user request. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        self.remove(id)
    }

    /// Remove a toast whose lifetime elapsed. Stale expiries are no-ops.
    pub fn expire(&mut self, id: ToastId) -> bool {
        self.remove(id)
    }

    fn remove(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Live toasts in display order
    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    pub fn oldest(&self) -> Option<ToastId> {
        self.toasts.first().map(|t| t.id)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Drop every toast, returning the removed ids so their timers can be cancelled
    pub fn clear(&mut self) -> Vec<ToastId> {
        self.toasts.drain(..).map(|t| t.id).collect()
    }

    /// Transition phase of `toast` at `now`
    pub fn phase(&self, toast: &Toast, now: DateTime<Local>) -> ToastPhase {
        let age = toast.age_ms(now);
        let lifetime = self.lifetime.as_millis() as u64;

        if age < TOAST_TRANSITION_MS {
            ToastPhase::Entering
        } else if age + TOAST_TRANSITION_MS >= lifetime {
            ToastPhase::Leaving
        } else {
            ToastPhase::Shown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(center: &ToastCenter) -> Vec<ToastKind> {
        center.visible().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_push_preserves_arrival_order() {
        let mut center = ToastCenter::default();
        center.push(ToastKind::Info, "one");
        center.push(ToastKind::Success, "two");
        center.push(ToastKind::Error, "three");

        assert_eq!(
            kinds(&center),
            vec![ToastKind::Info, ToastKind::Success, ToastKind::Error]
        );
    }

    #[test]
    fn test_dismiss_middle_keeps_order() {
        let mut center = ToastCenter::default();
        center.push(ToastKind::Info, "one");
        let middle = center.push(ToastKind::Success, "two");
        center.push(ToastKind::Error, "three");

        assert!(center.dismiss(middle));
        assert_eq!(kinds(&center), vec![ToastKind::Info, ToastKind::Error]);
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut center = ToastCenter::default();
        let a = center.push(ToastKind::Info, "a");
        let b = center.push(ToastKind::Info, "b");
        center.dismiss(a);
        let c = center.push(ToastKind::Info, "c");

        assert!(a < b && b < c);
        assert_ne!(a, c);
    }

    #[test]
    fn test_stale_expiry_is_noop() {
        let mut center = ToastCenter::default();
        let id = center.push(ToastKind::Info, "bye");
        assert!(center.dismiss(id));

        assert!(!center.expire(id));
        assert!(center.is_empty());
    }

    #[test]
    fn test_count_tracks_push_dismiss_expire() {
        let mut center = ToastCenter::default();
        let ids: Vec<_> = (0..5)
            .map(|i| center.push(ToastKind::Info, format!("toast {}", i)))
            .collect();

        center.dismiss(ids[1]);
        center.expire(ids[3]);
        center.expire(ids[3]);

        assert_eq!(center.len(), 5 - 1 - 1);
    }

    #[test]
    fn test_clear_returns_ids() {
        let mut center = ToastCenter::default();
        let a = center.push(ToastKind::Info, "a");
        let b = center.push(ToastKind::Error, "b");

        assert_eq!(center.clear(), vec![a, b]);
        assert!(center.is_empty());
    }

    #[test]
    fn test_phase_windows() {
        let mut center = ToastCenter::default();
        let id = center.push(ToastKind::Info, "fade");
        let toast = center.get(id).unwrap().clone();
        let at = |ms: i64| toast.created_at + chrono::Duration::milliseconds(ms);

        assert_eq!(center.phase(&toast, at(0)), ToastPhase::Entering);
        assert_eq!(center.phase(&toast, at(1000)), ToastPhase::Shown);
        assert_eq!(center.phase(&toast, at(4800)), ToastPhase::Leaving);
    }
}
