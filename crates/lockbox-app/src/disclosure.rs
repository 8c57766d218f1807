//! Progressive disclosure state: FAQ accordion and feature tour stepper

use lockbox_core::prelude::*;

use crate::config::{PreferenceStore, TOUR_SEEN_KEY};

// ─────────────────────────────────────────────────────────────────────────────
// Accordion
// ─────────────────────────────────────────────────────────────────────────────

/// At most one open item among `len`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    active: Option<usize>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { len, active: None }
    }

    /// Open `index`, or close it if it is already the open item.
    ///
    /// Out-of-range indices are ignored and return false.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            debug!("Accordion select out of range: {} >= {}", index, self.len);
            return false;
        }
        self.active = if self.active == Some(index) {
            None
        } else {
            Some(index)
        };
        true
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tour stepper
// ─────────────────────────────────────────────────────────────────────────────

/// The primary button shown on the current tour step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourAction {
    Next,
    Finish,
}

/// Result of pressing the primary button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourAdvance {
    /// Moved to the given step
    Stepped(usize),
    /// The last step was confirmed; the tour closed
    Finished,
    /// The tour is not open
    Ignored,
}

/// Linear, bounded step sequence shown in a modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourStepper {
    len: usize,
    current: usize,
    open: bool,
    seen: bool,
}

impl TourStepper {
    /// A closed stepper over `len` steps (`len` is at least 1)
    pub fn new(len: usize, seen: bool) -> Self {
        Self {
            len: len.max(1),
            current: 0,
            open: false,
            seen,
        }
    }

    /// Build from the persisted `tour_seen` slot
    pub fn load(len: usize, store: &dyn PreferenceStore) -> Self {
        Self::new(len, store.get_flag(TOUR_SEEN_KEY))
    }

    /// First-visit policy: auto-open only when never seen
    pub fn should_auto_open(&self) -> bool {
        !self.seen && !self.open
    }

    /// Open at step 0
    pub fn open(&mut self) {
        self.current = 0;
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_seen(&self) -> bool {
        self.seen
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.len
    }

    pub fn primary_action(&self) -> TourAction {
        if self.is_last() {
            TourAction::Finish
        } else {
            TourAction::Next
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.open && self.current > 0
    }

    /// Press the primary button: step forward, or finish on the last step
    pub fn next(&mut self, store: &mut dyn PreferenceStore) -> TourAdvance {
        if !self.open {
            return TourAdvance::Ignored;
        }
        match self.primary_action() {
            TourAction::Next => {
                self.current += 1;
                TourAdvance::Stepped(self.current)
            }
            TourAction::Finish => {
                self.close(store);
                TourAdvance::Finished
            }
        }
    }

    /// Step back; a no-op on step 0
    pub fn previous(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Close the modal and remember that the tour was seen
    pub fn close(&mut self, store: &mut dyn PreferenceStore) {
        self.open = false;
        self.current = 0;
        self.mark_seen(store);
    }

    /// Persist the seen flag. Only the first call writes.
    ///
    /// Returns true when this call recorded the flag.
    fn mark_seen(&mut self, store: &mut dyn PreferenceStore) -> bool {
        if self.seen {
            return false;
        }
        self.seen = true;
        if let Err(e) = store.set(TOUR_SEEN_KEY, "true") {
            warn!("Tour seen flag not persisted: {}", e);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryPreferenceStore;
    use lockbox_core::Result;

    #[test]
    fn test_accordion_double_select_closes() {
        let mut faq = Accordion::new(4);
        assert!(faq.select(2));
        assert_eq!(faq.active(), Some(2));

        assert!(faq.select(2));
        assert_eq!(faq.active(), None);
    }

    #[test]
    fn test_accordion_single_expansion() {
        let mut faq = Accordion::new(4);
        faq.select(0);
        faq.select(3);

        assert!(!faq.is_open(0));
        assert!(faq.is_open(3));
    }

    #[test]
    fn test_accordion_out_of_range_ignored() {
        let mut faq = Accordion::new(2);
        faq.select(1);

        assert!(!faq.select(2));
        assert_eq!(faq.active(), Some(1));
    }

    #[test]
    fn test_tour_previous_at_start_is_noop() {
        let mut tour = TourStepper::new(4, false);
        tour.open();

        assert!(!tour.previous());
        assert_eq!(tour.current(), 0);
    }

    #[test]
    fn test_tour_walks_forward_and_back() {
        let mut store = MemoryPreferenceStore::new();
        let mut tour = TourStepper::new(3, false);
        tour.open();

        assert_eq!(tour.next(&mut store), TourAdvance::Stepped(1));
        assert_eq!(tour.next(&mut store), TourAdvance::Stepped(2));
        assert_eq!(tour.primary_action(), TourAction::Finish);
        assert!(tour.previous());
        assert_eq!(tour.current(), 1);
        assert_eq!(tour.primary_action(), TourAction::Next);
    }

    /// Counts writes so "exactly once" can be asserted
    #[derive(Debug, Default)]
    struct CountingStore {
        inner: MemoryPreferenceStore,
        writes: usize,
    }

    impl PreferenceStore for CountingStore {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            self.writes += 1;
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<()> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn test_tour_finish_persists_seen_exactly_once() {
        let mut store = CountingStore::default();
        let mut tour = TourStepper::new(2, false);
        tour.open();

        tour.next(&mut store);
        assert_eq!(tour.next(&mut store), TourAdvance::Finished);
        assert!(!tour.is_open());
        assert!(store.get_flag(TOUR_SEEN_KEY));

        // Reopening and finishing again must not write again
        tour.open();
        tour.next(&mut store);
        tour.next(&mut store);
        assert_eq!(store.writes, 1);
    }

    #[test]
    fn test_tour_next_when_closed_is_ignored() {
        let mut store = MemoryPreferenceStore::new();
        let mut tour = TourStepper::new(3, false);
        assert_eq!(tour.next(&mut store), TourAdvance::Ignored);
        assert!(!store.get_flag(TOUR_SEEN_KEY));
    }

    #[test]
    fn test_tour_auto_open_policy() {
        let store = MemoryPreferenceStore::new();
        assert!(TourStepper::load(3, &store).should_auto_open());

        let seen = MemoryPreferenceStore::new().with_value(TOUR_SEEN_KEY, "true");
        assert!(!TourStepper::load(3, &seen).should_auto_open());
    }

    #[test]
    fn test_tour_skip_marks_seen() {
        let mut store = MemoryPreferenceStore::new();
        let mut tour = TourStepper::new(3, false);
        tour.open();
        tour.close(&mut store);

        assert!(tour.is_seen());
        assert!(!tour.should_auto_open());
        assert!(store.get_flag(TOUR_SEEN_KEY));
    }

    #[test]
    fn test_tour_seen_with_failing_store_still_closes() {
        let mut store = MemoryPreferenceStore::read_only();
        let mut tour = TourStepper::new(1, false);
        tour.open();

        assert_eq!(tour.next(&mut store), TourAdvance::Finished);
        assert!(tour.is_seen());
        assert!(!tour.is_open());
    }

    #[test]
    fn test_single_step_tour_starts_on_finish() {
        let tour = TourStepper::new(0, false);
        assert_eq!(tour.len(), 1);
        assert_eq!(tour.primary_action(), TourAction::Finish);
    }
}
