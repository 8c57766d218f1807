//! Page scroll position and the UI flags derived from it
//!
//! [`PageViewState`] tracks the viewport in terminal rows; [`ScrollSignal`]
//! turns the resulting position into the nav "scrolled" and "back to top"
//! flags.

use lockbox_core::prelude::*;

use crate::config::ScrollSettings;

// ─────────────────────────────────────────────────────────────────────────────
// PageViewState
// ─────────────────────────────────────────────────────────────────────────────

/// Viewport over the rendered page, measured in rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageViewState {
    /// First visible row
    pub offset: usize,
    /// Total rendered rows, updated by the renderer each frame
    pub total_lines: usize,
    /// Rows that fit in the viewport
    pub visible_lines: usize,
}

impl PageViewState {
    pub fn new() -> Self {
        Self::default()
    }

    fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn page_up(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_up(page);
    }

    pub fn page_down(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_down(page);
    }

    /// Update with new content size, keeping the offset in range
    pub fn update_content_size(&mut self, total: usize, visible: usize) {
        self.total_lines = total;
        self.visible_lines = visible;
        self.offset = self.offset.min(self.max_offset());
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ScrollSignal
// ─────────────────────────────────────────────────────────────────────────────

/// Fixed position thresholds for the derived flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollThresholds {
    pub scrolled: u32,
    pub back_to_top: u32,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            scrolled: 50,
            back_to_top: 500,
        }
    }
}

impl From<&ScrollSettings> for ScrollThresholds {
    fn from(settings: &ScrollSettings) -> Self {
        Self {
            scrolled: settings.scrolled_threshold,
            back_to_top: settings.back_to_top_threshold,
        }
    }
}

/// Flags derived from a scroll position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollFlags {
    /// Nav bar switches to its compact style
    pub scrolled: bool,
    /// The back-to-top button is shown
    pub show_back_to_top: bool,
}

impl ScrollFlags {
    pub fn from_position(position: u32, thresholds: ScrollThresholds) -> Self {
        Self {
            scrolled: position > thresholds.scrolled,
            show_back_to_top: position > thresholds.back_to_top,
        }
    }
}

/// Scroll listener with an explicit subscription lifetime
#[derive(Debug, Clone)]
pub struct ScrollSignal {
    thresholds: ScrollThresholds,
    subscribed: bool,
    position: u32,
    flags: ScrollFlags,
}

impl Default for ScrollSignal {
    fn default() -> Self {
        Self::new(ScrollThresholds::default())
    }
}

impl ScrollSignal {
    /// An unsubscribed signal at position 0
    pub fn new(thresholds: ScrollThresholds) -> Self {
        Self {
            thresholds,
            subscribed: false,
            position: 0,
            flags: ScrollFlags::default(),
        }
    }

    pub fn subscribe(&mut self) {
        if !self.subscribed {
            debug!("Scroll signal subscribed");
            self.subscribed = true;
        }
    }

    /// Stop listening; later events are ignored
    pub fn unsubscribe(&mut self) {
        if self.subscribed {
            debug!("Scroll signal unsubscribed");
            self.subscribed = false;
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Feed a scroll event.
    ///
    /// Returns true when the derived flags changed. Events while
    /// unsubscribed, or with an unchanged position, are dropped.
    pub fn on_scroll(&mut self, position: u32) -> bool {
        if !self.subscribed || position == self.position {
            return false;
        }
        self.position = position;

        let flags = ScrollFlags::from_position(position, self.thresholds);
        let changed = flags != self.flags;
        if changed {
            trace!("Scroll flags changed at {}: {:?}", position, flags);
        }
        self.flags = flags;
        changed
    }

    pub fn flags(&self) -> ScrollFlags {
        self.flags
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn thresholds(&self) -> ScrollThresholds {
        self.thresholds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subscribed() -> ScrollSignal {
        let mut signal = ScrollSignal::default();
        signal.subscribe();
        signal
    }

    #[test]
    fn test_flags_use_strict_thresholds() {
        let t = ScrollThresholds::default();
        assert_eq!(ScrollFlags::from_position(50, t), ScrollFlags::default());
        assert!(ScrollFlags::from_position(51, t).scrolled);
        assert!(!ScrollFlags::from_position(500, t).show_back_to_top);
        assert!(ScrollFlags::from_position(501, t).show_back_to_top);
    }

    #[test]
    fn test_flags_are_independent() {
        let mut signal = subscribed();
        assert!(signal.on_scroll(100));
        assert_eq!(
            signal.flags(),
            ScrollFlags {
                scrolled: true,
                show_back_to_top: false
            }
        );

        assert!(signal.on_scroll(900));
        assert!(signal.flags().scrolled && signal.flags().show_back_to_top);
    }

    #[test]
    fn test_unchanged_flags_report_no_change() {
        let mut signal = subscribed();
        signal.on_scroll(100);
        assert!(!signal.on_scroll(120));
        assert_eq!(signal.position(), 120);
    }

    #[test]
    fn test_events_ignored_when_unsubscribed() {
        let mut signal = ScrollSignal::default();
        assert!(!signal.on_scroll(1000));
        assert_eq!(signal.position(), 0);

        signal.subscribe();
        signal.on_scroll(1000);
        signal.unsubscribe();
        assert!(!signal.on_scroll(0));
        assert!(signal.flags().show_back_to_top);
    }

    #[test]
    fn test_back_to_top_clears_flags() {
        let mut signal = subscribed();
        signal.on_scroll(800);
        assert!(signal.on_scroll(0));
        assert_eq!(signal.flags(), ScrollFlags::default());
    }

    #[test]
    fn test_page_view_clamps_offset() {
        let mut view = PageViewState::new();
        view.update_content_size(100, 20);

        view.scroll_down(500);
        assert_eq!(view.offset, 80);

        view.scroll_up(1000);
        assert_eq!(view.offset, 0);

        view.page_down();
        assert_eq!(view.offset, 18);

        view.scroll_down(100);
        view.update_content_size(50, 20);
        assert_eq!(view.offset, 30);
    }

    #[test]
    fn test_page_view_short_content_never_scrolls() {
        let mut view = PageViewState::new();
        view.update_content_size(10, 20);
        view.scroll_down(5);
        assert_eq!(view.offset, 0);
    }
}
