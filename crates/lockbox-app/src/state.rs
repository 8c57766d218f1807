//! Application state (Model in TEA pattern)

use std::time::Duration;

use lockbox_core::{AppPhase, ThemePreference};

use crate::config::{MemoryPreferenceStore, PreferenceStore, Settings};
use crate::content::{FAQ_ITEMS, TOUR_STEPS};
use crate::disclosure::{Accordion, TourStepper};
use crate::media::{load_hero_art, HeroArt};
use crate::progress::SimulatedProgressTask;
use crate::scroll::{PageViewState, ScrollSignal, ScrollThresholds};
use crate::theme::ThemeController;
use crate::toast::ToastCenter;

/// Which input context keys are routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Scrolling the page
    Browse,
    /// Typing into the demo input
    EditingDemo,
    /// The tour modal is open and captures input
    Tour,
}

/// Complete landing page state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current application phase
    pub phase: AppPhase,

    /// Application settings from config file
    pub settings: Settings,

    /// Persisted preference slots
    pub preferences: Box<dyn PreferenceStore>,

    pub theme: ThemeController,

    pub toasts: ToastCenter,

    pub faq: Accordion,

    /// FAQ item the keyboard cursor is on
    pub faq_cursor: usize,

    pub tour: TourStepper,

    pub demo: SimulatedProgressTask,

    /// Keys go to the demo input field
    pub demo_editing: bool,

    pub scroll: ScrollSignal,

    /// Viewport over the page, sized by the renderer
    pub page_view: PageViewState,

    pub hero_art: HeroArt,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Default settings over a volatile preference store
    pub fn new() -> Self {
        Self::with_settings(
            Settings::default(),
            Box::new(MemoryPreferenceStore::new()),
            None,
        )
    }

    /// Build state from settings, the preference store and the system theme signal
    pub fn with_settings(
        settings: Settings,
        preferences: Box<dyn PreferenceStore>,
        system_theme: Option<ThemePreference>,
    ) -> Self {
        let theme = ThemeController::load(preferences.as_ref(), system_theme);
        let tour = TourStepper::load(TOUR_STEPS.len(), preferences.as_ref());
        let toasts = ToastCenter::new(Duration::from_millis(settings.toasts.lifetime_ms));
        let demo = SimulatedProgressTask::new(settings.demo.max_increment);
        let scroll = ScrollSignal::new(ScrollThresholds::from(&settings.scroll));
        let hero_art = load_hero_art(settings.ui.hero_art.as_deref());

        Self {
            phase: AppPhase::Running,
            settings,
            preferences,
            theme,
            toasts,
            faq: Accordion::new(FAQ_ITEMS.len()),
            faq_cursor: 0,
            tour,
            demo,
            demo_editing: false,
            scroll,
            page_view: PageViewState::new(),
            hero_art,
        }
    }

    pub fn mode(&self) -> UiMode {
        if self.tour.is_open() {
            UiMode::Tour
        } else if self.demo_editing {
            UiMode::EditingDemo
        } else {
            UiMode::Browse
        }
    }

    /// Scroll position in page units, as fed to the [`ScrollSignal`]
    pub fn scroll_position(&self) -> u32 {
        let rows = u32::try_from(self.page_view.offset).unwrap_or(u32::MAX);
        rows.saturating_mul(self.settings.scroll.units_per_row)
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
