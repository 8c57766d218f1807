//! Top navigation bar
//!
//! Full height with a border at the top of the page, compact once the page
//! is scrolled past the nav threshold.

use lockbox_app::content::PRODUCT_NAME;
use lockbox_core::ThemePreference;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::icons::IconSet;
use crate::theme::palette::Palette;
use crate::theme::styles;

/// Rows used by the bar in each style
pub const NAV_HEIGHT: u16 = 3;
pub const NAV_HEIGHT_COMPACT: u16 = 1;

pub struct NavBar<'a> {
    palette: &'a Palette,
    icons: IconSet,
    theme: ThemePreference,
    scrolled: bool,
}

impl<'a> NavBar<'a> {
    pub fn new(palette: &'a Palette, icons: IconSet, theme: ThemePreference) -> Self {
        Self {
            palette,
            icons,
            theme,
            scrolled: false,
        }
    }

    pub fn scrolled(mut self, scrolled: bool) -> Self {
        self.scrolled = scrolled;
        self
    }

    pub fn height(&self) -> u16 {
        if self.scrolled {
            NAV_HEIGHT_COMPACT
        } else {
            NAV_HEIGHT
        }
    }

    fn content(&self) -> Line<'static> {
        let p = self.palette;
        Line::from(vec![
            Span::styled(
                format!(" {} {} ", self.icons.lock(), PRODUCT_NAME),
                styles::accent_bold(p),
            ),
            Span::styled(" [t] ", styles::keybinding(p)),
            Span::styled(format!("{} ", self.theme), styles::text_secondary(p)),
            Span::styled(" [?] ", styles::keybinding(p)),
            Span::styled("tour ", styles::text_secondary(p)),
            Span::styled(" [o] ", styles::keybinding(p)),
            Span::styled("Open Free", styles::accent(p)),
        ])
    }
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.scrolled {
            Paragraph::new(self.content())
                .style(Style::default().bg(self.palette.surface_raised))
                .render(area, buf);
        } else {
            Paragraph::new(self.content())
                .block(styles::card(self.palette, false))
                .render(area, buf);
        }
    }
}
