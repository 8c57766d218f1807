//! Bottom key hint bar with the back-to-top affordance

use lockbox_app::UiMode;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::icons::IconSet;
use crate::theme::palette::Palette;
use crate::theme::styles;

pub struct StatusBar<'a> {
    palette: &'a Palette,
    icons: IconSet,
    mode: UiMode,
    show_back_to_top: bool,
}

impl<'a> StatusBar<'a> {
    pub fn new(palette: &'a Palette, icons: IconSet, mode: UiMode) -> Self {
        Self {
            palette,
            icons,
            mode,
            show_back_to_top: false,
        }
    }

    pub fn show_back_to_top(mut self, show: bool) -> Self {
        self.show_back_to_top = show;
        self
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.mode {
            UiMode::Browse => &[
                ("j/k", "scroll"),
                ("Tab", "faq"),
                ("Enter", "open"),
                ("e", "demo"),
                ("d", "dismiss"),
                ("q", "quit"),
            ],
            UiMode::EditingDemo => &[("Enter", "encrypt"), ("Esc", "done")],
            UiMode::Tour => &[("n", "next"), ("p", "back"), ("Esc", "skip")],
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let mut spans = Vec::new();
        if self.show_back_to_top {
            spans.push(Span::styled(
                format!(" {} Home: back to top ", self.icons.arrow_up()),
                styles::accent_bold(p),
            ));
        }
        for (key, label) in self.hints() {
            spans.push(Span::styled(format!(" {key} "), styles::keybinding(p)));
            spans.push(Span::styled(format!("{label} "), styles::text_muted(p)));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(p.surface))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use lockbox_app::config::IconMode;
    use lockbox_app::ThemeTokens;
    use lockbox_core::ThemePreference;

    #[test]
    fn test_back_to_top_only_when_flagged() {
        let palette = Palette::from(&ThemeTokens::for_theme(ThemePreference::Dark));
        let icons = IconSet::new(IconMode::Ascii);
        let mut term = TestTerminal::with_size(120, 1);

        term.render_widget(StatusBar::new(&palette, icons, UiMode::Browse), term.area());
        assert!(!term.buffer_contains("back to top"));

        term.render_widget(
            StatusBar::new(&palette, icons, UiMode::Browse).show_back_to_top(true),
            term.area(),
        );
        assert!(term.buffer_contains("back to top"));
    }

    #[test]
    fn test_hints_follow_mode() {
        let palette = Palette::from(&ThemeTokens::for_theme(ThemePreference::Dark));
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(
            StatusBar::new(&palette, IconSet::new(IconMode::Ascii), UiMode::Tour),
            term.area(),
        );
        assert!(term.buffer_contains("skip"));
        assert!(!term.buffer_contains("scroll"));
    }
}
