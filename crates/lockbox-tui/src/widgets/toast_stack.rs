//! Stack of toast cards anchored to the top right corner

use chrono::{DateTime, Local};
use lockbox_app::{ToastCenter, ToastPhase};
use lockbox_core::Toast;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Widget};

use crate::theme::icons::IconSet;
use crate::theme::palette::Palette;
use crate::theme::styles;

/// Card width, clamped to the area
pub const TOAST_WIDTH: u16 = 44;
/// Border plus one line of text
pub const TOAST_HEIGHT: u16 = 3;

pub struct ToastStack<'a> {
    center: &'a ToastCenter,
    palette: &'a Palette,
    icons: IconSet,
    now: DateTime<Local>,
}

impl<'a> ToastStack<'a> {
    pub fn new(center: &'a ToastCenter, palette: &'a Palette, icons: IconSet) -> Self {
        Self {
            center,
            palette,
            icons,
            now: Local::now(),
        }
    }

    /// Clock used for the enter/leave dimming
    pub fn at(mut self, now: DateTime<Local>) -> Self {
        self.now = now;
        self
    }

    fn card_area(area: Rect, index: u16) -> Option<Rect> {
        let width = TOAST_WIDTH.min(area.width);
        let y = area.y + index * TOAST_HEIGHT;
        if y + TOAST_HEIGHT > area.y + area.height {
            return None;
        }
        Some(Rect::new(
            area.x + area.width - width,
            y,
            width,
            TOAST_HEIGHT,
        ))
    }

    fn render_toast(&self, toast: &Toast, rect: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let mut block = styles::card(p, false).border_style(styles::toast_accent(p, toast.kind));
        let mut text_style = Style::default().fg(p.text_primary);

        // Entering and leaving toasts are drawn faded
        if self.center.phase(toast, self.now) != ToastPhase::Shown {
            block = block.style(Style::default().bg(p.surface).add_modifier(Modifier::DIM));
            text_style = text_style.add_modifier(Modifier::DIM);
        }

        let line = Line::from(vec![
            Span::styled(
                format!("{} ", self.icons.toast(toast.kind)),
                styles::toast_accent(p, toast.kind),
            ),
            Span::styled(toast.message.clone(), text_style),
        ]);

        Clear.render(rect, buf);
        Paragraph::new(line).block(block).render(rect, buf);
    }
}

impl Widget for ToastStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (index, toast) in self.center.visible().iter().enumerate() {
            let Some(rect) = u16::try_from(index)
                .ok()
                .and_then(|i| Self::card_area(area, i))
            else {
                break;
            };
            self.render_toast(toast, rect, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use lockbox_app::config::IconMode;
    use lockbox_app::ThemeTokens;
    use lockbox_core::{ThemePreference, ToastKind};

    fn palette() -> Palette {
        Palette::from(&ThemeTokens::for_theme(ThemePreference::Dark))
    }

    #[test]
    fn test_toasts_stack_in_arrival_order() {
        let palette = palette();
        let mut center = ToastCenter::default();
        center.push(ToastKind::Info, "first toast");
        center.push(ToastKind::Error, "second toast");

        let mut term = TestTerminal::new();
        term.render_widget(
            ToastStack::new(&center, &palette, IconSet::new(IconMode::Ascii)),
            term.area(),
        );

        let first = term.find_line("first toast").expect("first toast drawn");
        let second = term.find_line("second toast").expect("second toast drawn");
        assert!(first < second);
        assert!(term.buffer_contains("! second toast"));
    }

    #[test]
    fn test_overflowing_toasts_are_clipped() {
        let palette = palette();
        let mut center = ToastCenter::default();
        for i in 0..10 {
            center.push(ToastKind::Success, format!("toast {i}"));
        }

        let mut term = TestTerminal::with_size(60, 7);
        term.render_widget(
            ToastStack::new(&center, &palette, IconSet::new(IconMode::Ascii)),
            term.area(),
        );

        assert!(term.buffer_contains("toast 0"));
        assert!(term.buffer_contains("toast 1"));
        assert!(!term.buffer_contains("toast 2"));
    }

    #[test]
    fn test_cards_are_right_aligned() {
        let area = Rect::new(0, 0, 100, 20);
        let rect = ToastStack::card_area(area, 1).unwrap();
        assert_eq!(rect.x + rect.width, 100);
        assert_eq!(rect.y, TOAST_HEIGHT);
    }
}
