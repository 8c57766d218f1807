//! Feature tour modal
//!
//! Drawn over a dimmed page while the tour is open.

use lockbox_app::content::TOUR_STEPS;
use lockbox_app::{TourAction, TourStepper};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Widget, Wrap};

use super::modal_overlay::{centered_rect, dim_background};
use crate::theme::palette::Palette;
use crate::theme::styles;

const MODAL_WIDTH: u16 = 56;
const MODAL_HEIGHT: u16 = 12;

pub struct TourModal<'a> {
    tour: &'a TourStepper,
    palette: &'a Palette,
}

impl<'a> TourModal<'a> {
    pub fn new(tour: &'a TourStepper, palette: &'a Palette) -> Self {
        Self { tour, palette }
    }

    fn buttons(&self) -> Line<'static> {
        let p = self.palette;
        let mut spans = Vec::new();
        if self.tour.can_go_back() {
            spans.push(Span::styled("[p]", styles::keybinding(p)));
            spans.push(Span::styled(" Back   ", styles::text_secondary(p)));
        }
        let primary = match self.tour.primary_action() {
            TourAction::Next => " Next   ",
            TourAction::Finish => " Finish   ",
        };
        spans.push(Span::styled("[n]", styles::keybinding(p)));
        spans.push(Span::styled(primary, styles::accent_bold(p)));
        spans.push(Span::styled("[Esc]", styles::keybinding(p)));
        spans.push(Span::styled(" Skip", styles::text_muted(p)));
        Line::from(spans)
    }
}

impl Widget for TourModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.tour.is_open() {
            return;
        }
        let Some(step) = TOUR_STEPS.get(self.tour.current()) else {
            return;
        };
        let p = self.palette;

        dim_background(buf, area, p);
        let modal = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        Clear.render(modal, buf);

        let block = styles::card(p, true).title(Span::styled(" Tour ", styles::accent_bold(p)));
        let inner = block.inner(modal);
        block.render(modal, buf);

        let lines = vec![
            Line::from(Span::styled(
                format!("Step {} of {}", self.tour.current() + 1, self.tour.len()),
                styles::text_muted(p),
            )),
            Line::default(),
            Line::from(Span::styled(step.title, styles::heading(p))),
            Line::default(),
            Line::from(Span::styled(step.body, styles::text_secondary(p))),
        ];
        let body = Rect::new(
            inner.x + 1,
            inner.y,
            inner.width.saturating_sub(2),
            inner.height.saturating_sub(1),
        );
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(body, buf);

        if inner.height > 0 {
            let footer = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
            Paragraph::new(self.buttons())
                .alignment(Alignment::Center)
                .render(footer, buf);
        }
    }
}
