//! Main render/view function (View in TEA pattern)


use lockbox_app::AppState;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::theme::icons::IconSet;
use crate::theme::palette::Palette;
use crate::widgets;

/// Render the complete UI (View function in TEA)
///
/// Only the viewport size of the page is written back to state, so scrolling
/// can be clamped to the real page height.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let palette = Palette::from(state.theme.tokens());
    let icons = IconSet::new(state.settings.ui.icons);

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let flags = state.scroll.flags();
    let nav =
        widgets::NavBar::new(&palette, icons, state.theme.current()).scrolled(flags.scrolled);
    let [nav_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(nav.height()),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(nav, nav_area);
    render_page(frame, state, &palette, icons, body_area);
    frame.render_widget(
        widgets::StatusBar::new(&palette, icons, state.mode())
            .show_back_to_top(flags.show_back_to_top),
        status_area,
    );

    if !state.toasts.is_empty() {
        frame.render_widget(
            widgets::ToastStack::new(&state.toasts, &palette, icons),
            body_area,
        );
    }

    if state.tour.is_open() {
        frame.render_widget(widgets::TourModal::new(&state.tour, &palette), area);
    }
}

fn render_page(
    frame: &mut Frame,
    state: &mut AppState,
    palette: &Palette,
    icons: IconSet,
    area: Rect,
) {
    let lines = widgets::build_page(state, palette, icons, area.width);
    state
        .page_view
        .update_content_size(lines.len(), usize::from(area.height));

    let offset = u16::try_from(state.page_view.offset).unwrap_or(u16::MAX);
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().bg(palette.background).fg(palette.text_primary))
            .scroll((offset, 0)),
        area,
    );
}
