//! Semantic style builders.

use lockbox_core::ToastKind;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette::Palette;

pub fn page(p: &Palette) -> Style {
    Style::default().fg(p.text_primary).bg(p.background)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

pub fn heading(p: &Palette) -> Style {
    Style::default()
        .fg(p.text_primary)
        .add_modifier(Modifier::BOLD)
}

pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn accent_bold(p: &Palette) -> Style {
    accent(p).add_modifier(Modifier::BOLD)
}

/// Highlight for the item under the keyboard cursor
pub fn cursor(p: &Palette) -> Style {
    Style::default()
        .fg(p.accent)
        .bg(p.surface_raised)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding(p: &Palette) -> Style {
    Style::default()
        .fg(p.accent_alt)
        .add_modifier(Modifier::BOLD)
}

pub fn success(p: &Palette) -> Style {
    Style::default().fg(p.success)
}

pub fn error(p: &Palette) -> Style {
    Style::default().fg(p.error)
}

pub fn toast_accent(p: &Palette, kind: ToastKind) -> Style {
    let fg = match kind {
        ToastKind::Success => p.success,
        ToastKind::Error => p.error,
        ToastKind::Info => p.info,
    };
    Style::default().fg(fg)
}

/// Rounded card with an optional focus border
pub fn card(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            p.border_active
        } else {
            p.border
        }))
        .style(Style::default().bg(p.surface).fg(p.text_primary))
}
