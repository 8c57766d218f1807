//! The scrollable page body
//!
//! Sections are flattened into one list of lines so the viewport can scroll
//! over them and the page height is known before drawing.

use lockbox_app::config::IconMode;
use lockbox_app::content::{
    ComparisonRow, Feature, COMPARISON, DEMO_DISCLAIMER, FAQ_ITEMS, FEATURES, HERO_BODY,
    PRODUCT_NAME, TAGLINE,
};
use lockbox_app::media::HeroArt;
use lockbox_app::AppState;
use lockbox_core::ProgressStatus;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::theme::icons::IconSet;
use crate::theme::palette::Palette;
use crate::theme::styles;

/// Left margin of section bodies
const INDENT: &str = "  ";

/// Cells used by the demo progress bar
const BAR_WIDTH: usize = 30;

/// Build every line of the page for a viewport `width` cells wide
pub fn build_page(
    state: &AppState,
    palette: &Palette,
    icons: IconSet,
    width: u16,
) -> Vec<Line<'static>> {
    let width = usize::from(width).saturating_sub(INDENT.len() * 2).max(10);
    let mut page = PageBuilder {
        lines: Vec::new(),
        palette,
        icons,
        width,
    };

    page.hero(state);
    page.features();
    page.demo(state);
    page.comparison();
    page.faq(state);
    page.footer(state);
    page.lines
}

struct PageBuilder<'a> {
    lines: Vec<Line<'static>>,
    palette: &'a Palette,
    icons: IconSet,
    width: usize,
}

impl PageBuilder<'_> {
    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn heading(&mut self, text: &str) {
        self.blank();
        self.lines.push(Line::from(Span::styled(
            text.to_string(),
            styles::accent_bold(self.palette),
        )));
        self.blank();
    }

    fn paragraph(&mut self, text: &str, style: Style) {
        for row in wrap_text(text, self.width) {
            self.lines
                .push(Line::from(Span::styled(format!("{INDENT}{row}"), style)));
        }
    }

    fn hero(&mut self, state: &AppState) {
        self.blank();
        match &state.hero_art {
            HeroArt::Loaded(_) => {
                for row in state.hero_art.lines() {
                    self.lines.push(Line::from(Span::styled(
                        format!("{INDENT}{row}"),
                        styles::accent(self.palette),
                    )));
                }
            }
            HeroArt::Placeholder => {
                let glyph = self.icons.placeholder();
                self.lines.push(Line::from(Span::styled(
                    format!("{INDENT}{glyph}"),
                    styles::text_muted(self.palette),
                )));
            }
        }
        self.blank();

        self.lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(
                format!("{} {}", self.icons.lock(), PRODUCT_NAME),
                styles::heading(self.palette),
            ),
        ]));
        self.paragraph(TAGLINE, styles::accent(self.palette));
        self.blank();
        self.paragraph(HERO_BODY, styles::text_secondary(self.palette));
        self.blank();
        self.lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled("[o]", styles::keybinding(self.palette)),
            Span::styled(" Open Free ", styles::accent_bold(self.palette)),
            Span::styled(
                state.settings.ui.app_url.clone(),
                styles::text_muted(self.palette),
            ),
        ]));
    }

    fn features(&mut self) {
        self.heading("Why Lockbox");
        for feature in FEATURES {
            self.feature(feature);
        }
    }

    fn feature(&mut self, feature: &Feature) {
        let icon = match self.icons.mode() {
            IconMode::Unicode => feature.icon,
            IconMode::Ascii => feature.ascii_icon,
        };
        self.lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(format!("{icon} "), styles::accent(self.palette)),
            Span::styled(feature.title, styles::heading(self.palette)),
        ]));
        self.paragraph(feature.body, styles::text_secondary(self.palette));
    }

    fn demo(&mut self, state: &AppState) {
        self.heading("See it work");
        let demo = &state.demo;

        let input_style = if state.demo_editing {
            styles::cursor(self.palette)
        } else {
            Style::default().fg(self.palette.text_primary)
        };
        let caret = if state.demo_editing {
            self.icons.caret()
        } else {
            ""
        };
        let input = if demo.input().is_empty() && !state.demo_editing {
            Span::styled("press e to type", styles::text_muted(self.palette))
        } else {
            Span::styled(format!("{}{}", demo.input(), caret), input_style)
        };
        self.lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled("Input: ", styles::text_secondary(self.palette)),
            input,
        ]));

        let filled = ((demo.value() / 100.0) * BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(BAR_WIDTH);
        let bar_style = match demo.status() {
            ProgressStatus::Complete => styles::success(self.palette),
            _ => styles::accent(self.palette),
        };
        self.lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(self.icons.bar_full().repeat(filled), bar_style),
            Span::styled(
                self.icons.bar_empty().repeat(BAR_WIDTH - filled),
                styles::text_muted(self.palette),
            ),
            Span::raw(format!(" {:>3.0}% ", demo.value())),
            Span::styled(demo.status().label(), styles::text_secondary(self.palette)),
        ]));

        if let Some(output) = demo.output() {
            self.paragraph(&format!("Output: {output}"), styles::success(self.palette));
        }
        self.paragraph(DEMO_DISCLAIMER, styles::text_muted(self.palette));
        self.lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled("[e]", styles::keybinding(self.palette)),
            Span::styled(" edit  ", styles::text_muted(self.palette)),
            Span::styled("[Enter]", styles::keybinding(self.palette)),
            Span::styled(" encrypt  ", styles::text_muted(self.palette)),
            Span::styled("[x]", styles::keybinding(self.palette)),
            Span::styled(" reset", styles::text_muted(self.palette)),
        ]));
    }

    fn comparison(&mut self) {
        self.heading("How we compare");
        self.lines.push(Line::from(Span::styled(
            format!("{INDENT}{:<26}{:^9}{:^9}", "", PRODUCT_NAME, "Others"),
            styles::text_secondary(self.palette).add_modifier(Modifier::BOLD),
        )));
        for row in COMPARISON {
            self.comparison_row(row);
        }
    }

    fn comparison_row(&mut self, row: &ComparisonRow) {
        let mark = |yes: bool, p: &Palette, icons: IconSet| {
            if yes {
                Span::styled(format!("{:^9}", icons.check()), styles::success(p))
            } else {
                Span::styled(format!("{:^9}", icons.cross()), styles::error(p))
            }
        };
        self.lines.push(Line::from(vec![
            Span::raw(format!("{INDENT}{:<26}", row.feature)),
            mark(row.lockbox, self.palette, self.icons),
            mark(row.others, self.palette, self.icons),
        ]));
    }

    fn faq(&mut self, state: &AppState) {
        self.heading("Questions");
        for (index, item) in FAQ_ITEMS.iter().enumerate() {
            let open = state.faq.is_open(index);
            let marker = if open {
                self.icons.expanded()
            } else {
                self.icons.collapsed()
            };
            let style = if index == state.faq_cursor && state.mode() == lockbox_app::UiMode::Browse
            {
                styles::cursor(self.palette)
            } else {
                styles::heading(self.palette)
            };
            self.lines.push(Line::from(vec![
                Span::raw(INDENT),
                Span::styled(format!("{marker} {}", item.question), style),
            ]));
            if open {
                self.paragraph(
                    &format!("  {}", item.answer),
                    styles::text_secondary(self.palette),
                );
            }
        }
    }

    fn footer(&mut self, state: &AppState) {
        self.blank();
        self.lines.push(Line::from(Span::styled(
            format!(
                "{INDENT}{} · {} theme · press ? for the tour",
                PRODUCT_NAME,
                state.theme.current()
            ),
            styles::text_muted(self.palette),
        )));
        self.blank();
    }
}

/// Greedy word wrap to `width` display cells
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed > width && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}
