//! Icon set for the renderer.
//!
//! `IconSet` resolves glyphs at runtime from the configured `IconMode`.

use lockbox_app::config::IconMode;
use lockbox_core::ToastKind;

#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> IconMode {
        self.mode
    }

    fn pick(&self, unicode: &'static str, ascii: &'static str) -> &'static str {
        match self.mode {
            IconMode::Unicode => unicode,
            IconMode::Ascii => ascii,
        }
    }

    pub fn lock(&self) -> &'static str {
        self.pick("🔒", "[#]")
    }

    pub fn check(&self) -> &'static str {
        self.pick("✓", "y")
    }

    pub fn cross(&self) -> &'static str {
        self.pick("✗", "n")
    }

    pub fn expanded(&self) -> &'static str {
        self.pick("▾", "-")
    }

    pub fn collapsed(&self) -> &'static str {
        self.pick("▸", "+")
    }

    pub fn arrow_up(&self) -> &'static str {
        self.pick("↑", "^")
    }

    pub fn bar_full(&self) -> &'static str {
        self.pick("█", "#")
    }

    pub fn bar_empty(&self) -> &'static str {
        self.pick("░", ".")
    }

    pub fn caret(&self) -> &'static str {
        self.pick("▏", "_")
    }

    /// Stand-in for hero art that failed to load
    pub fn placeholder(&self) -> &'static str {
        self.pick("▣", "[?]")
    }

    pub fn toast(&self, kind: ToastKind) -> &'static str {
        match kind {
            ToastKind::Success => self.pick("✓", "+"),
            ToastKind::Error => self.pick("✗", "!"),
            ToastKind::Info => self.pick("ℹ", "i"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_mode_is_ascii() {
        let icons = IconSet::new(IconMode::Ascii);
        for glyph in [
            icons.lock(),
            icons.check(),
            icons.cross(),
            icons.expanded(),
            icons.collapsed(),
            icons.placeholder(),
            icons.toast(ToastKind::Info),
        ] {
            assert!(glyph.is_ascii(), "{glyph} is not ascii");
        }
    }
}
