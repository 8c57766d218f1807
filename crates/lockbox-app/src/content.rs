//! Static page copy
//!
//! Kept in the state crate so handlers know how many FAQ items and tour steps
//! exist without depending on the renderer.

/// A headline plus one short paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub ascii_icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TourStep {
    pub title: &'static str,
    pub body: &'static str,
}

/// One row of the comparison table: feature, Lockbox, typical cloud drive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonRow {
    pub feature: &'static str,
    pub lockbox: bool,
    pub others: bool,
}

pub const PRODUCT_NAME: &str = "Lockbox";

pub const TAGLINE: &str = "Private file storage that only you can read.";

pub const HERO_BODY: &str = "Files are encrypted on your device before upload. \
We store ciphertext, never your keys.";

pub const DEMO_DISCLAIMER: &str = "Visual demo only: the output is encoded, not encrypted.";

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "🔒",
        ascii_icon: "[#]",
        title: "Client-side encryption",
        body: "Everything is locked before it leaves your machine.",
    },
    Feature {
        icon: "🗝",
        ascii_icon: "[k]",
        title: "Your keys, your data",
        body: "Keys are derived from your passphrase and never uploaded.",
    },
    Feature {
        icon: "🔗",
        ascii_icon: "[~]",
        title: "Private sharing",
        body: "Share links carry the key in the fragment, out of our reach.",
    },
    Feature {
        icon: "⚡",
        ascii_icon: "[>]",
        title: "Fast sync",
        body: "Chunked uploads resume where they stopped.",
    },
];

pub const FAQ_ITEMS: &[FaqItem] = &[
    FaqItem {
        question: "Can Lockbox read my files?",
        answer: "No. Files are encrypted before upload and we never see your keys.",
    },
    FaqItem {
        question: "What happens if I forget my passphrase?",
        answer: "Your recovery kit restores access. Without it the data cannot be decrypted.",
    },
    FaqItem {
        question: "Is there a free plan?",
        answer: "Yes. The free plan includes 5 GB of encrypted storage.",
    },
    FaqItem {
        question: "Which platforms are supported?",
        answer: "Any modern browser, plus desktop sync clients for macOS, Windows and Linux.",
    },
];

pub const TOUR_STEPS: &[TourStep] = &[
    TourStep {
        title: "Welcome to Lockbox",
        body: "A quick look around. Press n for next, p for back, Esc to skip.",
    },
    TourStep {
        title: "Try the demo",
        body: "Press e, type some text and hit Enter to watch it get scrambled.",
    },
    TourStep {
        title: "Pick your look",
        body: "Press t to switch between light and dark. We remember your choice.",
    },
    TourStep {
        title: "Ready when you are",
        body: "Press o to open the app. Press ? to see this tour again.",
    },
];

pub const COMPARISON: &[ComparisonRow] = &[
    ComparisonRow {
        feature: "End-to-end encryption",
        lockbox: true,
        others: false,
    },
    ComparisonRow {
        feature: "Zero-knowledge keys",
        lockbox: true,
        others: false,
    },
    ComparisonRow {
        feature: "Free tier",
        lockbox: true,
        others: true,
    },
    ComparisonRow {
        feature: "Scans your files",
        lockbox: false,
        others: true,
    },
];
