//! Monokai Pro colours for the roster window

use gpui::{rgb, Hsla};

/// Palette entries the roster uses
mod palette {
    pub const BG_DARK: u32 = 0x19181a;
    pub const BG_BASE: u32 = 0x2d2a2e;
    pub const BG_LIGHT: u32 = 0x403e41;
    pub const BG_HIGHLIGHT: u32 = 0x5b595c;

    pub const FG_BASE: u32 = 0xfcfcfa;
    pub const FG_DIM: u32 = 0x939293;
    pub const FG_MUTED: u32 = 0x727072;

    pub const RED: u32 = 0xff6188;
    pub const YELLOW: u32 = 0xffd866;
    pub const GREEN: u32 = 0xa9dc76;
    pub const CYAN: u32 = 0x78dce8;
}

#[derive(Clone)]
pub struct RosterTheme {
    // Backgrounds
    pub background: Hsla,
    pub background_secondary: Hsla,
    pub background_elevated: Hsla,
    pub background_highlight: Hsla,

    // Foregrounds
    pub foreground: Hsla,
    pub foreground_dim: Hsla,
    pub foreground_muted: Hsla,

    // Actions
    pub primary: Hsla,
    pub confirm: Hsla,
    pub caution: Hsla,
    pub danger: Hsla,

    pub border: Hsla,
}

impl Default for RosterTheme {
    fn default() -> Self {
        let color = |hex: u32| -> Hsla { rgb(hex).into() };
        Self {
            background: color(palette::BG_BASE),
            background_secondary: color(palette::BG_DARK),
            background_elevated: color(palette::BG_LIGHT),
            background_highlight: color(palette::BG_HIGHLIGHT),

            foreground: color(palette::FG_BASE),
            foreground_dim: color(palette::FG_DIM),
            foreground_muted: color(palette::FG_MUTED),

            primary: color(palette::CYAN),
            confirm: color(palette::GREEN),
            caution: color(palette::YELLOW),
            danger: color(palette::RED),

            border: color(palette::BG_LIGHT),
        }
    }
}
