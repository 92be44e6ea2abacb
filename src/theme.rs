//! Ventry's color palette.
//!
//! The table leans on color to carry meaning: expiry dates fade from green
//! through yellow to red as they approach, stock counts turn peach and then
//! red as they run down, and badges reuse the same pair. Everything else is
//! neutral chrome. Values are Catppuccin Mocha, which reads well on the
//! dark terminals this tool lives in.

use ratatui::style::Color;

/// Semantic colors used by the rendering code.
pub struct Theme {
    /// Canvas background.
    pub base: Color,
    /// Panel and modal background.
    pub mantle: Color,
    /// Selected-row background.
    pub surface1: Color,
    /// Secondary surface shade.
    pub surface2: Color,
    /// Inactive borders and dimmed rows.
    pub overlay1: Color,
    /// Default foreground.
    pub text: Color,
    /// Hints and placeholders.
    pub subtext0: Color,
    /// De-emphasized cells such as the category column.
    pub subtext1: Color,
    /// Focused pane border and active descending sort.
    pub sapphire: Color,
    /// Titles.
    pub mauve: Color,
    /// Distant expiry, healthy stock, the "In Stock" badge.
    pub green: Color,
    /// Expiry within two weeks.
    pub yellow: Color,
    /// Stock in the 5 to 10 band.
    pub peach: Color,
    /// Expiry within a week, stock below 5, the "Out of Stock" badge.
    pub red: Color,
    /// Ascending sort and the category filter chips.
    pub lavender: Color,
}

fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb(r, g, b)
}

/// The palette. Fixed; Ventry has no theming configuration.
#[must_use]
pub fn theme() -> Theme {
    Theme {
        base: rgb(0x1e, 0x1e, 0x2e),
        mantle: rgb(0x18, 0x18, 0x25),
        surface1: rgb(0x45, 0x47, 0x5a),
        surface2: rgb(0x58, 0x5b, 0x70),
        overlay1: rgb(0x7f, 0x84, 0x9c),
        text: rgb(0xcd, 0xd6, 0xf4),
        subtext0: rgb(0xa6, 0xad, 0xc8),
        subtext1: rgb(0xba, 0xc2, 0xde),
        sapphire: rgb(0x74, 0xc7, 0xec),
        mauve: rgb(0xcb, 0xa6, 0xf7),
        green: rgb(0xa6, 0xe3, 0xa1),
        yellow: rgb(0xf9, 0xe2, 0xaf),
        peach: rgb(0xfa, 0xb3, 0x87),
        red: rgb(0xf3, 0x8b, 0xa8),
        lavender: rgb(0xb4, 0xbe, 0xfe),
    }
}
