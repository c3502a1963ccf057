//! Centralized theme and styling for the TUI
//!
//! Single source of truth for the colors and styles used by the screens.
//!
//! # Usage
//! ```rust
//! use bouquetui::theme::{Colors, Styles};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! ```

use ratatui::style::{Color, Modifier, Style};

use crate::catalog::PaletteColor;

/// Core color palette for the application
pub struct Colors;

impl Colors {
    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    /// Primary accent color - borders, titles
    pub const PRIMARY: Color = Color::Rgb(225, 170, 176);

    /// Secondary accent color - cursor highlight
    pub const SECONDARY: Color = Color::Rgb(39, 92, 66);

    /// Chosen items
    pub const SUCCESS: Color = Color::Green;

    pub const WARNING: Color = Color::Yellow;

    pub const ERROR: Color = Color::Red;
}

/// Pre-built styles
pub struct Styles;

impl Styles {
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    pub fn muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    pub fn hint() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Row under the cursor
    pub fn cursor() -> Style {
        Style::default()
            .bg(Colors::SECONDARY)
            .fg(Colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn chosen() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    pub fn error() -> Style {
        Style::default().fg(Colors::ERROR).add_modifier(Modifier::BOLD)
    }

    /// Block of the given palette color, used as a swatch
    pub fn swatch(color: &PaletteColor) -> Style {
        Style::default().bg(swatch_color(color))
    }
}

/// Terminal color for a palette entry; unparseable hex falls back to gray
pub fn swatch_color(color: &PaletteColor) -> Color {
    match color.rgb() {
        Some((r, g, b)) => Color::Rgb(r, g, b),
        None => Colors::FG_SECONDARY,
    }
}
