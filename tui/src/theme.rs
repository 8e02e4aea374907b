//! Color theme and glyphs for the tally TUI.
//!
//! Cosmetic only: nothing here is part of the functional contract. The
//! standard palette follows the scaffold this app grew out of (blue button,
//! plain text), with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::border;

use tally_engine::UiOptions;

mod colors {
    use super::Color;

    pub const BG: Color = Color::Rgb(24, 24, 27);
    pub const TEXT: Color = Color::Rgb(228, 228, 231);
    pub const TEXT_MUTED: Color = Color::Rgb(113, 113, 122);

    // Button blues, straight off the blue-500/blue-700 swatch.
    pub const BUTTON: Color = Color::Rgb(59, 130, 246);
    pub const BUTTON_DIM: Color = Color::Rgb(29, 78, 216);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub text: Color,
    pub text_muted: Color,
    pub button: Color,
    pub button_border: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg: colors::BG,
            text: colors::TEXT,
            text_muted: colors::TEXT_MUTED,
            button: colors::BUTTON,
            button_border: colors::BUTTON_DIM,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg: Color::Black,
            text: Color::White,
            text_muted: Color::Gray,
            button: Color::White,
            button_border: Color::White,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

const ASCII_BORDER: border::Set = border::Set {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    vertical_left: "|",
    vertical_right: "|",
    horizontal_top: "-",
    horizontal_bottom: "-",
};

/// Glyph set, with an ASCII fallback for terminals without good fonts.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub button_border: border::Set,
    pub separator: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            button_border: ASCII_BORDER,
            separator: "|",
        }
    } else {
        Glyphs {
            button_border: border::ROUNDED,
            separator: "·",
        }
    }
}

pub mod styles {
    use super::{Modifier, Palette, Style};

    /// Level-1 heading: bold and underlined, like the scaffold's `<h1>`.
    #[must_use]
    pub fn heading(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    #[must_use]
    pub fn button_label(palette: &Palette) -> Style {
        Style::default().fg(palette.button).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }
}
