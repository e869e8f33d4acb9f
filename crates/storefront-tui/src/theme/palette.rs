//! Color palettes for the dark and light themes.

use ratatui::style::Color;
use storefront_app::config::ThemeMode;

/// Every color a widget may use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub background: Color,
    pub card_bg: Color,
    pub skeleton: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    // --- Accent (brand orange) ---
    pub accent: Color,
    pub accent_fg: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // --- Status ---
    pub success: Color,
    pub danger: Color,
    pub warning: Color,
    pub info: Color,

    // --- Badges ---
    pub badge_bg: Color,
    pub badge_fg: Color,
}

pub const DARK: Palette = Palette {
    background: Color::Rgb(24, 24, 27),
    card_bg: Color::Rgb(39, 39, 42),
    skeleton: Color::Rgb(63, 63, 70),

    border_dim: Color::Rgb(63, 63, 70),
    border_active: Color::Rgb(251, 146, 60),

    accent: Color::Rgb(251, 146, 60),
    accent_fg: Color::Rgb(24, 24, 27),

    text_primary: Color::Rgb(250, 250, 250),
    text_secondary: Color::Rgb(212, 212, 216),
    text_muted: Color::Rgb(161, 161, 170),

    success: Color::Rgb(74, 222, 128),
    danger: Color::Rgb(248, 113, 113),
    warning: Color::Rgb(250, 204, 21),
    info: Color::Rgb(96, 165, 250),

    badge_bg: Color::Rgb(124, 45, 18),
    badge_fg: Color::Rgb(253, 186, 116),
};

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(250, 250, 250),
    card_bg: Color::Rgb(255, 255, 255),
    skeleton: Color::Rgb(228, 228, 231),

    border_dim: Color::Rgb(212, 212, 216),
    border_active: Color::Rgb(234, 88, 12),

    accent: Color::Rgb(234, 88, 12),
    accent_fg: Color::Rgb(255, 255, 255),

    text_primary: Color::Rgb(24, 24, 27),
    text_secondary: Color::Rgb(63, 63, 70),
    text_muted: Color::Rgb(113, 113, 122),

    success: Color::Rgb(22, 163, 74),
    danger: Color::Rgb(220, 38, 38),
    warning: Color::Rgb(202, 138, 4),
    info: Color::Rgb(37, 99, 235),

    badge_bg: Color::Rgb(255, 237, 213),
    badge_fg: Color::Rgb(194, 65, 12),
};

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> &'static Palette {
        match mode {
            ThemeMode::Dark => &DARK,
            ThemeMode::Light => &LIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_selects_palette() {
        assert_eq!(Palette::for_mode(ThemeMode::Dark), &DARK);
        assert_eq!(Palette::for_mode(ThemeMode::Light), &LIGHT);
    }

    #[test]
    fn test_text_contrasts_with_background() {
        for palette in [DARK, LIGHT] {
            assert_ne!(palette.text_primary, palette.background);
            assert_ne!(palette.accent_fg, palette.accent);
        }
    }
}
