use ratatui::style::Color;

use crate::theme::Theme;

/// Terminal colors for one display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub border: Color,
    pub text: Color,
    pub dim: Color,
    pub gold: Color,
    pub highlight: Color,
    pub status_ok: Color,
    pub status_error: Color,
}

pub const DARK: Palette = Palette {
    background: Color::Rgb(0x00, 0x00, 0x00),
    border: Color::Rgb(0x40, 0x40, 0x40),
    text: Color::Rgb(0xe5, 0xe5, 0xe5),
    dim: Color::Rgb(0x6b, 0x72, 0x80),
    gold: Color::Rgb(0xd4, 0xaf, 0x37),
    highlight: Color::Rgb(0x26, 0x26, 0x26),
    status_ok: Color::Rgb(0x22, 0xc5, 0x5e),
    status_error: Color::Rgb(0xef, 0x44, 0x44),
};

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(0xf8, 0xfa, 0xfc),
    border: Color::Rgb(0xcb, 0xd5, 0xe1),
    text: Color::Rgb(0x0f, 0x17, 0x2a),
    dim: Color::Rgb(0x64, 0x74, 0x8b),
    gold: Color::Rgb(0xb8, 0x86, 0x0b),
    highlight: Color::Rgb(0xfe, 0xf9, 0xc3),
    status_ok: Color::Rgb(0x16, 0xa3, 0x4a),
    status_error: Color::Rgb(0xdc, 0x26, 0x26),
};

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => DARK,
        Theme::Light => LIGHT,
    }
}

/// Card accent for a Tailwind-style `text-<color>-500` token.
pub fn accent_color(token: &str, fallback: Color) -> Color {
    let name = token
        .strip_prefix("text-")
        .and_then(|rest| rest.split('-').next())
        .unwrap_or("");
    match name {
        "red" | "rose" => Color::Rgb(0xef, 0x44, 0x44),
        "purple" | "indigo" => Color::Rgb(0xa8, 0x55, 0xf7),
        "amber" | "orange" | "yellow" => Color::Rgb(0xf5, 0x9e, 0x0b),
        "emerald" | "green" => Color::Rgb(0x10, 0xb9, 0x81),
        "pink" => Color::Rgb(0xec, 0x48, 0x99),
        "blue" | "cyan" => Color::Rgb(0x3b, 0x82, 0xf6),
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_follows_theme() {
        assert_eq!(palette(Theme::Dark), DARK);
        assert_eq!(palette(Theme::Light), LIGHT);
    }

    #[test]
    fn accent_tokens() {
        assert_eq!(accent_color("text-red-500", Color::White), Color::Rgb(0xef, 0x44, 0x44));
        assert_eq!(accent_color("text-teal-500", Color::White), Color::White);
        assert_eq!(accent_color("", Color::White), Color::White);
    }
}
