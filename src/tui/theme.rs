//! Terminal theme detection and color resolution

use ratatui::style::Color;

use crate::services::ThemePreference;
use crate::types::{ColorToken, Rgb};

/// Terminal color scheme (dark or light background)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Auto-detect terminal theme from background luminance.
    /// Falls back to Dark if detection fails.
    pub fn detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Resolve a configured preference, detecting only for `Auto`
    pub fn from_preference(pref: ThemePreference) -> Self {
        match pref {
            ThemePreference::Auto => Self::detect(),
            ThemePreference::Dark => Self::Dark,
            ThemePreference::Light => Self::Light,
        }
    }

    /// Primary text color (headers, body text)
    pub fn text(self) -> Color {
        match self {
            Self::Dark => Color::White,
            Self::Light => Color::Black,
        }
    }

    /// Secondary/muted text (labels, legends, hints)
    pub fn muted(self) -> Color {
        match self {
            Self::Dark => Color::DarkGray,
            Self::Light => Color::Gray,
        }
    }

    /// Assumed background, used to composite accent opacity
    pub fn background(self) -> Rgb {
        match self {
            Self::Dark => Rgb::new(0x0d, 0x11, 0x17),
            Self::Light => Rgb::new(0xff, 0xff, 0xff),
        }
    }

    /// Neutral border color for days without sessions
    pub fn border(self) -> Rgb {
        match self {
            Self::Dark => Rgb::new(0x30, 0x36, 0x3d),
            Self::Light => Rgb::new(0xd0, 0xd7, 0xde),
        }
    }

    /// Resolve a calendar color token against this theme
    pub fn token_color(self, token: ColorToken, accent: Rgb) -> Color {
        match token {
            ColorToken::Empty => rgb(self.border()),
            ColorToken::Accent { opacity } => rgb(accent.blend_over(self.background(), opacity)),
        }
    }
}

/// Convert a core color into a ratatui color
pub fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCENT: Rgb = Rgb::new(0x2f, 0x81, 0xf7);

    #[test]
    fn test_dark_theme_colors() {
        let t = Theme::Dark;
        assert_eq!(t.text(), Color::White);
        assert_eq!(t.muted(), Color::DarkGray);
    }

    #[test]
    fn test_light_theme_colors() {
        let t = Theme::Light;
        assert_eq!(t.text(), Color::Black);
        assert_eq!(t.muted(), Color::Gray);
    }

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn test_forced_preference_skips_detection() {
        assert_eq!(Theme::from_preference(ThemePreference::Dark), Theme::Dark);
        assert_eq!(Theme::from_preference(ThemePreference::Light), Theme::Light);
    }

    // ========== token_color tests ==========

    #[test]
    fn test_empty_token_uses_border() {
        assert_eq!(
            Theme::Dark.token_color(ColorToken::Empty, ACCENT),
            Color::Rgb(0x30, 0x36, 0x3d)
        );
        assert_eq!(
            Theme::Light.token_color(ColorToken::Empty, ACCENT),
            Color::Rgb(0xd0, 0xd7, 0xde)
        );
    }

    #[test]
    fn test_full_opacity_is_accent() {
        let color = Theme::Light.token_color(ColorToken::Accent { opacity: 1.0 }, ACCENT);
        assert_eq!(color, rgb(ACCENT));
    }

    #[test]
    fn test_partial_opacity_blends_toward_background() {
        let faint = Theme::Light.token_color(ColorToken::Accent { opacity: 0.25 }, ACCENT);
        let strong = Theme::Light.token_color(ColorToken::Accent { opacity: 0.80 }, ACCENT);
        let (Color::Rgb(fr, _, _), Color::Rgb(sr, _, _)) = (faint, strong) else {
            panic!("expected rgb colors");
        };
        // Red channel moves from white (255) toward the accent (0x2f)
        assert!(fr > sr);
        assert!(sr > ACCENT.r);
    }
}
