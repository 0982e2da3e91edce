//! Theme system for consistent UI styling.
//!
//! Content themes (`ThemeKey`) only swap text. The palette stays the same
//! green-on-slate console look for all of them.

use hwpm_types::backend::Color;

/// Complete visual theme for the UI toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Main background color.
    pub background: Color,
    /// Surface/panel background color.
    pub surface: Color,
    /// Modal surface color.
    pub overlay: Color,

    /// Primary text color.
    pub text_primary: Color,
    /// Secondary/muted text color.
    pub text_secondary: Color,
    /// Highlighted text (active lines, log entries).
    pub text_accent: Color,

    /// Primary accent color.
    pub accent: Color,
    /// Subtle accent (progress track, inactive boot lines).
    pub accent_subtle: Color,

    /// Warning/caution color.
    pub warning: Color,
    /// Error/danger color.
    pub error: Color,
    /// Info/neutral color.
    pub info: Color,

    /// Default border color.
    pub border: Color,
    /// Strong/emphasized border color.
    pub border_strong: Color,

    /// Small font size.
    pub font_size_sm: u16,
    /// Medium/default font size.
    pub font_size_md: u16,
}

impl Theme {
    /// Green-on-slate console palette.
    pub fn console() -> Self {
        Self {
            background: Color::rgb(2, 6, 23),
            surface: Color::rgb(15, 23, 42),
            overlay: Color::rgb(0, 0, 0),
            text_primary: Color::rgb(203, 213, 225),
            text_secondary: Color::rgb(100, 116, 139),
            text_accent: Color::rgb(74, 222, 128),
            accent: Color::rgb(34, 197, 94),
            accent_subtle: Color::rgb(20, 83, 45),
            warning: Color::rgb(202, 138, 4),
            error: Color::rgb(248, 113, 113),
            info: Color::rgb(96, 165, 250),
            border: Color::rgb(30, 41, 59),
            border_strong: Color::rgb(22, 101, 52),
            font_size_sm: 8,
            font_size_md: 8,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::console()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_console() {
        assert_eq!(Theme::default(), Theme::console());
    }

    #[test]
    fn background_darker_than_text() {
        let t = Theme::console();
        assert!(t.background.luminance() < t.text_primary.luminance());
        assert!(t.surface.luminance() < t.text_secondary.luminance());
    }

    #[test]
    fn accent_brighter_than_its_track() {
        let t = Theme::console();
        assert!(t.accent.luminance() > t.accent_subtle.luminance());
    }
}
