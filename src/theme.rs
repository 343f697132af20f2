// Theme support for the TUI
//
// Provides color palettes that can be configured via config file.
// "auto" uses terminal's ANSI palette, named themes use true color (RGB).

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Card colors
    pub accent: Color,
    pub name_text: Color,
    pub badge_fg: Color,
    pub badge_bg: Color,
    pub icon: Color,
    pub text: Color,
    pub caption: Color,
    pub error: Color,
    pub skeleton: Color,
    pub star: Color,

    // Social button brand colors
    pub facebook: Color,
    pub twitter: Color,
    pub instagram: Color,

    // UI element colors
    pub status_bar: Color,
    pub border: Color,
    pub highlight: Color,
    pub muted: Color,

    // Terminal colors
    pub background: Color,
    pub foreground: Color,
    pub border_type: BorderType,
}

impl Theme {
    /// Load theme by name, honoring the background toggle
    pub fn resolve(name: &str, use_theme_background: bool) -> Self {
        let mut theme = Self::by_name(name);
        if !use_theme_background {
            theme.background = Color::Reset;
        }
        theme
    }

    /// Load theme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            _ => Self::auto(), // "auto" or unknown
        }
    }

    /// Names accepted by `by_name`
    pub fn names() -> &'static [&'static str] {
        &["auto", "dracula", "nord"]
    }

    /// Auto theme - uses terminal's ANSI palette
    pub fn auto() -> Self {
        Self {
            name: "auto".to_string(),
            accent: Color::Magenta,
            name_text: Color::LightMagenta,
            badge_fg: Color::Magenta,
            badge_bg: Color::Reset,
            icon: Color::Magenta,
            text: Color::Reset,
            caption: Color::DarkGray,
            error: Color::Red,
            skeleton: Color::DarkGray,
            star: Color::Yellow,
            facebook: Color::Blue,
            twitter: Color::LightBlue,
            instagram: Color::LightMagenta,
            status_bar: Color::Green,
            border: Color::White,
            highlight: Color::Yellow,
            muted: Color::DarkGray,
            background: Color::Reset,
            foreground: Color::Reset,
            border_type: BorderType::Rounded,
        }
    }

    /// Dracula theme - https://draculatheme.com
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            accent: Color::Rgb(0xbd, 0x93, 0xf9),    // purple
            name_text: Color::Rgb(0xff, 0x79, 0xc6), // pink
            badge_fg: Color::Rgb(0x28, 0x2a, 0x36),  // background
            badge_bg: Color::Rgb(0xbd, 0x93, 0xf9),  // purple
            icon: Color::Rgb(0xbd, 0x93, 0xf9),      // purple
            text: Color::Rgb(0xf8, 0xf8, 0xf2),      // foreground
            caption: Color::Rgb(0x62, 0x72, 0xa4),   // comment
            error: Color::Rgb(0xff, 0x55, 0x55),     // red
            skeleton: Color::Rgb(0x44, 0x47, 0x5a),  // current line
            star: Color::Rgb(0xf1, 0xfa, 0x8c),      // yellow
            facebook: Color::Rgb(0x3b, 0x59, 0x98),
            twitter: Color::Rgb(0x8b, 0xe9, 0xfd),   // cyan
            instagram: Color::Rgb(0xff, 0x79, 0xc6), // pink
            status_bar: Color::Rgb(0x50, 0xfa, 0x7b), // green
            border: Color::Rgb(0x62, 0x72, 0xa4),    // comment
            highlight: Color::Rgb(0xf1, 0xfa, 0x8c), // yellow
            muted: Color::Rgb(0x62, 0x72, 0xa4),     // comment
            background: Color::Rgb(0x28, 0x2a, 0x36),
            foreground: Color::Rgb(0xf8, 0xf8, 0xf2),
            border_type: BorderType::Rounded,
        }
    }

    /// Nord theme - https://nordtheme.com
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            accent: Color::Rgb(0xb4, 0x8e, 0xad),    // nord15 purple
            name_text: Color::Rgb(0x88, 0xc0, 0xd0), // nord8 frost
            badge_fg: Color::Rgb(0x2e, 0x34, 0x40),  // nord0
            badge_bg: Color::Rgb(0xb4, 0x8e, 0xad),  // nord15
            icon: Color::Rgb(0x81, 0xa1, 0xc1),      // nord9
            text: Color::Rgb(0xe5, 0xe9, 0xf0),      // nord5
            caption: Color::Rgb(0x61, 0x6e, 0x88),
            error: Color::Rgb(0xbf, 0x61, 0x6a),     // nord11 red
            skeleton: Color::Rgb(0x43, 0x4c, 0x5e),  // nord2
            star: Color::Rgb(0xeb, 0xcb, 0x8b),      // nord13 yellow
            facebook: Color::Rgb(0x5e, 0x81, 0xac),  // nord10
            twitter: Color::Rgb(0x88, 0xc0, 0xd0),   // nord8
            instagram: Color::Rgb(0xb4, 0x8e, 0xad), // nord15
            status_bar: Color::Rgb(0xa3, 0xbe, 0x8c), // nord14 green
            border: Color::Rgb(0x4c, 0x56, 0x6a),    // nord3
            highlight: Color::Rgb(0xeb, 0xcb, 0x8b), // nord13
            muted: Color::Rgb(0x61, 0x6e, 0x88),
            background: Color::Rgb(0x2e, 0x34, 0x40), // nord0
            foreground: Color::Rgb(0xd8, 0xde, 0xe9), // nord4
            border_type: BorderType::Rounded,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::auto()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name_is_case_insensitive() {
        assert_eq!(Theme::by_name("Dracula").name, "dracula");
        assert_eq!(Theme::by_name("NORD").name, "nord");
    }

    #[test]
    fn test_unknown_name_falls_back_to_auto() {
        assert_eq!(Theme::by_name("solarized").name, "auto");
    }

    #[test]
    fn test_background_toggle() {
        assert_eq!(Theme::resolve("nord", false).background, Color::Reset);
        assert_ne!(Theme::resolve("nord", true).background, Color::Reset);
    }

    #[test]
    fn test_all_listed_names_resolve() {
        for name in Theme::names() {
            assert_eq!(Theme::by_name(name).name, *name);
        }
    }
}
