//! Theme support for the TUI
//!
//! Provides the built-in color themes (Catppuccin Mocha, Dracula, Nord).

use ratatui::style::Color;

use crate::config::TuiTheme;

/// A complete color theme for the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    // Base colors
    pub base: Color,     // Main background
    pub surface0: Color, // Slightly elevated surface
    pub surface1: Color, // Borders, separators
    // Text colors
    pub text: Color,     // Primary text
    pub subtext0: Color, // Secondary/dimmed text
    // Accent colors
    pub blue: Color,   // Selection, focused pane
    pub green: Color,  // Success, high confidence
    pub yellow: Color, // Warnings, loading
    pub red: Color,    // Errors, destructive actions
    pub mauve: Color,  // Titles, entity kinds
    pub peach: Color,  // Camera badges
    pub teal: Color,   // Range indicators, metrics
}

/// Selected theme variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    #[default]
    CatppuccinMocha,
    Dracula,
    Nord,
}

impl ThemeVariant {
    /// Get the theme for this variant
    pub fn theme(&self) -> Theme {
        match self {
            Self::CatppuccinMocha => CATPPUCCIN_MOCHA,
            Self::Dracula => DRACULA,
            Self::Nord => NORD,
        }
    }

    /// Cycle to the next theme
    pub fn next(&self) -> Self {
        match self {
            Self::CatppuccinMocha => Self::Dracula,
            Self::Dracula => Self::Nord,
            Self::Nord => Self::CatppuccinMocha,
        }
    }

    /// Convert from config TuiTheme
    pub fn from_config_theme(theme: TuiTheme) -> Self {
        match theme {
            TuiTheme::Mocha => Self::CatppuccinMocha,
            TuiTheme::Dracula => Self::Dracula,
            TuiTheme::Nord => Self::Nord,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        self.theme().name
    }
}

// ============================================================================
// Theme Definitions
// ============================================================================

/// Catppuccin Mocha - Dark theme with warm pastels
pub const CATPPUCCIN_MOCHA: Theme = Theme {
    name: "Catppuccin Mocha",
    base: Color::Rgb(30, 30, 46),
    surface0: Color::Rgb(49, 50, 68),
    surface1: Color::Rgb(69, 71, 90),
    text: Color::Rgb(205, 214, 244),
    subtext0: Color::Rgb(166, 173, 200),
    blue: Color::Rgb(137, 180, 250),
    green: Color::Rgb(166, 227, 161),
    yellow: Color::Rgb(249, 226, 175),
    red: Color::Rgb(243, 139, 168),
    mauve: Color::Rgb(203, 166, 247),
    peach: Color::Rgb(250, 179, 135),
    teal: Color::Rgb(102, 178, 168),
};

/// Dracula - Dark theme with vibrant colors
pub const DRACULA: Theme = Theme {
    name: "Dracula",
    base: Color::Rgb(40, 42, 54),
    surface0: Color::Rgb(68, 71, 90),
    surface1: Color::Rgb(98, 114, 164),
    text: Color::Rgb(248, 248, 242),
    subtext0: Color::Rgb(189, 147, 249),
    blue: Color::Rgb(139, 233, 253),
    green: Color::Rgb(80, 250, 123),
    yellow: Color::Rgb(241, 250, 140),
    red: Color::Rgb(255, 85, 85),
    mauve: Color::Rgb(189, 147, 249),
    peach: Color::Rgb(255, 184, 108),
    teal: Color::Rgb(98, 168, 182),
};

/// Nord - Arctic, bluish color palette
pub const NORD: Theme = Theme {
    name: "Nord",
    base: Color::Rgb(46, 52, 64),
    surface0: Color::Rgb(59, 66, 82),
    surface1: Color::Rgb(76, 86, 106),
    text: Color::Rgb(236, 239, 244),
    subtext0: Color::Rgb(216, 222, 233),
    blue: Color::Rgb(136, 192, 208),
    green: Color::Rgb(163, 190, 140),
    yellow: Color::Rgb(235, 203, 139),
    red: Color::Rgb(191, 97, 106),
    mauve: Color::Rgb(180, 142, 173),
    peach: Color::Rgb(208, 135, 112),
    teal: Color::Rgb(143, 188, 187),
};
