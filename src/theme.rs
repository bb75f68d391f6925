use std::fmt;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Icon for the toggle button: it shows the theme you would switch to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "☾",
            Theme::Dark => "☀",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: Color::Rgb(250, 240, 250),
                foreground: Color::Black,
                card: Color::White,
                accent: Color::Rgb(168, 85, 247),
                muted: Color::DarkGray,
                footer: Color::Rgb(243, 244, 246),
            },
            Theme::Dark => Palette {
                background: Color::Rgb(17, 24, 39),
                foreground: Color::White,
                card: Color::Rgb(31, 41, 55),
                accent: Color::Rgb(192, 132, 252),
                muted: Color::Gray,
                footer: Color::Rgb(31, 41, 55),
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colors every theme-dependent widget derives from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub card: Color,
    pub accent: Color,
    pub muted: Color,
    pub footer: Color,
}
