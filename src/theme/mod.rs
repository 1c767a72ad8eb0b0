//! Light/dark preference and the output palettes derived from it

mod storage;

pub use storage::{get_theme_path, load_theme, save_theme, ThemePreference};

use owo_colors::Style;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::grading::PerformanceLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
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

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette::light(),
            Theme::Dark => Palette::dark(),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text styles for terminal output
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub heading: Style,
    pub figure: Style,
    pub label: Style,
    pub accent: Style,
    pub muted: Style,
}

impl Palette {
    /// Light terminal background
    pub fn light() -> Self {
        Self {
            heading: Style::new().blue().bold(),
            figure: Style::new().black().bold(),
            label: Style::new().bold(),
            accent: Style::new().magenta(),
            muted: Style::new().bright_black(),
        }
    }

    /// Dark terminal background
    pub fn dark() -> Self {
        Self {
            heading: Style::new().cyan().bold(),
            figure: Style::new().white().bold(),
            label: Style::new().bold(),
            accent: Style::new().yellow(),
            muted: Style::new().bright_black(),
        }
    }

    /// Style for a performance label, green for the top tiers through red
    pub fn performance(&self, level: PerformanceLevel) -> Style {
        let (r, g, b) = level.rgb();
        Style::new().truecolor(r, g, b).bold()
    }
}
