//! Theme definitions for colors and badges.

use owo_colors::{OwoColorize, Style};

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Err,
}

impl Badge {
    /// Get badge text (e.g., "[OK]")
    pub fn text(&self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Warn => "[WARN]",
            Self::Err => "[ERR]",
        }
    }

    /// Style used when color is enabled.
    pub fn style(&self) -> Style {
        match self {
            Self::Ok => styles::success(),
            Self::Warn => styles::warn(),
            Self::Err => styles::error(),
        }
    }
}

/// Named styles shared by the renderers.
pub mod styles {
    use owo_colors::Style;

    pub fn bold() -> Style {
        Style::new().bold()
    }

    pub fn dim() -> Style {
        Style::new().dimmed()
    }

    pub fn key() -> Style {
        Style::new().cyan().bold()
    }

    pub fn success() -> Style {
        Style::new().green().bold()
    }

    pub fn warn() -> Style {
        Style::new().yellow().bold()
    }

    pub fn error() -> Style {
        Style::new().red().bold()
    }
}

/// Apply `style` to `text` when `enabled`, otherwise return it unchanged.
pub fn styled(text: &str, style: Style, enabled: bool) -> String {
    if enabled {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}
