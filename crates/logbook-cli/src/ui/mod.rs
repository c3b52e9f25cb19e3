//! UI primitives for the Logbook CLI.
//!
//! - **Context**: Environment detection (TTY, color)
//! - **Theme**: Badge tokens and styles
//! - **Render**: Badges, choices, headings, framed text
//! - **Format**: Timestamp and underline helpers

mod context;
pub mod format;
pub mod render;
pub mod theme;

// Re-export core types at module level
pub use context::UiContext;
pub use theme::Badge;

// Re-export commonly used functions
pub use format::format_local_timestamp;
pub use render::{badge, choice, error_message, framed, heading, title};
