//! Rendering primitives for CLI output.
//!
//! Renderers return strings; the session decides where they are written.

use super::context::UiContext;
use super::format::underline;
use super::theme::{styled, styles, Badge};

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let colored_badge = styled(kind.text(), kind.style(), ctx.color);

    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a title line.
pub fn title(ctx: &UiContext, text: &str) -> String {
    styled(text, styles::bold(), ctx.color)
}

/// Render one selectable choice, e.g. `a) Add a logbook entry`.
pub fn choice(ctx: &UiContext, key: &str, label: &str) -> String {
    format!("{}) {}", styled(key, styles::key(), ctx.color), label)
}

/// Render text between two dashed rules as wide as its longest line.
pub fn framed(ctx: &UiContext, text: &str) -> String {
    let widest = text
        .lines()
        .max_by_key(|line| line.chars().count())
        .unwrap_or("");
    let rule = styled(&underline(widest, '-'), styles::dim(), ctx.color);
    format!("{}\n{}\n{}", rule, text, rule)
}

/// Render a heading underlined with `=`.
pub fn heading(ctx: &UiContext, text: &str) -> String {
    format!(
        "{}\n{}",
        styled(text, styles::bold(), ctx.color),
        underline(text, '=')
    )
}

/// Format an error message with optional hint.
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = vec![badge(ctx, Badge::Err, message)];
    if let Some(h) = error_hint {
        lines.push(format!("{} {}", styled("Hint:", styles::dim(), ctx.color), h));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_ctx() -> UiContext {
        UiContext::plain()
    }

    #[test]
    fn test_badge_plain() {
        assert_eq!(badge(&plain_ctx(), Badge::Ok, "Saved"), "[OK] Saved");
        assert_eq!(badge(&plain_ctx(), Badge::Err, ""), "[ERR]");
    }

    #[test]
    fn test_choice_plain() {
        assert_eq!(choice(&plain_ctx(), "a", "Add"), "a) Add");
    }

    #[test]
    fn test_framed_uses_widest_line() {
        let out = framed(&plain_ctx(), "short\nmuch longer");
        assert_eq!(out, "-----------\nshort\nmuch longer\n-----------");
    }

    #[test]
    fn test_heading_underline() {
        assert_eq!(heading(&plain_ctx(), "Title"), "Title\n=====");
    }

    #[test]
    fn test_error_message_with_hint() {
        let out = error_message(&plain_ctx(), "Boom", Some("try again"));
        assert_eq!(out, "[ERR] Boom\nHint: try again");
    }
}
