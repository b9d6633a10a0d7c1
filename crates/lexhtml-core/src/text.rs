//! Text-run formatting
//!
//! Turns a text leaf and its format bitmask into nested inline tags.

use crate::format::TextFormat;
use crate::utilities::escape_html_into;

/// Format flags in wrapping order, innermost first
const FORMAT_TAGS: [(TextFormat, &str); 8] = [
    (TextFormat::CODE, "code"),
    (TextFormat::BOLD, "strong"),
    (TextFormat::ITALIC, "em"),
    (TextFormat::STRIKETHROUGH, "s"),
    (TextFormat::UNDERLINE, "u"),
    (TextFormat::SUBSCRIPT, "sub"),
    (TextFormat::SUPERSCRIPT, "sup"),
    (TextFormat::HIGHLIGHT, "mark"),
];

/// Render a text run to HTML
///
/// ```rust
/// use lexhtml_core::{render_text, TextFormat};
///
/// let html = render_text("a < b", TextFormat::BOLD | TextFormat::ITALIC);
/// assert_eq!(html, "<em><strong>a &lt; b</strong></em>");
/// ```
pub fn render_text(text: &str, format: TextFormat) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    write_text(text, format, &mut out);
    out
}

pub(crate) fn write_text(text: &str, format: TextFormat, out: &mut String) {
    if text.is_empty() {
        return;
    }

    let tags: Vec<&str> = FORMAT_TAGS
        .iter()
        .filter(|(flag, _)| format.contains(*flag))
        .map(|(_, tag)| *tag)
        .collect();

    for tag in tags.iter().rev() {
        out.push('<');
        out.push_str(tag);
        out.push('>');
    }

    escape_html_into(text, out);

    for tag in &tags {
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_escaped() {
        assert_eq!(
            render_text("1 < 2 & \"3\"", TextFormat::NONE),
            "1 &lt; 2 &amp; &quot;3&quot;"
        );
    }

    #[test]
    fn test_bold_italic_order() {
        assert_eq!(
            render_text("text", TextFormat::ITALIC | TextFormat::BOLD),
            "<em><strong>text</strong></em>"
        );
    }

    #[test]
    fn test_code_is_innermost() {
        assert_eq!(
            render_text("x", TextFormat::CODE | TextFormat::UNDERLINE),
            "<u><code>x</code></u>"
        );
    }

    #[test]
    fn test_full_nesting_order() {
        assert_eq!(
            render_text("x", TextFormat::from_bits(0x7f)),
            "<sup><sub><u><s><em><strong><code>x</code></strong></em></s></u></sub></sup>"
        );
    }

    #[test]
    fn test_sub_and_superscript_both_apply() {
        assert_eq!(
            render_text("2", TextFormat::SUBSCRIPT | TextFormat::SUPERSCRIPT),
            "<sup><sub>2</sub></sup>"
        );
    }

    #[test]
    fn test_highlight() {
        assert_eq!(
            render_text("hot", TextFormat::HIGHLIGHT | TextFormat::BOLD),
            "<mark><strong>hot</strong></mark>"
        );
    }

    #[test]
    fn test_empty_text_renders_nothing() {
        assert_eq!(render_text("", TextFormat::BOLD), "");
    }

    #[test]
    fn test_unknown_bits_ignored() {
        assert_eq!(render_text("x", TextFormat::from_bits(1 << 12)), "x");
    }
}
