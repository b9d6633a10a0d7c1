//! Utility functions and constants for HTML output.

/// Void (self-closing) HTML elements
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Check if a tag is a void element
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag.to_lowercase().as_str())
}

/// Escape text content
pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape an attribute value for a double-quoted attribute
pub fn escape_attribute(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Append CSS declarations to an inline style value
pub fn append_style(style: &str, declarations: &str) -> String {
    let style = style.trim();
    if style.is_empty() {
        return declarations.to_string();
    }
    if style.ends_with(';') {
        format!("{} {}", style, declarations)
    } else {
        format!("{}; {}", style, declarations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_void() {
        assert!(is_void("br"));
        assert!(is_void("img"));
        assert!(is_void("HR"));
        assert!(!is_void("div"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape_text("\"a\" < b & c"), "\"a\" &lt; b &amp; c");
        assert_eq!(escape_attribute("\"a\" & b"), "&quot;a&quot; &amp; b");
    }

    #[test]
    fn test_append_style() {
        assert_eq!(append_style("", "height: auto;"), "height: auto;");
        assert_eq!(
            append_style("max-width: 600px;", "height: auto;"),
            "max-width: 600px; height: auto;"
        );
        assert_eq!(
            append_style("color: red", "height: auto;"),
            "color: red; height: auto;"
        );
    }
}
