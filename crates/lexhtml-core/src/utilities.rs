//! Escaping and small formatting helpers.

use once_cell::sync::Lazy;
use regex::Regex;

static UNSAFE_SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(javascript|vbscript|data):").unwrap());

/// Escape `&`, `<`, `>`, `"` and `'` for text or attribute context
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_html_into(text, &mut out);
    out
}

pub(crate) fn escape_html_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// Check whether a link URL uses a scheme that can run script.
///
/// Whitespace and control characters are ignored, since browsers strip
/// them before resolving the scheme.
pub fn is_unsafe_url(url: &str) -> bool {
    let compact: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();
    UNSAFE_SCHEME.is_match(&compact)
}

/// Format a pixel dimension without a trailing `.0`
pub(crate) fn format_dimension(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Trimmed, non-empty attribute value
pub(crate) fn clean_attribute(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_unsafe_url() {
        assert!(is_unsafe_url("javascript:alert(1)"));
        assert!(is_unsafe_url("  JavaScript:alert(1)"));
        assert!(is_unsafe_url("java\tscript:alert(1)"));
        assert!(is_unsafe_url("data:text/html;base64,xx"));
        assert!(!is_unsafe_url("https://example.com/javascript:"));
        assert!(!is_unsafe_url("/relative/path"));
    }

    #[test]
    fn test_format_dimension() {
        assert_eq!(format_dimension(600.0), "600");
        assert_eq!(format_dimension(12.5), "12.5");
    }

    #[test]
    fn test_clean_attribute() {
        assert_eq!(clean_attribute(Some("  _blank ")), Some("_blank"));
        assert_eq!(clean_attribute(Some("   ")), None);
        assert_eq!(clean_attribute(None), None);
    }
}
