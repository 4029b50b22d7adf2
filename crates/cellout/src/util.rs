//! Text helpers shared by the built-in handlers.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Escapes HTML special characters for safe embedding in markup.
///
/// ```rust
/// use cellout::html_escape;
///
/// assert_eq!(html_escape("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
/// ```
pub fn html_escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Truncates a string to a maximum display width, ending with `…` when cut.
///
/// Wide characters (CJK) count as two columns.
///
/// ```rust
/// use cellout::truncate_to_width;
///
/// assert_eq!(truncate_to_width("3.14159", 10), "3.14159");
/// assert_eq!(truncate_to_width("0.333333333", 6), "0.333…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
