//! String escaping shared by the renderers.
//!
//! Neither function is a general escaper. HTML escaping covers text content only, and
//! front-matter escaping only protects the double-quoted scalar it is written into.

/// Escape `&`, `<`, `>`, `"` and `'` for HTML text and attribute values.
///
/// Single pass, so entities produced here are never escaped again.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a value for a double-quoted front-matter scalar: `"` becomes `\"`, nothing else.
pub fn escape_front_matter(text: &str) -> String {
    text.replace('"', "\\\"")
}
