//! HTML escaping helpers for the two injection contexts the crate writes into.
//!
//! Element content is escaped once, at authoring time, by the deterministic
//! generator; attribute values are escaped at render time regardless of where
//! they came from.

/// Escape the five HTML metacharacters for element-content position.
///
/// Applied exactly once to caller-supplied product text before it is
/// interpolated into copy templates. Ampersand is replaced first so already
/// produced entities are never re-escaped within a single pass.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Escape a value for double-quoted attribute position (URLs, alt text, ids).
pub fn escape_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{escape_attr, escape_html};

    #[test]
    fn escape_html_covers_all_five_metacharacters() {
        assert_eq!(
            escape_html(r#"<b>"Glow" & Co's</b>"#),
            "&lt;b&gt;&quot;Glow&quot; &amp; Co&#39;s&lt;/b&gt;"
        );
    }

    #[test]
    fn escape_html_is_single_pass() {
        // An ampersand that is already part of an entity still escapes its
        // own ampersand once; the function never walks its own output.
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn escape_attr_neutralises_quote_breakout() {
        assert_eq!(
            escape_attr(r#"https://x.test/a?b="1"&c='2'"#),
            "https://x.test/a?b=&quot;1&quot;&amp;c=&#39;2&#39;"
        );
    }
}
