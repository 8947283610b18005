//! HTML escaping for rendering project fields.

/// Escape `text` for interpolation into HTML.
///
/// `&`, `<`, `>`, `"` and `'` become `&amp;`, `&lt;`, `&gt;`, `&quot;` and
/// `&#39;`. The input is scanned once, so entities produced here are never
/// escaped a second time. Escaping is not idempotent: escaping the output
/// again turns each `&` of an entity into `&amp;`.
///
/// Missing values render as the empty string.
///
/// # Example
///
/// ```rust
/// use projectlist::escape_html;
///
/// assert_eq!(
///     escape_html(Some("<script>alert(\"xss\")</script>")),
///     "&lt;script&gt;alert(&quot;xss&quot;)&lt;/script&gt;"
/// );
/// assert_eq!(escape_html(None), "");
/// ```
pub fn escape_html(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(
            escape_html(Some("<script>alert(\"xss\")</script>")),
            "&lt;script&gt;alert(&quot;xss&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escape_none_and_empty() {
        assert_eq!(escape_html(None), "");
        assert_eq!(escape_html(Some("")), "");
    }

    #[test]
    fn test_escape_ampersand() {
        assert_eq!(escape_html(Some("foo & bar")), "foo &amp; bar");
    }

    #[test]
    fn test_escape_single_quote() {
        assert_eq!(escape_html(Some("it's")), "it&#39;s");
    }

    #[test]
    fn test_escape_single_pass() {
        assert_eq!(escape_html(Some("<&>")), "&lt;&amp;&gt;");
    }

    #[test]
    fn test_escape_not_idempotent() {
        let once = escape_html(Some("a < b"));
        let twice = escape_html(Some(once.as_str()));
        assert_eq!(once, "a &lt; b");
        assert_eq!(twice, "a &amp;lt; b");
    }

    #[test]
    fn test_escape_plain_text_unchanged() {
        let text = "Codev CLI (First-Class Command) — 音楽";
        assert_eq!(escape_html(Some(text)), text);
        assert_eq!(escape_html(Some(escape_html(Some(text)).as_str())), text);
    }
}
