//! URI encoding.

/// Wraps `value` in angle brackets.
///
/// No escaping or validation takes place; the caller supplies a URI that is
/// already safe to embed between `<` and `>`. `None` yields the empty string.
///
/// # Examples
///
/// ```rust
/// use turtle_encode::uri::encode_uri;
///
/// assert_eq!(encode_uri(None), "");
/// assert_eq!(encode_uri(Some("")), "<>");
/// assert_eq!(encode_uri(Some("http://x")), "<http://x>");
/// ```
#[must_use]
pub fn encode_uri(value: Option<&str>) -> String {
    match value {
        None => String::new(),
        Some(uri) => {
            let mut out = String::with_capacity(uri.len() + 2);
            out.push('<');
            out.push_str(uri);
            out.push('>');
            out
        }
    }
}
