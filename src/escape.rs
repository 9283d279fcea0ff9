//! The escaping table shared by every literal the crate renders.
//!
//! Turtle short string literals (`"..."`) may not contain a raw double quote,
//! backslash, line feed or carriage return. Tabs are escaped as well so a
//! rendered literal always fits on one line.
//!
//! | Raw | Escaped |
//! |-----|---------|
//! | tab | `\t` |
//! | line feed | `\n` |
//! | carriage return | `\r` |
//! | `"` | `\"` |
//! | `\` | `\\` |

/// Returns the escape sequence for `ch`, if it needs one.
#[inline]
#[must_use]
pub const fn escape_sequence(ch: char) -> Option<&'static str> {
    match ch {
        '\t' => Some("\\t"),
        '\n' => Some("\\n"),
        '\r' => Some("\\r"),
        '"' => Some("\\\""),
        '\\' => Some("\\\\"),
        _ => None,
    }
}

/// Returns `true` if `s` contains a character that must be escaped.
#[inline]
#[must_use]
pub fn needs_escaping(s: &str) -> bool {
    s.chars().any(|ch| escape_sequence(ch).is_some())
}

/// Appends `s` to `out`, escaping it in a single pass.
pub fn escape_into(out: &mut String, s: &str) {
    if !needs_escaping(s) {
        out.push_str(s);
        return;
    }
    for ch in s.chars() {
        match escape_sequence(ch) {
            Some(seq) => out.push_str(seq),
            None => out.push(ch),
        }
    }
}

/// Escapes `s` for use inside a double-quoted Turtle string.
///
/// # Examples
///
/// ```rust
/// use turtle_encode::escape::escape;
///
/// assert_eq!(escape("say \"hi\""), "say \\\"hi\\\"");
/// assert_eq!(escape("a\tb\nc"), "a\\tb\\nc");
/// assert_eq!(escape("plain"), "plain");
/// ```
#[must_use]
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    escape_into(&mut out, s);
    out
}
