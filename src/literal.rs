//! Literal encoding.
//!
//! [`encode_literal`] renders a scalar (or a sequence of scalars) as escaped,
//! double-quoted Turtle literals with an optional language or datatype
//! suffix. [`encode_literal_list`] is the front end for the three literal
//! shapes callers usually have at hand: a scalar, a list, or a language map.
//!
//! ```rust
//! use turtle_encode::literal::{encode_literal, encode_literal_list};
//! use turtle_encode::{LanguageMap, LiteralTag, ObjectValue};
//!
//! let tag = LiteralTag::Language("en".into());
//! assert_eq!(encode_literal(&ObjectValue::from("x"), &tag), "\"x\"@en");
//!
//! let names: LanguageMap = [("en", "Vienna"), ("de", "Wien")].into_iter().collect();
//! assert_eq!(
//!     encode_literal_list(&ObjectValue::from(names)),
//!     "\"Vienna\"@en, \"Wien\"@de"
//! );
//! ```

use crate::escape::escape_into;
use crate::{LiteralTag, ObjectValue};

/// Separator between the literals of a sequence.
pub const LIST_SEPARATOR: &str = ", ";

/// Encodes `value` as one or more literals carrying `tag`.
///
/// - `Omitted` and the empty string render as `""` (the Rust empty string,
///   not an empty literal) and never carry the tag.
/// - A `Sequence` renders each scalar element with the same tag, joined by
///   `", "`. Elements that are themselves sequences or language maps are
///   not flattened further and count as absent.
/// - A `LanguageMap` is not a literal shape here and renders as absent; use
///   [`encode_literal_list`] for it.
#[must_use]
pub fn encode_literal(value: &ObjectValue, tag: &LiteralTag) -> String {
    match value {
        ObjectValue::Sequence(items) => {
            let mut out = String::new();
            for item in items {
                let start = out.len();
                if start > 0 {
                    out.push_str(LIST_SEPARATOR);
                }
                let sep_end = out.len();
                write_scalar(&mut out, item, tag);
                if out.len() == sep_end {
                    out.truncate(start);
                }
            }
            out
        }
        _ => {
            let mut out = String::new();
            write_scalar(&mut out, value, tag);
            out
        }
    }
}

/// Appends a single literal to `out`, or nothing if `value` is not a non-empty scalar.
fn write_scalar(out: &mut String, value: &ObjectValue, tag: &LiteralTag) {
    let s = match value {
        ObjectValue::Scalar(s) if !s.is_empty() => s,
        _ => return,
    };
    out.reserve(s.len() + 2);
    out.push('"');
    escape_into(out, s);
    out.push('"');
    tag.write_suffix(out);
}

/// Encodes a scalar, a sequence, or a language map as a comma-joined literal list.
///
/// Each language map entry becomes literals tagged with the entry's key, in
/// map order; the empty key produces untagged literals. Entries whose values
/// are lists contribute one literal per element. Scalars and sequences are
/// encoded untagged.
///
/// # Examples
///
/// ```rust
/// use turtle_encode::literal::encode_literal_list;
/// use turtle_encode::{LanguageMap, ObjectValue};
///
/// let map: LanguageMap = [("en", "A"), ("", "B")].into_iter().collect();
/// assert_eq!(encode_literal_list(&ObjectValue::from(map)), "\"A\"@en, \"B\"");
///
/// assert_eq!(encode_literal_list(&ObjectValue::from(["a", "b"])), "\"a\", \"b\"");
/// ```
#[must_use]
pub fn encode_literal_list(input: &ObjectValue) -> String {
    match input {
        ObjectValue::LanguageMap(map) => {
            let rendered: Vec<String> = map
                .iter()
                .map(|(lang, value)| encode_literal(value, &LiteralTag::language(lang.as_str())))
                .filter(|literal| !literal.is_empty())
                .collect();
            rendered.join(LIST_SEPARATOR)
        }
        other => encode_literal(other, &LiteralTag::None),
    }
}
