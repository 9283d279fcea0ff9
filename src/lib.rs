//! # turtle_encode
//!
//! Encode literals, URIs and subject/predicate/object statements as RDF
//! [Turtle](https://www.w3.org/TR/turtle/) text, without an RDF data model.
//!
//! ## What it does
//!
//! - **Literals**: escaping, double quoting, language tags (`"chat"@fr`) and
//!   datatypes (`"1987"^^<xs:gYear>`)
//! - **URIs**: angle-bracket wrapping (`<http://example.org/>`)
//! - **Statements**: predicate lists, blank node subjects, and silent omission
//!   of empty or undefined objects
//!
//! It does not parse Turtle, validate URIs or predicate tokens, resolve
//! prefixed names, or write `@prefix`/`@base` directives.
//!
//! ## Quick Start
//!
//! ```rust
//! use turtle_encode::{literal, predicates, statement, uri, TagSpec};
//!
//! let subject = uri(Some("urn:1"));
//! let map = predicates!({
//!     "a": "<urn:Doc>",
//!     "dc:title": { "en": "Title" },
//!     "dc:date": (literal("1987", TagSpec::datatype("xs:gYear")).unwrap()),
//!     "dc:subject": null
//! });
//!
//! assert_eq!(
//!     statement(Some(subject.as_str()), &map),
//!     "<urn:1> a <urn:Doc> ;\n    dc:title \"Title\"@en ;\n    dc:date \"1987\"^^<xs:gYear> .\n"
//! );
//! ```
//!
//! ### Anonymous subjects
//!
//! ```rust
//! use turtle_encode::{statement, ObjectValue};
//!
//! let out = statement(None, [("dc:creator", ObjectValue::from(["Alice", "Bob"]))]);
//! assert_eq!(out, "[ dc:creator Alice, Bob ] .\n");
//! ```
//!
//! ## Escaping contract
//!
//! Objects given to [`statement`] as plain scalars or sequences are inserted
//! verbatim: they are expected to be Turtle terms already, built with
//! [`literal`], [`uri`] or the [`typed`] helpers. Only language maps are
//! escaped by the assembler.
//!
//! ## Tag inference
//!
//! [`literal`] accepts one positional tag. A tag made only of ASCII letters,
//! digits and hyphens is a language tag; anything else is a datatype URI. Use
//! [`TagSpec::lang`] or [`TagSpec::datatype`] to be explicit; giving both is
//! an [`Error::ConflictingTag`].
//!
//! ## Concurrency
//!
//! Every function is pure and stateless, and every type is `Send + Sync`.

pub mod macros;

pub mod error;
pub mod escape;
pub mod literal;
pub mod map;
pub mod statement;
pub mod tag;
pub mod typed;
pub mod uri;
pub mod value;

pub use error::{Error, Result};
pub use map::{LanguageMap, PredicateMap};
pub use statement::Statement;
pub use tag::{LiteralTag, TagSpec};
pub use value::ObjectValue;

use std::borrow::Borrow;

/// Wraps a URI in angle brackets; `None` yields the empty string.
///
/// # Examples
///
/// ```rust
/// use turtle_encode::uri;
///
/// assert_eq!(uri(None), "");
/// assert_eq!(uri(Some("")), "<>");
/// assert_eq!(uri(Some("http://x")), "<http://x>");
/// ```
#[must_use]
pub fn uri(text: Option<&str>) -> String {
    uri::encode_uri(text)
}

/// Encodes a scalar or a sequence of scalars as Turtle literals.
///
/// `tag` may be [`TagSpec::Untagged`], a bare string (classified as a
/// language tag or datatype by its shape), or keyed with
/// [`TagSpec::lang`] / [`TagSpec::datatype`].
///
/// # Examples
///
/// ```rust
/// use turtle_encode::{literal, TagSpec};
///
/// assert_eq!(literal("x", "en").unwrap(), "\"x\"@en");
/// assert_eq!(literal("1987", "xs:gYear").unwrap(), "\"1987\"^^<xs:gYear>");
/// assert_eq!(literal(vec!["a", "b"], TagSpec::Untagged).unwrap(), "\"a\", \"b\"");
/// assert_eq!(literal("", "en").unwrap(), "");
/// ```
///
/// # Errors
///
/// Returns [`Error::ConflictingTag`] if both a language tag and a datatype
/// are given.
pub fn literal<V, T>(value: V, tag: T) -> Result<String>
where
    V: Into<ObjectValue>,
    T: Into<TagSpec>,
{
    let tag = tag.into().resolve()?;
    Ok(literal::encode_literal(&value.into(), &tag))
}

/// Encodes a scalar, a sequence, or a language map as a literal list.
///
/// # Examples
///
/// ```rust
/// use turtle_encode::{literal_list, turtle_object};
///
/// assert_eq!(literal_list(turtle_object!({ "en": "A", "": "B" })), "\"A\"@en, \"B\"");
/// assert_eq!(literal_list("x"), "\"x\"");
/// ```
#[must_use]
pub fn literal_list<V>(value: V) -> String
where
    V: Into<ObjectValue>,
{
    literal::encode_literal_list(&value.into())
}

/// Assembles a Turtle statement from a subject and its predicate/object pairs.
///
/// See [`statement::assemble_statement`] for the exact rules.
#[must_use]
pub fn statement<I, K, V>(subject: Option<&str>, predicates: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Borrow<ObjectValue>,
{
    statement::assemble_statement(subject, predicates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_with_inferred_tags() {
        assert_eq!(literal("x", "en").unwrap(), "\"x\"@en");
        assert_eq!(literal("x", "en-GB").unwrap(), "\"x\"@en-GB");
        assert_eq!(
            literal("5", "http://www.w3.org/2001/XMLSchema#int").unwrap(),
            "\"5\"^^<http://www.w3.org/2001/XMLSchema#int>"
        );
    }

    #[test]
    fn test_literal_with_keyed_tags() {
        assert_eq!(literal("x", TagSpec::lang("en")).unwrap(), "\"x\"@en");
        assert_eq!(
            literal("1987", TagSpec::datatype("xs:gYear")).unwrap(),
            "\"1987\"^^<xs:gYear>"
        );
        // a datatype key skips inference even for a language-shaped value
        assert_eq!(literal("x", TagSpec::datatype("foo")).unwrap(), "\"x\"^^<foo>");
    }

    #[test]
    fn test_literal_conflicting_tags() {
        let err = literal("x", TagSpec::lang("en").with_datatype("xs:string")).unwrap_err();
        assert!(matches!(err, Error::ConflictingTag { .. }));
    }

    #[test]
    fn test_conflict_is_reported_for_absent_values_too() {
        assert!(literal(None::<&str>, TagSpec::lang("en").with_datatype("xs:string")).is_err());
    }

    #[test]
    fn test_literal_absent_values() {
        assert_eq!(literal(None::<&str>, "en").unwrap(), "");
        assert_eq!(literal("", TagSpec::datatype("xs:string")).unwrap(), "");
    }

    #[test]
    fn test_types_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ObjectValue>();
        assert_send_sync::<PredicateMap>();
        assert_send_sync::<Statement>();
        assert_send_sync::<TagSpec>();
        assert_send_sync::<Error>();
    }
}
