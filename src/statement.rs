//! Statement assembly.
//!
//! A statement is a subject followed by a predicate list:
//!
//! ```text
//! <urn:1> a <urn:Doc> ;
//!     dc:title "Title"@en .
//! ```
//!
//! Without a subject the predicate list is wrapped in an anonymous blank
//! node: `[ dc:creator Alice, Bob ] .`
//!
//! Only language maps are escaped on the way through. Scalars and sequence
//! elements are taken as ready-made Turtle terms, so build them with
//! [`crate::literal`], [`crate::uri`] or [`crate::typed`] first.

use crate::literal::{encode_literal_list, LIST_SEPARATOR};
use crate::{ObjectValue, PredicateMap};
use std::borrow::Borrow;
use std::fmt;

/// Separator between the predicate/object pairs of one statement.
pub const PREDICATE_SEPARATOR: &str = " ;\n";

/// Indentation of every predicate after the first.
pub const INDENT: &str = "    ";

/// Renders the object of one predicate, or `None` if it contributes nothing.
fn render_object(object: &ObjectValue) -> Option<String> {
    if object.is_absent() {
        return None;
    }
    let rendered = match object {
        ObjectValue::Omitted => return None,
        ObjectValue::Scalar(s) => s.clone(),
        ObjectValue::Sequence(items) => {
            let terms: Vec<&str> = items
                .iter()
                .filter_map(ObjectValue::as_str)
                .filter(|s| !s.is_empty())
                .collect();
            terms.join(LIST_SEPARATOR)
        }
        ObjectValue::LanguageMap(_) => encode_literal_list(object),
    };
    (!rendered.is_empty()).then_some(rendered)
}

/// Assembles one Turtle statement.
///
/// Predicates whose object renders empty are left out. If none remain the
/// result is the empty string; otherwise it ends with `" .\n"`. An absent
/// `subject` produces a blank node subject (`[ ... ]`). A present subject is
/// written as given, even when it is the empty string.
///
/// Output order follows the iteration order of `predicates`, so pass a
/// [`PredicateMap`] (or any ordered collection) when order matters.
///
/// # Examples
///
/// ```rust
/// use turtle_encode::statement::assemble_statement;
/// use turtle_encode::{LanguageMap, ObjectValue};
///
/// let title: LanguageMap = [("en", "Title")].into_iter().collect();
/// let predicates = vec![
///     ("a", ObjectValue::from("<urn:Doc>")),
///     ("dc:title", ObjectValue::from(title)),
/// ];
///
/// assert_eq!(
///     assemble_statement(Some("<urn:1>"), predicates),
///     "<urn:1> a <urn:Doc> ;\n    dc:title \"Title\"@en .\n"
/// );
/// ```
#[must_use]
pub fn assemble_statement<I, K, V>(subject: Option<&str>, predicates: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Borrow<ObjectValue>,
{
    let mut body = String::new();
    for (predicate, object) in predicates {
        let predicate = predicate.as_ref();
        let Some(rendered) = render_object(object.borrow()) else {
            tracing::trace!(predicate, "dropping predicate with empty object");
            continue;
        };
        if !body.is_empty() {
            body.push_str(PREDICATE_SEPARATOR);
            body.push_str(INDENT);
        }
        body.push_str(predicate);
        body.push(' ');
        body.push_str(&rendered);
    }

    if body.is_empty() {
        tracing::trace!(subject = ?subject, "statement has no predicates left, emitting nothing");
        return body;
    }

    match subject {
        Some(subject) => format!("{} {} .\n", subject, body),
        None => format!("[ {} ] .\n", body),
    }
}

/// A subject with its predicate/object pairs.
///
/// # Examples
///
/// ```rust
/// use turtle_encode::{literal, uri, Statement, TagSpec};
///
/// let doc = Statement::new(uri(Some("urn:1")))
///     .with("a", uri(Some("urn:Doc")))
///     .with("dc:title", literal("Title", TagSpec::lang("en")).unwrap());
///
/// assert_eq!(
///     doc.to_string(),
///     "<urn:1> a <urn:Doc> ;\n    dc:title \"Title\"@en .\n"
/// );
///
/// let anon = Statement::blank().with("foaf:name", "\"Bob\"");
/// assert_eq!(anon.render(), "[ foaf:name \"Bob\" ] .\n");
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Statement {
    pub subject: Option<String>,
    pub predicates: PredicateMap,
}

impl Statement {
    /// Creates a statement about `subject`, a preformatted URI or blank node token.
    #[must_use]
    pub fn new(subject: impl Into<String>) -> Self {
        Statement {
            subject: Some(subject.into()),
            predicates: PredicateMap::new(),
        }
    }

    /// Creates a statement with an anonymous blank node subject.
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    /// Adds a predicate/object pair.
    #[must_use]
    pub fn with(mut self, predicate: impl Into<String>, object: impl Into<ObjectValue>) -> Self {
        self.predicates.insert(predicate, object);
        self
    }

    /// Adds a predicate/object pair, returning the previous object for that predicate.
    pub fn insert(
        &mut self,
        predicate: impl Into<String>,
        object: impl Into<ObjectValue>,
    ) -> Option<ObjectValue> {
        self.predicates.insert(predicate, object)
    }

    /// Renders the statement; see [`assemble_statement`].
    #[must_use]
    pub fn render(&self) -> String {
        assemble_statement(self.subject.as_deref(), &self.predicates)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
