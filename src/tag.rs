//! Language tags and datatypes attached to literals.
//!
//! The encoder itself only ever sees a resolved [`LiteralTag`], which cannot
//! hold a language and a datatype at the same time. [`TagSpec`] is the looser
//! input form used by [`crate::literal`]: it accepts a single positional tag
//! string (classified by [`LiteralTag::infer`]) or explicitly keyed
//! `lang`/`datatype` values, and reports [`Error::ConflictingTag`] when both
//! keys are given.
//!
//! ## Examples
//!
//! ```rust
//! use turtle_encode::{LiteralTag, TagSpec};
//!
//! assert_eq!(LiteralTag::infer("en-GB"), LiteralTag::Language("en-GB".into()));
//! assert_eq!(
//!     LiteralTag::infer("http://www.w3.org/2001/XMLSchema#gYear"),
//!     LiteralTag::Datatype("http://www.w3.org/2001/XMLSchema#gYear".into())
//! );
//!
//! let tag = TagSpec::datatype("xs:gYear").resolve().unwrap();
//! assert_eq!(tag.to_string(), "^^<xs:gYear>");
//! ```

use crate::{Error, Result};
use std::fmt;

/// The tag carried by a single literal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum LiteralTag {
    /// Plain literal.
    #[default]
    None,
    /// Language-tagged literal, rendered as `@tag`.
    Language(String),
    /// Typed literal, rendered as `^^<datatype>`.
    Datatype(String),
}

impl LiteralTag {
    /// Creates a language tag. An empty tag means "no tag".
    #[must_use]
    pub fn language(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if tag.is_empty() {
            LiteralTag::None
        } else {
            LiteralTag::Language(tag)
        }
    }

    /// Creates a datatype tag. An empty datatype means "no tag".
    #[must_use]
    pub fn datatype(iri: impl Into<String>) -> Self {
        let iri = iri.into();
        if iri.is_empty() {
            LiteralTag::None
        } else {
            LiteralTag::Datatype(iri)
        }
    }

    /// Classifies a bare tag string.
    ///
    /// Strings made only of ASCII letters, digits and hyphens are language
    /// tags; anything else is taken to be a datatype URI. The empty string
    /// yields [`LiteralTag::None`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use turtle_encode::LiteralTag;
    ///
    /// assert!(LiteralTag::infer("de").is_language());
    /// assert!(LiteralTag::infer("xsd:date").is_datatype());
    /// assert!(LiteralTag::infer("").is_none());
    /// ```
    #[must_use]
    pub fn infer(tag: &str) -> Self {
        if tag.is_empty() {
            LiteralTag::None
        } else if is_language_tag(tag) {
            LiteralTag::Language(tag.to_string())
        } else {
            LiteralTag::Datatype(tag.to_string())
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, LiteralTag::None)
    }

    #[inline]
    #[must_use]
    pub const fn is_language(&self) -> bool {
        matches!(self, LiteralTag::Language(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_datatype(&self) -> bool {
        matches!(self, LiteralTag::Datatype(_))
    }

    /// Appends the rendered suffix (`@en`, `^^<...>` or nothing) to `out`.
    pub fn write_suffix(&self, out: &mut String) {
        match self {
            LiteralTag::None => {}
            LiteralTag::Language(lang) => {
                out.push('@');
                out.push_str(lang);
            }
            LiteralTag::Datatype(iri) => {
                out.push_str("^^<");
                out.push_str(iri);
                out.push('>');
            }
        }
    }
}

impl fmt::Display for LiteralTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralTag::None => Ok(()),
            LiteralTag::Language(lang) => write!(f, "@{}", lang),
            LiteralTag::Datatype(iri) => write!(f, "^^<{}>", iri),
        }
    }
}

/// Returns `true` if `tag` matches `^[a-zA-Z0-9-]+$`.
#[inline]
#[must_use]
pub fn is_language_tag(tag: &str) -> bool {
    !tag.is_empty() && tag.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

/// Unresolved tag input for [`crate::literal`].
///
/// # Examples
///
/// ```rust
/// use turtle_encode::{LiteralTag, TagSpec};
///
/// // one positional argument, classified by shape
/// let spec: TagSpec = "en".into();
/// assert_eq!(spec.resolve().unwrap(), LiteralTag::Language("en".into()));
///
/// // keyed
/// let spec = TagSpec::datatype("http://www.w3.org/2001/XMLSchema#int");
/// assert!(spec.resolve().unwrap().is_datatype());
///
/// // both keys is a usage error
/// assert!(TagSpec::lang("en").with_datatype("xsd:string").resolve().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum TagSpec {
    #[default]
    Untagged,
    /// A single tag string whose kind is decided by [`LiteralTag::infer`].
    Inferred(String),
    /// Explicit `lang` and/or `datatype` keys.
    Keyed {
        lang: Option<String>,
        datatype: Option<String>,
    },
}

impl TagSpec {
    /// Keyed `lang` only.
    #[must_use]
    pub fn lang(lang: impl Into<String>) -> Self {
        TagSpec::Keyed {
            lang: Some(lang.into()),
            datatype: None,
        }
    }

    /// Keyed `datatype` only.
    #[must_use]
    pub fn datatype(iri: impl Into<String>) -> Self {
        TagSpec::Keyed {
            lang: None,
            datatype: Some(iri.into()),
        }
    }

    /// Sets the `lang` key, converting an inferred or untagged tag to the keyed form.
    #[must_use]
    pub fn with_lang(self, lang: impl Into<String>) -> Self {
        let (_, datatype) = self.into_keys();
        TagSpec::Keyed {
            lang: Some(lang.into()),
            datatype,
        }
    }

    /// Sets the `datatype` key, converting an inferred or untagged tag to the keyed form.
    #[must_use]
    pub fn with_datatype(self, iri: impl Into<String>) -> Self {
        let (lang, _) = self.into_keys();
        TagSpec::Keyed {
            lang,
            datatype: Some(iri.into()),
        }
    }

    fn into_keys(self) -> (Option<String>, Option<String>) {
        match self {
            TagSpec::Untagged => (None, None),
            TagSpec::Inferred(tag) => match LiteralTag::infer(&tag) {
                LiteralTag::None => (None, None),
                LiteralTag::Language(lang) => (Some(lang), None),
                LiteralTag::Datatype(iri) => (None, Some(iri)),
            },
            TagSpec::Keyed { lang, datatype } => (lang, datatype),
        }
    }

    /// Resolves into a [`LiteralTag`].
    ///
    /// Empty key values count as absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConflictingTag`] if both a language and a datatype are present.
    pub fn resolve(self) -> Result<LiteralTag> {
        match self {
            TagSpec::Untagged => Ok(LiteralTag::None),
            TagSpec::Inferred(tag) => Ok(LiteralTag::infer(&tag)),
            TagSpec::Keyed { lang, datatype } => {
                let lang = lang.filter(|l| !l.is_empty());
                let datatype = datatype.filter(|d| !d.is_empty());
                match (lang, datatype) {
                    (Some(lang), Some(datatype)) => Err(Error::conflicting_tag(&lang, &datatype)),
                    (Some(lang), None) => Ok(LiteralTag::Language(lang)),
                    (None, Some(datatype)) => Ok(LiteralTag::Datatype(datatype)),
                    (None, None) => Ok(LiteralTag::None),
                }
            }
        }
    }
}

impl From<&str> for TagSpec {
    fn from(tag: &str) -> Self {
        TagSpec::Inferred(tag.to_string())
    }
}

impl From<String> for TagSpec {
    fn from(tag: String) -> Self {
        TagSpec::Inferred(tag)
    }
}

impl From<Option<&str>> for TagSpec {
    fn from(tag: Option<&str>) -> Self {
        tag.map_or(TagSpec::Untagged, TagSpec::from)
    }
}

impl From<LiteralTag> for TagSpec {
    fn from(tag: LiteralTag) -> Self {
        match tag {
            LiteralTag::None => TagSpec::Untagged,
            LiteralTag::Language(lang) => TagSpec::lang(lang),
            LiteralTag::Datatype(iri) => TagSpec::datatype(iri),
        }
    }
}
