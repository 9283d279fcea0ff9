//! Error types for Turtle encoding.
//!
//! Encoding is almost entirely infallible: undefined values, empty strings and
//! objects of an unexpected shape are dropped from the output rather than
//! reported. The one usage error is asking for a literal that carries both a
//! language tag and a datatype.
//!
//! ## Examples
//!
//! ```rust
//! use turtle_encode::{literal, Error, TagSpec};
//!
//! let result = literal("chat", TagSpec::lang("fr").with_datatype("xsd:string"));
//! assert!(matches!(result, Err(Error::ConflictingTag { .. })));
//!
//! if let Err(err) = result {
//!     assert!(err.to_string().contains("language tag `fr`"));
//! }
//! ```

use thiserror::Error;

/// Represents all possible errors raised by the encoder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A literal was requested with both a language tag and a datatype.
    #[error("Conflicting literal tags: language tag `{lang}` and datatype `{datatype}` are mutually exclusive")]
    ConflictingTag { lang: String, datatype: String },
}

impl Error {
    /// Creates a conflicting tag error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use turtle_encode::Error;
    ///
    /// let err = Error::conflicting_tag("en", "xsd:string");
    /// assert!(err.to_string().contains("mutually exclusive"));
    /// ```
    pub fn conflicting_tag(lang: &str, datatype: &str) -> Self {
        Error::ConflictingTag {
            lang: lang.to_string(),
            datatype: datatype.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
