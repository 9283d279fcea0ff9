//! Typed literals for native Rust values.
//!
//! Each function renders its value in the lexical form of the matching XSD
//! datatype and tags it with the full datatype IRI:
//!
//! | Function | Datatype |
//! |----------|----------|
//! | [`boolean`] | `xsd:boolean` |
//! | [`integer`], [`big_integer`] | `xsd:integer` |
//! | [`double`] | `xsd:double` |
//! | [`date_time`] | `xsd:dateTime` |
//! | [`date`] | `xsd:date` |
//!
//! ```rust
//! use turtle_encode::typed;
//!
//! assert_eq!(
//!     typed::integer(42),
//!     "\"42\"^^<http://www.w3.org/2001/XMLSchema#integer>"
//! );
//! ```

use crate::literal::encode_literal;
use crate::{LiteralTag, ObjectValue};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use num_bigint::BigInt;

/// XSD datatype IRIs.
pub mod xsd {
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
}

fn typed(lexical: String, datatype: &str) -> String {
    encode_literal(
        &ObjectValue::Scalar(lexical),
        &LiteralTag::Datatype(datatype.to_string()),
    )
}

#[must_use]
pub fn boolean(value: bool) -> String {
    typed(value.to_string(), xsd::BOOLEAN)
}

#[must_use]
pub fn integer(value: i64) -> String {
    typed(value.to_string(), xsd::INTEGER)
}

/// Integers of arbitrary size.
///
/// ```rust
/// use num_bigint::BigInt;
/// use turtle_encode::typed;
///
/// let big: BigInt = "123456789012345678901234567890".parse().unwrap();
/// assert!(typed::big_integer(&big).starts_with("\"123456789012345678901234567890\"^^"));
/// ```
#[must_use]
pub fn big_integer(value: &BigInt) -> String {
    typed(value.to_string(), xsd::INTEGER)
}

/// Doubles use the XSD spellings `INF`, `-INF` and `NaN` for non-finite values.
#[must_use]
pub fn double(value: f64) -> String {
    let lexical = if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "INF".to_string()
    } else if value == f64::NEG_INFINITY {
        "-INF".to_string()
    } else {
        format!("{:?}", value)
    };
    typed(lexical, xsd::DOUBLE)
}

/// UTC timestamps, written with a `Z` suffix and only as many fractional digits as needed.
#[must_use]
pub fn date_time(value: &DateTime<Utc>) -> String {
    typed(
        value.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        xsd::DATE_TIME,
    )
}

#[must_use]
pub fn date(value: NaiveDate) -> String {
    typed(value.format("%Y-%m-%d").to_string(), xsd::DATE)
}
