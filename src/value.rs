//! Object values: the shapes a statement object can take.
//!
//! [`ObjectValue`] is decided once, when caller data enters the crate (through
//! `From` conversions, serde, or the [`turtle_object!`](crate::turtle_object)
//! macro). The encoders then match on it instead of inspecting types.
//!
//! ## Shapes
//!
//! | Variant | Meaning |
//! |---------|---------|
//! | `Omitted` | absent or undefined; contributes nothing |
//! | `Scalar` | a single string |
//! | `Sequence` | a comma-joined list; non-scalar elements count as absent |
//! | `LanguageMap` | one literal per language tag |
//!
//! ## Examples
//!
//! ```rust
//! use turtle_encode::ObjectValue;
//!
//! assert!(ObjectValue::from(None::<&str>).is_omitted());
//! assert_eq!(ObjectValue::from("x").as_str(), Some("x"));
//! assert!(ObjectValue::from(vec!["a", "b"]).is_sequence());
//! assert_eq!(ObjectValue::from(42).as_str(), Some("42"));
//! ```

use crate::LanguageMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Any object a statement predicate can point at.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ObjectValue {
    #[default]
    Omitted,
    Scalar(String),
    Sequence(Vec<ObjectValue>),
    LanguageMap(LanguageMap),
}

impl ObjectValue {
    #[inline]
    #[must_use]
    pub const fn is_omitted(&self) -> bool {
        matches!(self, ObjectValue::Omitted)
    }

    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, ObjectValue::Scalar(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, ObjectValue::Sequence(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_language_map(&self) -> bool {
        matches!(self, ObjectValue::LanguageMap(_))
    }

    /// Returns `true` if this value renders as nothing: `Omitted` or an empty scalar.
    ///
    /// Sequences and language maps are not inspected; they may still render
    /// empty if all of their elements do.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        match self {
            ObjectValue::Omitted => true,
            ObjectValue::Scalar(s) => s.is_empty(),
            _ => false,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ObjectValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_sequence(&self) -> Option<&[ObjectValue]> {
        match self {
            ObjectValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_language_map(&self) -> Option<&LanguageMap> {
        match self {
            ObjectValue::LanguageMap(map) => Some(map),
            _ => None,
        }
    }
}

impl From<&str> for ObjectValue {
    fn from(value: &str) -> Self {
        ObjectValue::Scalar(value.to_string())
    }
}

impl From<String> for ObjectValue {
    fn from(value: String) -> Self {
        ObjectValue::Scalar(value)
    }
}

impl From<&String> for ObjectValue {
    fn from(value: &String) -> Self {
        ObjectValue::Scalar(value.clone())
    }
}

impl From<char> for ObjectValue {
    fn from(value: char) -> Self {
        ObjectValue::Scalar(value.to_string())
    }
}

macro_rules! scalar_from_display {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ObjectValue {
                fn from(value: $ty) -> Self {
                    ObjectValue::Scalar(value.to_string())
                }
            }
        )*
    };
}

scalar_from_display!(bool, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64);

impl<T: Into<ObjectValue>> From<Option<T>> for ObjectValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ObjectValue::Omitted, Into::into)
    }
}

impl<T: Into<ObjectValue>> From<Vec<T>> for ObjectValue {
    fn from(values: Vec<T>) -> Self {
        ObjectValue::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ObjectValue>, const N: usize> From<[T; N]> for ObjectValue {
    fn from(values: [T; N]) -> Self {
        ObjectValue::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl From<LanguageMap> for ObjectValue {
    fn from(map: LanguageMap) -> Self {
        ObjectValue::LanguageMap(map)
    }
}

impl<T: Into<ObjectValue>> FromIterator<T> for ObjectValue {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ObjectValue::Sequence(iter.into_iter().map(Into::into).collect())
    }
}

impl Serialize for ObjectValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ObjectValue::Omitted => serializer.serialize_none(),
            ObjectValue::Scalar(s) => serializer.serialize_str(s),
            ObjectValue::Sequence(items) => items.serialize(serializer),
            ObjectValue::LanguageMap(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ObjectValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ObjectValueVisitor;

        impl<'de> Visitor<'de> for ObjectValueVisitor {
            type Value = ObjectValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("null, a scalar, a sequence, or a language map")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(ObjectValue::from(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(ObjectValue::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(ObjectValue::from(value))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(ObjectValue::from(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(ObjectValue::from(value))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(ObjectValue::Scalar(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(ObjectValue::Omitted)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(ObjectValue::Omitted)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(elem) = seq.next_element()? {
                    items.push(elem);
                }
                Ok(ObjectValue::Sequence(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut langs = LanguageMap::new();
                while let Some((key, value)) = map.next_entry::<String, ObjectValue>()? {
                    langs.insert(key, value);
                }
                Ok(ObjectValue::LanguageMap(langs))
            }
        }

        deserializer.deserialize_any(ObjectValueVisitor)
    }
}
