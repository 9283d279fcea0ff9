/// Builds an [`ObjectValue`](crate::ObjectValue) from JSON-like syntax.
///
/// `null` is `Omitted`, `[..]` is a `Sequence`, `{"lang": ..}` is a
/// `LanguageMap`, anything else goes through `ObjectValue::from`.
///
/// ```rust
/// use turtle_encode::{turtle_object, ObjectValue};
///
/// let title = turtle_object!({ "en": "Title", "de": ["Titel", "Überschrift"] });
/// assert!(title.is_language_map());
/// assert_eq!(turtle_object!(null), ObjectValue::Omitted);
/// ```
#[macro_export]
macro_rules! turtle_object {
    (null) => {
        $crate::ObjectValue::Omitted
    };

    ([]) => {
        $crate::ObjectValue::Sequence(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::ObjectValue::Sequence(vec![$($crate::turtle_object!($elem)),*])
    };

    ({}) => {
        $crate::ObjectValue::LanguageMap($crate::LanguageMap::new())
    };

    ({ $($lang:literal : $value:tt),* $(,)? }) => {{
        let mut langs = $crate::LanguageMap::new();
        $(
            langs.insert($lang, $crate::turtle_object!($value));
        )*
        $crate::ObjectValue::LanguageMap(langs)
    }};

    ($other:expr) => {
        $crate::ObjectValue::from($other)
    };
}

/// Builds a [`PredicateMap`](crate::PredicateMap); values use [`turtle_object!`] syntax.
///
/// ```rust
/// use turtle_encode::{predicates, statement};
///
/// let map = predicates!({
///     "a": "<urn:Doc>",
///     "dc:title": { "en": "Title" },
///     "dc:creator": null
/// });
///
/// assert_eq!(
///     statement(Some("<urn:1>"), &map),
///     "<urn:1> a <urn:Doc> ;\n    dc:title \"Title\"@en .\n"
/// );
/// ```
#[macro_export]
macro_rules! predicates {
    ({}) => {
        $crate::PredicateMap::new()
    };

    ({ $($predicate:literal : $object:tt),* $(,)? }) => {{
        let mut map = $crate::PredicateMap::new();
        $(
            map.insert($predicate, $crate::turtle_object!($object));
        )*
        map
    }};
}
