use chrono::{TimeZone, Utc};
use std::collections::BTreeMap;
use turtle_encode::{
    literal, literal_list, statement, typed, uri, LanguageMap, LiteralTag, ObjectValue,
    PredicateMap, Statement, TagSpec,
};

#[test]
fn test_describe_a_book() {
    let title: LanguageMap = [("en", "The Name of the Rose"), ("it", "Il nome della rosa")]
        .into_iter()
        .collect();

    let book = Statement::new(uri(Some("http://example.org/book/1")))
        .with("a", uri(Some("http://schema.org/Book")))
        .with("dc:title", title)
        .with(
            "dc:date",
            literal("1980", TagSpec::datatype("http://www.w3.org/2001/XMLSchema#gYear")).unwrap(),
        )
        .with("dc:creator", vec![uri(Some("urn:eco"))])
        .with("dc:publisher", None::<String>);

    let ttl = book.to_string();
    println!("Book:\n{}", ttl);

    assert_eq!(
        ttl,
        "<http://example.org/book/1> a <http://schema.org/Book> ;\n    \
         dc:title \"The Name of the Rose\"@en, \"Il nome della rosa\"@it ;\n    \
         dc:date \"1980\"^^<http://www.w3.org/2001/XMLSchema#gYear> ;\n    \
         dc:creator <urn:eco> .\n"
    );
}

#[test]
fn test_object_values_from_json() {
    let predicates: PredicateMap = serde_json::from_str(
        r#"{
            "a": "<urn:Doc>",
            "dc:title": {"en": "Title", "": "Untagged"},
            "dc:subject": ["<urn:x>", "<urn:y>"],
            "ex:count": 3,
            "ex:missing": null
        }"#,
    )
    .unwrap();

    assert_eq!(predicates.len(), 5);
    assert_eq!(predicates.get("ex:missing"), Some(&ObjectValue::Omitted));
    assert_eq!(predicates.get("ex:count"), Some(&ObjectValue::from("3")));

    assert_eq!(
        statement(Some("<urn:1>"), &predicates),
        "<urn:1> a <urn:Doc> ;\n    \
         dc:title \"Title\"@en, \"Untagged\" ;\n    \
         dc:subject <urn:x>, <urn:y> ;\n    \
         ex:count 3 .\n"
    );
}

#[test]
fn test_object_value_to_json() {
    let value = ObjectValue::Sequence(vec![ObjectValue::from("a"), ObjectValue::Omitted]);
    assert_eq!(serde_json::to_string(&value).unwrap(), r#"["a",null]"#);

    let map: LanguageMap = [("en", "Hi")].into_iter().collect();
    assert_eq!(
        serde_json::to_string(&ObjectValue::from(map)).unwrap(),
        r#"{"en":"Hi"}"#
    );
}

#[test]
fn test_invalid_json_shape_is_an_error() {
    let result: Result<PredicateMap, serde_json::Error> =
        serde_json::from_str(r#"["not", "a", "map"]"#);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("expected a map"));
}

#[test]
fn test_btree_map_gives_sorted_predicates() {
    let mut map = BTreeMap::new();
    map.insert("z:last", ObjectValue::from("<urn:z>"));
    map.insert("a:first", ObjectValue::from("<urn:a>"));

    assert_eq!(
        statement(Some("<s>"), &map),
        "<s> a:first <urn:a> ;\n    z:last <urn:z> .\n"
    );
}

#[test]
fn test_typed_literals_as_objects() {
    let when = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let event = Statement::blank()
        .with("ex:at", typed::date_time(&when))
        .with("ex:public", typed::boolean(false))
        .with("ex:seats", typed::integer(120));

    assert_eq!(
        event.render(),
        "[ ex:at \"2024-03-01T12:00:00Z\"^^<http://www.w3.org/2001/XMLSchema#dateTime> ;\n    \
         ex:public \"false\"^^<http://www.w3.org/2001/XMLSchema#boolean> ;\n    \
         ex:seats \"120\"^^<http://www.w3.org/2001/XMLSchema#integer> ] .\n"
    );
}

#[test]
fn test_literal_accepts_resolved_tags() {
    assert_eq!(
        literal("hola", LiteralTag::Language("es".to_string())).unwrap(),
        "\"hola\"@es"
    );
    assert_eq!(literal("plain", LiteralTag::None).unwrap(), "\"plain\"");
}

#[test]
fn test_literal_list_of_sequence() {
    assert_eq!(
        literal_list(vec!["tab\there", "quote\""]),
        "\"tab\\there\", \"quote\\\"\""
    );
}

#[test]
fn test_literal_multiline_value() {
    let out = literal("line one\nline two\r\n", TagSpec::Untagged).unwrap();
    assert_eq!(out, "\"line one\\nline two\\r\\n\"");
    assert!(!out.contains('\n'));
}
