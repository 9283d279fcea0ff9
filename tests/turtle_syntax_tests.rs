use turtle_encode::{
    literal, literal_list, predicates, statement, turtle_object, uri, Error, ObjectValue,
    PredicateMap, TagSpec,
};

#[test]
fn test_language_tagged_literal() {
    assert_eq!(literal("x", TagSpec::lang("en")).unwrap(), "\"x\"@en");
}

#[test]
fn test_datatyped_literal() {
    assert_eq!(
        literal("1987", TagSpec::datatype("xs:gYear")).unwrap(),
        "\"1987\"^^<xs:gYear>"
    );
}

#[test]
fn test_conflicting_tag() {
    let result = literal("1987", TagSpec::lang("en").with_datatype("xs:gYear"));
    assert_eq!(result, Err(Error::conflicting_tag("en", "xs:gYear")));
}

#[test]
fn test_absent_literals() {
    for tag in [
        TagSpec::Untagged,
        TagSpec::lang("en"),
        TagSpec::datatype("xs:string"),
        TagSpec::from("de"),
    ] {
        assert_eq!(literal(None::<&str>, tag.clone()).unwrap(), "");
        assert_eq!(literal("", tag).unwrap(), "");
    }
}

#[test]
fn test_uri_forms() {
    assert_eq!(uri(None), "");
    assert_eq!(uri(Some("")), "<>");
    assert_eq!(uri(Some("http://x")), "<http://x>");
}

#[test]
fn test_statement_without_pairs_is_empty() {
    assert_eq!(statement(Some("<urn:1>"), &PredicateMap::new()), "");
    assert_eq!(statement(Some("<urn:1>"), &predicates!({ "p": null })), "");
    assert_eq!(statement(None, &predicates!({ "p": "", "q": [] })), "");
}

#[test]
fn test_statement_with_subject() {
    let map = predicates!({
        "a": "<urn:Doc>",
        "dc:title": { "en": "Title" }
    });
    assert_eq!(
        statement(Some("<urn:1>"), &map),
        "<urn:1> a <urn:Doc> ;\n    dc:title \"Title\"@en .\n"
    );
}

#[test]
fn test_statement_with_blank_subject() {
    let map = predicates!({ "dc:creator": ["Alice", "Bob"] });
    assert_eq!(statement(None, &map), "[ dc:creator Alice, Bob ] .\n");
}

#[test]
fn test_literal_list_mixes_tagged_and_untagged() {
    assert_eq!(
        literal_list(turtle_object!({ "en": "A", "": "B" })),
        "\"A\"@en, \"B\""
    );
}

#[test]
fn test_three_predicates_indentation() {
    let map = predicates!({
        "a": "foaf:Person",
        "foaf:name": (literal("Alice", TagSpec::Untagged).unwrap()),
        "foaf:knows": ["<urn:bob>", "<urn:carol>"]
    });
    let expected = "<urn:alice> a foaf:Person ;\n    foaf:name \"Alice\" ;\n    foaf:knows <urn:bob>, <urn:carol> .\n";
    assert_eq!(statement(Some("<urn:alice>"), &map), expected);
}

#[test]
fn test_output_ends_with_single_newline() {
    let out = statement(Some("<s>"), &predicates!({ "p": "<o>" }));
    assert!(out.ends_with(" .\n"));
    assert!(!out.ends_with("\n\n"));
}

#[test]
fn test_language_map_with_list_values() {
    let map = predicates!({
        "skos:altLabel": { "en": ["car", "automobile"], "de": "Auto" }
    });
    assert_eq!(
        statement(Some("<urn:car>"), &map),
        "<urn:car> skos:altLabel \"car\"@en, \"automobile\"@en, \"Auto\"@de .\n"
    );
}

#[test]
fn test_language_map_with_only_empty_values_drops_predicate() {
    let map = predicates!({
        "rdfs:label": { "en": "", "de": null },
        "rdfs:comment": { "en": "kept" }
    });
    assert_eq!(
        statement(Some("<s>"), &map),
        "<s> rdfs:comment \"kept\"@en .\n"
    );
}

#[test]
fn test_nested_sequence_elements_are_absent() {
    let object = ObjectValue::Sequence(vec![
        ObjectValue::from("<urn:a>"),
        ObjectValue::Sequence(vec![ObjectValue::from("<urn:hidden>")]),
    ]);
    assert_eq!(
        statement(Some("<s>"), [("p", object)]),
        "<s> p <urn:a> .\n"
    );
}

#[test]
fn test_empty_subject_string_is_written_as_given() {
    let map = predicates!({ "p": "o" });
    assert_eq!(statement(Some(""), &map), " p o .\n");
    assert_eq!(statement(None, &map), "[ p o ] .\n");
}
