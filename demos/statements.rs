//! Building a small Turtle document statement by statement.
//!
//! Run with: `cargo run --example statements`

use turtle_encode::{literal, predicates, statement, typed, uri, Statement, TagSpec};

fn main() -> turtle_encode::Result<()> {
    let mut doc = String::new();

    // Objects passed as plain strings must already be Turtle terms.
    let alice = uri(Some("http://example.org/people/alice"));
    let person = Statement::new(alice.as_str())
        .with("a", uri(Some("http://xmlns.com/foaf/0.1/Person")))
        .with("foaf:name", literal("Alice", TagSpec::Untagged)?)
        .with("foaf:title", literal("Dr.", "en")?)
        .with("foaf:age", typed::integer(42))
        .with("foaf:nick", None::<String>);
    doc.push_str(&person.render());

    // Language maps are escaped by the assembler itself.
    let book = predicates!({
        "a": "<http://schema.org/Book>",
        "dc:title": { "en": "Notes on \"Turtle\"", "fr": "Notes sur \"Turtle\"" },
        "dc:creator": [(alice.clone())]
    });
    doc.push_str(&statement(Some("<http://example.org/book/7>"), &book));

    // No subject: an anonymous blank node.
    let review = predicates!({
        "schema:itemReviewed": "<http://example.org/book/7>",
        "schema:reviewBody": { "": "Short,\nand to the point." }
    });
    doc.push_str(&statement(None, &review));

    print!("{}", doc);

    if let Err(err) = literal("oops", TagSpec::lang("en").with_datatype("xsd:string")) {
        eprintln!("{}", err);
    }

    Ok(())
}
