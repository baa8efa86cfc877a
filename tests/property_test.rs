use book_strategy::core::display::reverse_chars;
use book_strategy::{Book, Dispatcher, DisplayStrategy, MemorySink, Serializer};
use proptest::prelude::*;

/// Text of `book/<tag>` as read by an XML parser. An empty element reads
/// as empty text.
fn xml_text(xml: &str, tag: &str) -> Option<String> {
    let doc = roxmltree::Document::parse(xml).ok()?;
    let root = doc.root_element();
    if root.tag_name().name() != "book" {
        return None;
    }
    let node = root
        .children()
        .find(|n| n.is_element() && n.tag_name().name() == tag)?;
    Some(node.text().unwrap_or("").to_string())
}

#[test]
fn test_xml_line_endings_survive_parsing() {
    let book = Book::new("T", "line1\r\nline2\rend");
    let xml = Serializer::Xml.serialize(&book).unwrap();
    assert_eq!(xml_text(&xml, "title").as_deref(), Some("T"));
    assert_eq!(xml_text(&xml, "content").as_deref(), Some("line1\r\nline2\rend"));
}

#[test]
fn test_xml_empty_fields_parse_as_empty() {
    let xml = Serializer::Xml.serialize(&Book::new("", "")).unwrap();
    assert_eq!(xml_text(&xml, "title").as_deref(), Some(""));
    assert_eq!(xml_text(&xml, "content").as_deref(), Some(""));
}

proptest! {
    #[test]
    fn reverse_is_an_involution(content in any::<String>()) {
        prop_assert_eq!(reverse_chars(&reverse_chars(&content)), content);
    }

    #[test]
    fn reverse_display_writes_reversed_chars(content in "\\PC*") {
        let mut sink = MemorySink::new();
        DisplayStrategy::Reverse.display(&content, &mut sink).unwrap();

        let expected: String = content.chars().rev().collect();
        prop_assert_eq!(sink.into_lines(), vec![expected]);
    }

    #[test]
    fn json_round_trips(title in any::<String>(), content in any::<String>()) {
        let book = Book::new(title, content);
        let json = Serializer::Json.serialize(&book).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();
        prop_assert_eq!(object.len(), 2);
        prop_assert_eq!(object["title"].as_str(), Some(book.title.as_str()));
        prop_assert_eq!(object["content"].as_str(), Some(book.content.as_str()));
        prop_assert!(json.starts_with("{\"title\": "), "json does not start with title key: {}", json);
    }

    #[test]
    fn xml_round_trips(title in "[\\PC\r\n\t]*", content in "[\\PC\r\n\t]*") {
        let book = Book::new(title, content);
        let xml = Serializer::Xml.serialize(&book).unwrap();

        prop_assert_eq!(xml_text(&xml, "title"), Some(book.title.clone()));
        prop_assert_eq!(xml_text(&xml, "content"), Some(book.content.clone()));
    }

    #[test]
    fn serialize_ends_every_run(prefix in 0usize..4, suffix in 1usize..4) {
        let mut pairs = vec![("display", "console"); prefix];
        pairs.push(("serialize", "json"));
        pairs.extend(vec![("print", "reverse"); suffix]);

        let mut dispatcher = Dispatcher::new(MemorySink::new());
        let result = dispatcher
            .run_pairs(&Book::sample(), pairs, book_strategy::ParseMode::Strict)
            .unwrap();

        prop_assert!(result.is_some());
        prop_assert_eq!(dispatcher.sink().lines().len(), prefix);
    }
}
