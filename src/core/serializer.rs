use crate::core::Book;
use crate::utils::error::{BookError, Result};
use serde::Serialize;
use serde_json::ser::Formatter;
use std::fmt;
use std::io;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Serializer {
    Json,
    Xml,
}

impl Serializer {
    /// Loose selection: `json` or anything else.
    pub fn select(variant: &str) -> Self {
        if variant == "json" {
            Serializer::Json
        } else {
            Serializer::Xml
        }
    }

    pub fn serialize(self, book: &Book) -> Result<String> {
        match self {
            Serializer::Json => to_json(book),
            Serializer::Xml => Ok(to_xml(book)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Serializer::Json => "json",
            Serializer::Xml => "xml",
        }
    }
}

impl fmt::Display for Serializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Serializer {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(Serializer::Json),
            "xml" => Ok(Serializer::Xml),
            other => Err(BookError::UnknownVariant {
                operation: "serialize".to_string(),
                variant: other.to_string(),
            }),
        }
    }
}

/// Single-line JSON with a space after `:` and `,`:
/// `{"title": "...", "content": "..."}`.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

fn to_json(book: &Book) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    book.serialize(&mut ser)?;
    // serde_json only ever writes UTF-8
    String::from_utf8(buf).map_err(|e| {
        BookError::SerializationError(<serde_json::Error as serde::ser::Error>::custom(e))
    })
}

fn to_xml(book: &Book) -> String {
    let mut out = String::from("<book>");
    push_element(&mut out, "title", &book.title);
    push_element(&mut out, "content", &book.content);
    out.push_str("</book>");
    out
}

// Empty text collapses to `<name />`. `\r` goes out as a character
// reference, a raw one is normalized to `\n` by XML parsers.
fn push_element(out: &mut String, name: &str, text: &str) {
    if text.is_empty() {
        out.push_str(&format!("<{} />", name));
    } else {
        let escaped = html_escape::encode_text(text).replace('\r', "&#13;");
        out.push_str(&format!("<{name}>{}</{name}>", escaped, name = name));
    }
}
