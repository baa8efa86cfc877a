use crate::core::display::reverse_chars;
use crate::core::OutputSink;
use crate::utils::error::{BookError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintStrategy {
    Console,
    Reverse,
}

impl PrintStrategy {
    /// Loose selection: `console` or anything else.
    pub fn select(variant: &str) -> Self {
        if variant == "console" {
            PrintStrategy::Console
        } else {
            PrintStrategy::Reverse
        }
    }

    /// Writes the label line, then the content line.
    pub fn print(self, title: &str, content: &str, sink: &mut impl OutputSink) -> Result<()> {
        match self {
            PrintStrategy::Console => {
                sink.write_line(&format!("Printing the book: {}...", title))?;
                sink.write_line(content)
            }
            PrintStrategy::Reverse => {
                sink.write_line(&format!("Printing the book in reverse: {}...", title))?;
                sink.write_line(&reverse_chars(content))
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PrintStrategy::Console => "console",
            PrintStrategy::Reverse => "reverse",
        }
    }
}

impl fmt::Display for PrintStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrintStrategy {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "console" => Ok(PrintStrategy::Console),
            "reverse" => Ok(PrintStrategy::Reverse),
            other => Err(BookError::UnknownVariant {
                operation: "print".to_string(),
                variant: other.to_string(),
            }),
        }
    }
}
