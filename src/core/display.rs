use crate::core::OutputSink;
use crate::utils::error::{BookError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStrategy {
    Console,
    Reverse,
}

impl DisplayStrategy {
    /// Loose selection: `console` or anything else.
    pub fn select(variant: &str) -> Self {
        if variant == "console" {
            DisplayStrategy::Console
        } else {
            DisplayStrategy::Reverse
        }
    }

    pub fn display(self, content: &str, sink: &mut impl OutputSink) -> Result<()> {
        match self {
            DisplayStrategy::Console => sink.write_line(content),
            DisplayStrategy::Reverse => sink.write_line(&reverse_chars(content)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DisplayStrategy::Console => "console",
            DisplayStrategy::Reverse => "reverse",
        }
    }
}

impl fmt::Display for DisplayStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayStrategy {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "console" => Ok(DisplayStrategy::Console),
            "reverse" => Ok(DisplayStrategy::Reverse),
            other => Err(BookError::UnknownVariant {
                operation: "display".to_string(),
                variant: other.to_string(),
            }),
        }
    }
}

/// Reverses by `char`, so combining marks and multi-codepoint graphemes come
/// apart.
pub fn reverse_chars(text: &str) -> String {
    text.chars().rev().collect()
}
