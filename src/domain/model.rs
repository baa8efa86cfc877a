use crate::utils::error::BookError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The single entity every strategy works on. Field order is the
/// serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub content: String,
}

impl Book {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// The demo book the binary falls back to.
    pub fn sample() -> Self {
        Self::new("Sample Book", "This is some sample content.")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Display,
    Print,
    Serialize,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Display => "display",
            Operation::Print => "print",
            Operation::Serialize => "serialize",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "display" => Ok(Operation::Display),
            "print" => Ok(Operation::Print),
            "serialize" => Ok(Operation::Serialize),
            other => Err(BookError::UnknownOperation {
                operation: other.to_string(),
            }),
        }
    }
}

/// How raw `(operation, variant)` tokens become commands.
///
/// `Strict` rejects anything outside the known token set. `Lenient` keeps the
/// loose behaviour: a variant that is not the primary one selects the
/// alternate strategy, and unknown operations are dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    #[default]
    Strict,
    Lenient,
}
