use crate::core::display::DisplayStrategy;
use crate::core::print::PrintStrategy;
use crate::core::serializer::Serializer;
use crate::domain::model::{Operation, ParseMode};
use crate::utils::error::Result;
use std::fmt;

/// One step of a dispatch run, with its strategy already chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Display(DisplayStrategy),
    Print(PrintStrategy),
    Serialize(Serializer),
}

impl Command {
    /// Builds a command from raw tokens.
    ///
    /// Returns `Ok(None)` only in lenient mode, for an operation that is not
    /// recognised.
    pub fn parse(operation: &str, variant: &str, mode: ParseMode) -> Result<Option<Command>> {
        let operation = match (operation.parse::<Operation>(), mode) {
            (Ok(op), _) => op,
            (Err(e), ParseMode::Strict) => return Err(e),
            (Err(_), ParseMode::Lenient) => {
                tracing::warn!("Skipping unknown operation '{}' ({})", operation, variant);
                return Ok(None);
            }
        };

        let command = match mode {
            ParseMode::Strict => match operation {
                Operation::Display => Command::Display(variant.parse()?),
                Operation::Print => Command::Print(variant.parse()?),
                Operation::Serialize => Command::Serialize(variant.parse()?),
            },
            ParseMode::Lenient => match operation {
                Operation::Display => Command::Display(DisplayStrategy::select(variant)),
                Operation::Print => Command::Print(PrintStrategy::select(variant)),
                Operation::Serialize => Command::Serialize(Serializer::select(variant)),
            },
        };

        Ok(Some(command))
    }

    pub fn operation(&self) -> Operation {
        match self {
            Command::Display(_) => Operation::Display,
            Command::Print(_) => Operation::Print,
            Command::Serialize(_) => Operation::Serialize,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Display(s) => write!(f, "display:{}", s),
            Command::Print(s) => write!(f, "print:{}", s),
            Command::Serialize(s) => write!(f, "serialize:{}", s),
        }
    }
}

/// Parses a whole sequence up front. In strict mode the first bad pair fails
/// the batch, so nothing is dispatched from a partially valid sequence.
pub fn parse_commands<I, O, V>(pairs: I, mode: ParseMode) -> Result<Vec<Command>>
where
    I: IntoIterator<Item = (O, V)>,
    O: AsRef<str>,
    V: AsRef<str>,
{
    let mut commands = Vec::new();
    for (operation, variant) in pairs {
        if let Some(command) = Command::parse(operation.as_ref(), variant.as_ref(), mode)? {
            commands.push(command);
        }
    }
    Ok(commands)
}
