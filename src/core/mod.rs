pub mod command;
pub mod dispatcher;
pub mod display;
pub mod print;
pub mod serializer;

pub use crate::domain::model::{Book, Operation, ParseMode};
pub use crate::domain::ports::OutputSink;
pub use crate::utils::error::Result;
