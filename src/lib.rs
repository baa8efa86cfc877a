pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ScriptConfig;

pub use adapters::sink::{MemorySink, WriterSink};
pub use crate::core::{
    command::{parse_commands, Command},
    dispatcher::{run, Dispatcher},
    display::DisplayStrategy,
    print::PrintStrategy,
    serializer::Serializer,
};
pub use domain::model::{Book, Operation, ParseMode};
pub use domain::ports::OutputSink;
pub use utils::error::{BookError, Result};
