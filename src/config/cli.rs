use crate::domain::model::{Book, ParseMode};
use crate::utils::error::Result;
use crate::utils::validation::{split_command_token, Validate};
use clap::Parser;
use std::path::PathBuf;

/// Commands run when neither `--command` nor `--script` is given.
pub const DEMO_COMMANDS: [(&str, &str); 2] = [("display", "reverse"), ("serialize", "xml")];

#[derive(Debug, Clone, Parser)]
#[command(name = "book-strategy")]
#[command(about = "Display, print and serialize a book through interchangeable strategies")]
pub struct CliConfig {
    #[arg(long, default_value = "Sample Book")]
    pub title: String,

    #[arg(long, default_value = "This is some sample content.")]
    pub content: String,

    /// Command as OPERATION:VARIANT, e.g. display:reverse. Repeat to run several in order.
    #[arg(short = 'c', long = "command")]
    pub commands: Vec<String>,

    /// TOML script holding the book and its commands
    #[arg(short, long, conflicts_with_all = ["commands", "title", "content"])]
    pub script: Option<PathBuf>,

    /// Fall back to the alternate strategy on unknown variants and skip unknown operations
    #[arg(long)]
    pub lenient: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl CliConfig {
    pub fn book(&self) -> Book {
        Book::new(self.title.clone(), self.content.clone())
    }

    pub fn parse_mode(&self) -> ParseMode {
        if self.lenient {
            ParseMode::Lenient
        } else {
            ParseMode::Strict
        }
    }

    /// `--command` values split into pairs, or the demo sequence if none
    /// were given.
    pub fn command_pairs(&self) -> Result<Vec<(&str, &str)>> {
        if self.commands.is_empty() {
            return Ok(DEMO_COMMANDS.to_vec());
        }
        self.commands
            .iter()
            .map(|c| split_command_token(c))
            .collect()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.command_pairs().map(|_| ())
    }
}
