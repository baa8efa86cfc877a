use crate::adapters::sink::WriterSink;
use crate::core::command::{parse_commands, Command};
use crate::core::{Book, OutputSink, ParseMode};
use crate::utils::error::Result;

/// Runs command sequences against a book, writing display and print output
/// to its sink.
pub struct Dispatcher<S: OutputSink> {
    sink: S,
}

impl<S: OutputSink> Dispatcher<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Executes `commands` in order.
    ///
    /// The first `Serialize` command ends the run: its output is returned and
    /// any commands after it are never executed. Without a `Serialize`
    /// command the result is `Ok(None)`.
    pub fn run(&mut self, book: &Book, commands: &[Command]) -> Result<Option<String>> {
        tracing::debug!("Dispatching {} command(s) for '{}'", commands.len(), book.title);

        for (index, command) in commands.iter().enumerate() {
            tracing::debug!(operation = %command.operation(), "[{}] {}", index, command);
            match *command {
                Command::Display(strategy) => strategy.display(&book.content, &mut self.sink)?,
                Command::Print(strategy) => {
                    strategy.print(&book.title, &book.content, &mut self.sink)?
                }
                Command::Serialize(serializer) => {
                    let skipped = commands.len() - index - 1;
                    if skipped > 0 {
                        tracing::debug!("Serialize reached, {} command(s) not run", skipped);
                    }
                    return serializer.serialize(book).map(Some);
                }
            }
        }

        Ok(None)
    }

    /// Parses raw `(operation, variant)` pairs, then runs them.
    pub fn run_pairs<I, O, V>(&mut self, book: &Book, pairs: I, mode: ParseMode) -> Result<Option<String>>
    where
        I: IntoIterator<Item = (O, V)>,
        O: AsRef<str>,
        V: AsRef<str>,
    {
        let commands = parse_commands(pairs, mode)?;
        self.run(book, &commands)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Strict run against standard output.
pub fn run<I, O, V>(book: &Book, pairs: I) -> Result<Option<String>>
where
    I: IntoIterator<Item = (O, V)>,
    O: AsRef<str>,
    V: AsRef<str>,
{
    Dispatcher::new(WriterSink::stdout()).run_pairs(book, pairs, ParseMode::Strict)
}
