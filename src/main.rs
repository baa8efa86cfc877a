use book_strategy::utils::{logger, validation::Validate};
use book_strategy::{BookError, CliConfig, Dispatcher, ParseMode, ScriptConfig, WriterSink};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting book-strategy");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match execute(&config) {
        Ok(Some(output)) => println!("{}", output),
        Ok(None) => tracing::info!("No serialize command, nothing returned"),
        Err(e) => {
            tracing::error!("Run failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

fn execute(config: &CliConfig) -> Result<Option<String>, BookError> {
    let mut dispatcher = Dispatcher::new(WriterSink::stdout());

    match &config.script {
        Some(path) => {
            tracing::info!("Loading script from: {}", path.display());
            let script = ScriptConfig::from_file(path)?;
            script.validate()?;

            // --lenient on the command line overrides the script's mode
            let mode = if config.lenient {
                ParseMode::Lenient
            } else {
                script.parse_mode()
            };
            dispatcher.run_pairs(&script.book, script.command_pairs(), mode)
        }
        None => {
            config.validate()?;
            let book = config.book();
            dispatcher.run_pairs(&book, config.command_pairs()?, config.parse_mode())
        }
    }
}
