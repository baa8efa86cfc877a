use anyhow::Result;
use book_strategy::utils::validation::Validate;
use book_strategy::{BookError, Dispatcher, MemorySink, ParseMode, ScriptConfig};
use tempfile::TempDir;

#[test]
fn test_script_file_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let script_path = temp_dir.path().join("book.toml");
    std::fs::write(
        &script_path,
        r#"
[book]
title = "Tom & Jerry"
content = "cat <mouse>"

[[commands]]
operation = "print"
variant = "reverse"

[[commands]]
operation = "serialize"
variant = "xml"

[[commands]]
operation = "display"
variant = "console"
"#,
    )?;

    let script = ScriptConfig::from_file(&script_path)?;
    script.validate()?;
    assert_eq!(script.parse_mode(), ParseMode::Strict);

    let mut dispatcher = Dispatcher::new(MemorySink::new());
    let result = dispatcher.run_pairs(&script.book, script.command_pairs(), script.parse_mode())?;

    assert_eq!(
        result.as_deref(),
        Some("<book><title>Tom &amp; Jerry</title><content>cat &lt;mouse&gt;</content></book>")
    );
    assert_eq!(
        dispatcher.into_sink().into_lines(),
        vec!["Printing the book in reverse: Tom & Jerry...", ">esuom< tac"]
    );
    Ok(())
}

#[test]
fn test_lenient_script_skips_unknown_operations() -> Result<()> {
    let script = ScriptConfig::from_toml_str(
        r#"
[book]
title = "T"
content = "xy"

[options]
mode = "lenient"

[[commands]]
operation = "shout"
variant = "loud"

[[commands]]
operation = "display"
variant = "mirror"
"#,
    )?;

    let mut dispatcher = Dispatcher::new(MemorySink::new());
    let result = dispatcher.run_pairs(&script.book, script.command_pairs(), script.parse_mode())?;

    assert!(result.is_none());
    assert_eq!(dispatcher.into_sink().into_lines(), vec!["yx"]);
    Ok(())
}

#[test]
fn test_missing_script_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = ScriptConfig::from_file(temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, BookError::IoError(_)));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_script_without_book_is_rejected() {
    let err = ScriptConfig::from_toml_str(
        r#"
[[commands]]
operation = "display"
variant = "console"
"#,
    )
    .unwrap_err();
    assert!(matches!(err, BookError::ConfigValidationError { .. }));
}

#[test]
fn test_script_without_commands_fails_validation() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let script_path = temp_dir.path().join("empty.toml");
    std::fs::write(&script_path, "[book]\ntitle = \"T\"\ncontent = \"c\"\n")?;

    let script = ScriptConfig::from_file(&script_path)?;
    let err = script.validate().unwrap_err();
    assert!(matches!(err, BookError::MissingConfigError { ref field } if field == "commands"));
    assert_eq!(err.exit_code(), 1);
    Ok(())
}
