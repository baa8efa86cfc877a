use crate::domain::model::{Book, ParseMode};
use crate::utils::error::{BookError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

/// A book plus the commands to run on it, loaded from TOML:
///
/// ```toml
/// [book]
/// title = "Sample Book"
/// content = "This is some sample content."
///
/// [options]
/// mode = "lenient"
///
/// [[commands]]
/// operation = "display"
/// variant = "reverse"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptConfig {
    pub book: Book,
    pub options: Option<ScriptOptions>,
    #[serde(default)]
    pub commands: Vec<CommandEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScriptOptions {
    pub mode: Option<ParseMode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommandEntry {
    pub operation: String,
    pub variant: String,
}

impl ScriptConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BookError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BookError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BookError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn parse_mode(&self) -> ParseMode {
        self.options
            .as_ref()
            .and_then(|o| o.mode)
            .unwrap_or_default()
    }

    pub fn command_pairs(&self) -> Vec<(&str, &str)> {
        self.commands
            .iter()
            .map(|c| (c.operation.as_str(), c.variant.as_str()))
            .collect()
    }
}

impl Validate for ScriptConfig {
    fn validate(&self) -> Result<()> {
        if self.commands.is_empty() {
            return Err(BookError::MissingConfigError {
                field: "commands".to_string(),
            });
        }
        for (i, entry) in self.commands.iter().enumerate() {
            validate_non_empty_string(&format!("commands[{}].operation", i), &entry.operation)?;
            validate_non_empty_string(&format!("commands[{}].variant", i), &entry.variant)?;
        }
        Ok(())
    }
}
