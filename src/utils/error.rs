use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("Unknown operation: {operation}")]
    UnknownOperation { operation: String },

    #[error("Unknown variant '{variant}' for operation '{operation}'")]
    UnknownVariant { operation: String, variant: String },

    #[error("Invalid command syntax: '{input}' (expected OPERATION:VARIANT)")]
    InvalidCommandSyntax { input: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl BookError {
    /// Short message suitable for printing to the terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            BookError::UnknownOperation { operation } => {
                format!("'{}' is not a known operation", operation)
            }
            BookError::UnknownVariant { operation, variant } => {
                format!("'{}' is not a known variant of '{}'", variant, operation)
            }
            BookError::InvalidCommandSyntax { input } => {
                format!("Could not read command '{}'", input)
            }
            BookError::IoError(_) => "Failed to write output".to_string(),
            BookError::SerializationError(_) => "Failed to serialize the book".to_string(),
            BookError::ConfigValidationError { field, .. }
            | BookError::InvalidConfigValueError { field, .. } => {
                format!("Configuration problem in '{}': {}", field, self)
            }
            BookError::MissingConfigError { field } => {
                format!("Configuration is missing '{}'", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BookError::UnknownOperation { .. } => {
                "Use one of: display, print, serialize (or pass --lenient to skip unknown operations)"
            }
            BookError::UnknownVariant { .. } => {
                "Use console/reverse for display and print, json/xml for serialize (or pass --lenient)"
            }
            BookError::InvalidCommandSyntax { .. } => "Write commands as OPERATION:VARIANT, e.g. display:reverse",
            BookError::IoError(_) => "Check that standard output is writable",
            BookError::SerializationError(_) => "Check the book fields for invalid data",
            BookError::ConfigValidationError { .. }
            | BookError::InvalidConfigValueError { .. } => "Fix the script file or command line flags and retry",
            BookError::MissingConfigError { .. } => {
                "Add at least one [[commands]] entry with an operation and a variant"
            }
        }
    }

    /// Process exit code for the binary.
    pub fn exit_code(&self) -> i32 {
        match self {
            BookError::IoError(_) | BookError::SerializationError(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, BookError>;
