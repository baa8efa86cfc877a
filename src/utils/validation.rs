use crate::utils::error::{BookError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BookError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Splits an `OPERATION:VARIANT` token. Both halves must be non-empty.
pub fn split_command_token(input: &str) -> Result<(&str, &str)> {
    match input.split_once(':') {
        Some((operation, variant))
            if !operation.trim().is_empty() && !variant.trim().is_empty() =>
        {
            Ok((operation.trim(), variant.trim()))
        }
        _ => Err(BookError::InvalidCommandSyntax {
            input: input.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("book.title", "Sample Book").is_ok());
        assert!(validate_non_empty_string("book.title", "").is_err());
        assert!(validate_non_empty_string("book.title", "   ").is_err());
    }

    #[test]
    fn test_split_command_token() {
        assert_eq!(
            split_command_token("display:reverse").unwrap(),
            ("display", "reverse")
        );
        assert_eq!(
            split_command_token(" serialize : json ").unwrap(),
            ("serialize", "json")
        );
        assert!(split_command_token("display").is_err());
        assert!(split_command_token(":json").is_err());
        assert!(split_command_token("print:").is_err());
    }
}
