//! Error types for parsing, resolution and dispatcher setup.
//!
//! Parse and resolution errors come from user input and are handed to the
//! error sink as a [`DispatchError`]. A [`ConfigurationError`] means the
//! dispatcher itself was set up incompletely and is returned to the caller.

use std::fmt;

use thiserror::Error;

/// Tokenizer failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `-` token had nothing usable after its leading dashes.
    #[error("unable to read parameter name from '{0}'")]
    MalformedParameterName(String),
    /// No command name was supplied.
    #[error("failed to read command: input is empty")]
    EmptyInput,
}

/// How an unmatched raw parameter was referenced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterKey {
    /// Unnamed value at a 1-based position.
    Position(usize),
    /// Value introduced by `-name`.
    Name(String),
}

impl ParameterKey {
    /// Classifies a raw parameter key: numeric keys are positions.
    pub fn from_raw(key: &str) -> Self {
        match key.parse::<usize>() {
            Ok(position) => ParameterKey::Position(position),
            Err(_) => ParameterKey::Name(key.to_string()),
        }
    }
}

impl fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterKey::Position(position) => write!(f, "at position {position}"),
            ParameterKey::Name(name) => write!(f, "'{name}'"),
        }
    }
}

/// Failures matching a parsed invocation against the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error("command '{0}' not found")]
    CommandNotFound(String),
    #[error("command '{command}' has no parameter defined {key}")]
    UnknownParameter { command: String, key: ParameterKey },
    /// The parameter's validator rejected the value; `message` is the
    /// parameter's configured or default error message.
    #[error("{message}")]
    ValidationFailed { parameter: String, message: String },
}

/// Any input-driven failure, as delivered to the error sink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
}

/// Dispatcher setup defects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("a help sink has not been configured")]
    HelpSinkNotConfigured,
    #[error("an error sink has not been configured")]
    ErrorSinkNotConfigured,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_parameter_message_by_key_kind() {
        let positional = ResolutionError::UnknownParameter {
            command: "greet".to_string(),
            key: ParameterKey::from_raw("2"),
        };
        assert_eq!(
            positional.to_string(),
            "command 'greet' has no parameter defined at position 2"
        );

        let named = ResolutionError::UnknownParameter {
            command: "greet".to_string(),
            key: ParameterKey::from_raw("bogus"),
        };
        assert_eq!(named.to_string(), "command 'greet' has no parameter defined 'bogus'");
    }

    #[test]
    fn test_dispatch_error_is_transparent() {
        let err = DispatchError::from(ResolutionError::ValidationFailed {
            parameter: "count".to_string(),
            message: "count must be positive".to_string(),
        });
        assert_eq!(err.to_string(), "count must be positive");
    }
}
