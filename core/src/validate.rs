//! Registration-time validation.
//!
//! Validates naming invariants of command schemas before they enter a
//! [`CommandRegistry`](crate::CommandRegistry): names must be non-empty,
//! command names and aliases must be unique across the registry, and
//! parameter names and aliases must be unique within their command. All
//! comparisons ignore case.
//!
//! # Examples
//!
//! ```
//! use command_dispatch_core::*;
//!
//! let ok = CommandSchema::new("copy", |_| {})
//!     .with_parameter(ParameterSchema::new("source").with_alias("s"))
//!     .with_parameter(ParameterSchema::new("target").with_alias("t"));
//! assert!(validate_command(&ok).is_empty());
//!
//! // Invalid: alias `s` shadows the second parameter's name
//! let bad = CommandSchema::new("copy", |_| {})
//!     .with_parameter(ParameterSchema::new("source").with_alias("s"))
//!     .with_parameter(ParameterSchema::new("S"));
//! assert!(!validate_command(&bad).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{CommandSchema, fold_case};

/// Registration errors.
///
/// Each variant describes why a schema was rejected. The `Display` impl
/// provides a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Command name is empty or whitespace-only.
    #[error("command name cannot be empty")]
    EmptyCommandName,
    /// A parameter of the command has an empty or whitespace-only name.
    #[error("command '{0}' has a parameter with an empty name")]
    EmptyParameterName(String),
    /// The command name or an alias is already taken.
    #[error("duplicate command definition '{0}'")]
    DuplicateCommand(String),
    /// Two parameters of the same command share a name or alias.
    #[error("command definition '{command}' has duplicate parameter name '{parameter}'")]
    DuplicateParameter { command: String, parameter: String },
}

/// Validates a command schema in isolation.
///
/// Checks for empty names, a command alias repeating its own name, and
/// parameter names or aliases used more than once.
pub fn validate_command(schema: &CommandSchema) -> Vec<RegistrationError> {
    let mut errors = Vec::new();

    if schema.name.trim().is_empty() {
        errors.push(RegistrationError::EmptyCommandName);
        return errors;
    }

    let mut seen_names = HashSet::new();
    for name in schema.names() {
        if !seen_names.insert(fold_case(name)) {
            errors.push(RegistrationError::DuplicateCommand(fold_case(name)));
            return errors;
        }
    }

    let mut seen_params = HashSet::new();
    for param in &schema.parameters {
        if param.name.trim().is_empty() {
            errors.push(RegistrationError::EmptyParameterName(fold_case(&schema.name)));
            return errors;
        }
        for name in param.names() {
            if !seen_params.insert(fold_case(name)) {
                errors.push(RegistrationError::DuplicateParameter {
                    command: fold_case(&schema.name),
                    parameter: name.to_string(),
                });
                return errors;
            }
        }
    }

    errors
}

/// Validates a command schema against commands that are already registered.
///
/// Runs [`validate_command`] first, then rejects the schema if its name or
/// any alias collides with a name or alias of `existing`.
pub fn validate_registration<'a>(
    schema: &CommandSchema,
    existing: impl IntoIterator<Item = &'a CommandSchema>,
) -> Vec<RegistrationError> {
    let mut errors = validate_command(schema);
    if !errors.is_empty() {
        return errors;
    }

    let taken: HashSet<String> = existing
        .into_iter()
        .flat_map(|cmd| cmd.names().map(fold_case))
        .collect();

    if let Some(name) = schema.names().map(fold_case).find(|n| taken.contains(n)) {
        errors.push(RegistrationError::DuplicateCommand(name));
    }

    errors
}
