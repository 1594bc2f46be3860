//! Resolution of tokenized invocations against the command registry.
//!
//! Each raw parameter key is matched against the command's parameters by
//! name, then alias, then ordinal, and the matched parameter's validator is
//! run on the raw value. Resolution stops at the first failure, visiting raw
//! parameters in input order.

use command_dispatch_core::{
    Action, CommandRegistry, CommandSchema, HELP_COMMAND, Lookup, ParameterMap,
};
use tracing::debug;

use crate::error::{DispatchError, ParameterKey, ResolutionError};
use crate::help::{render_command_help, render_registry_help};
use crate::tokenizer::RawParse;

/// What a resolved invocation does when invoked.
#[derive(Clone)]
pub enum Invocation<'r> {
    /// Run a registered command's action.
    Action(&'r Action),
    /// Deliver synthesized help text.
    Help(String),
}

impl std::fmt::Debug for Invocation<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Invocation::Action(_) => f.write_str("Action(..)"),
            Invocation::Help(text) => f.debug_tuple("Help").field(text).finish(),
        }
    }
}

/// A fully validated invocation, ready to run.
#[derive(Debug, Clone)]
pub struct ResolvedCommand<'r> {
    /// Canonical name of the matched command (`help` for registry help).
    pub command_name: String,
    pub invocation: Invocation<'r>,
    /// Validated values keyed by canonical parameter name. Empty for help.
    pub parameters: ParameterMap,
}

impl ResolvedCommand<'_> {
    pub fn is_help_request(&self) -> bool {
        matches!(self.invocation, Invocation::Help(_))
    }

    /// Returns the help text when this is a help request.
    pub fn help_text(&self) -> Option<&str> {
        match &self.invocation {
            Invocation::Help(text) => Some(text),
            Invocation::Action(_) => None,
        }
    }
}

/// Resolves a tokenized invocation against `registry`.
///
/// # Errors
///
/// A tokenizer error stored in `raw` is returned as
/// [`DispatchError::Parse`]. Otherwise returns
/// [`ResolutionError::CommandNotFound`] for an unknown command,
/// [`ResolutionError::UnknownParameter`] for a key no parameter matches, and
/// [`ResolutionError::ValidationFailed`] when a validator rejects a value.
///
/// # Examples
///
/// ```
/// use command_dispatch_core::*;
/// use command_dispatch_engine::{resolver::resolve, tokenizer::tokenize};
///
/// let mut registry = CommandRegistry::new();
/// registry
///     .register(
///         CommandSchema::new("greet", |_| {})
///             .with_alias("g")
///             .with_parameter(ParameterSchema::new("name").with_alias("n").at_position(1)),
///     )
///     .unwrap();
///
/// let resolved = resolve(tokenize(["g", "Alice"]), &registry).unwrap();
/// assert_eq!(resolved.command_name, "greet");
/// assert_eq!(resolved.parameters.get("name"), Some("Alice"));
///
/// let err = resolve(tokenize(["greet", "-bogus", "X"]), &registry).unwrap_err();
/// assert_eq!(err.to_string(), "command 'greet' has no parameter defined 'bogus'");
/// ```
pub fn resolve(
    raw: RawParse,
    registry: &CommandRegistry,
) -> Result<ResolvedCommand<'_>, DispatchError> {
    if let Some(error) = raw.error {
        return Err(error.into());
    }

    let schema = match registry.lookup(&raw.command_name) {
        Some(Lookup::Help) => {
            debug!("Synthesized registry help");
            return Ok(help_command(HELP_COMMAND, render_registry_help(registry)));
        }
        Some(Lookup::Command(schema)) => schema,
        None => return Err(ResolutionError::CommandNotFound(raw.command_name).into()),
    };

    if raw.is_help_request {
        debug!(command = %schema.name, "Synthesized command help");
        return Ok(help_command(&schema.name, render_command_help(schema)));
    }

    let parameters = resolve_parameters(schema, &raw.parameters)?;
    debug!(command = %schema.name, parameters = parameters.len(), "Resolved command");

    Ok(ResolvedCommand {
        command_name: schema.name.clone(),
        invocation: Invocation::Action(schema.action()),
        parameters,
    })
}

fn resolve_parameters(
    schema: &CommandSchema,
    raw: &ParameterMap,
) -> Result<ParameterMap, ResolutionError> {
    let mut resolved = ParameterMap::new();

    for (key, value) in raw.iter() {
        let Some(param) = schema.find_parameter(key) else {
            return Err(ResolutionError::UnknownParameter {
                command: schema.name.clone(),
                key: ParameterKey::from_raw(key),
            });
        };

        if !param.validate(value) {
            return Err(ResolutionError::ValidationFailed {
                parameter: param.name.clone(),
                message: param.error_message(),
            });
        }

        resolved.insert(param.name.clone(), value);
    }

    Ok(resolved)
}

fn help_command(command_name: &str, text: String) -> ResolvedCommand<'static> {
    ResolvedCommand {
        command_name: command_name.to_string(),
        invocation: Invocation::Help(text),
        parameters: ParameterMap::new(),
    }
}
