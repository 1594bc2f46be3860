//! Command registry with ordered storage and case-insensitive lookup.
//!
//! The registry is filled once at startup and only read afterwards.
//! Registration order is kept so help output lists commands in the order
//! they were declared.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::{
    CommandDescriptor, CommandSchema, RegistrationError, fold_case, validate_registration,
};

/// Reserved command name that always requests registry-wide help.
pub const HELP_COMMAND: &str = "help";

/// Result of looking a command token up in the registry.
#[derive(Debug, Clone, Copy)]
pub enum Lookup<'a> {
    /// The reserved `help` pseudo-command.
    Help,
    /// A registered command.
    Command(&'a CommandSchema),
}

/// Registered commands, indexed by canonical name.
///
/// # Examples
///
/// ```
/// use command_dispatch_core::*;
///
/// let mut registry = CommandRegistry::new();
/// registry
///     .register(CommandSchema::new("Greet", |_| {}).with_alias("g"))
///     .unwrap();
///
/// assert_eq!(registry.get("greet").unwrap().name, "greet");
/// assert_eq!(registry.get("G").unwrap().name, "greet");
/// assert!(matches!(registry.lookup("help"), Some(Lookup::Help)));
///
/// let duplicate = registry.register(CommandSchema::new("GREET", |_| {}));
/// assert_eq!(duplicate, Err(RegistrationError::DuplicateCommand("greet".into())));
/// ```
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<CommandSchema>,
    index: HashMap<String, usize>,
    description: Option<String>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the description shown at the top of registry-wide help.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Replaces the description shown at the top of registry-wide help.
    pub fn set_description(&mut self, desc: Option<String>) {
        self.description = desc;
    }

    /// Returns the registry-wide help description, if set.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Validates and stores a command schema.
    ///
    /// The command name is lower-cased before it is stored. On error the
    /// schema is discarded and the registry is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::DuplicateCommand`] if the name or an
    /// alias is already taken, [`RegistrationError::DuplicateParameter`] if
    /// two parameters share a name or alias, and
    /// [`RegistrationError::EmptyCommandName`] /
    /// [`RegistrationError::EmptyParameterName`] for blank names.
    pub fn register(&mut self, mut schema: CommandSchema) -> Result<(), RegistrationError> {
        if let Some(error) = validate_registration(&schema, &self.commands).into_iter().next() {
            warn!(command = %schema.name, %error, "Rejected command registration");
            return Err(error);
        }

        schema.name = fold_case(&schema.name);
        debug!(
            command = %schema.name,
            aliases = ?schema.aliases,
            parameters = schema.parameters.len(),
            "Registered command"
        );
        self.index.insert(schema.name.clone(), self.commands.len());
        self.commands.push(schema);
        Ok(())
    }

    /// Resolves a command token, honoring the reserved `help` name.
    ///
    /// `help` (any case) always yields [`Lookup::Help`], even when a command
    /// with that name was registered.
    pub fn lookup(&self, name_or_alias: &str) -> Option<Lookup<'_>> {
        if fold_case(name_or_alias) == HELP_COMMAND {
            return Some(Lookup::Help);
        }
        self.get(name_or_alias).map(Lookup::Command)
    }

    /// Finds a registered command by name, then by alias.
    pub fn get(&self, name_or_alias: &str) -> Option<&CommandSchema> {
        let key = fold_case(name_or_alias);
        self.index
            .get(&key)
            .map(|&i| &self.commands[i])
            .or_else(|| {
                self.commands
                    .iter()
                    .find(|c| c.aliases.iter().any(|a| fold_case(a) == key))
            })
    }

    /// Iterates over commands in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &CommandSchema> {
        self.commands.iter()
    }

    /// Serializable descriptions of every command, in registration order.
    pub fn descriptors(&self) -> Vec<CommandDescriptor> {
        self.commands.iter().map(CommandDescriptor::from).collect()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if no command has been registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
