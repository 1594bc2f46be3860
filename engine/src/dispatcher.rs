//! Dispatch surface: register commands, then tokenize, resolve and invoke.
//!
//! Help text and input errors are handed to caller-supplied sinks; the
//! dispatcher never prints anything itself. A missing sink is reported as a
//! [`ConfigurationError`] only when output actually needs to be delivered.

use command_dispatch_core::{CommandRegistry, CommandSchema, RegistrationError};
use tracing::debug;

use crate::config::DispatchConfig;
use crate::error::{ConfigurationError, DispatchError};
use crate::resolver::{Invocation, resolve};
use crate::tokenizer::{RawParse, tokenize, tokenize_line};

type HelpSink = Box<dyn Fn(&str)>;
type ErrorSink = Box<dyn Fn(&DispatchError)>;

/// What happened to a dispatched input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The named command's action ran.
    Invoked { command: String },
    /// Help text went to the help sink.
    HelpShown,
    /// The error went to the error sink.
    Failed(DispatchError),
}

/// Command dispatcher.
///
/// Register every command during startup, then call
/// [`dispatch_args`](Dispatcher::dispatch_args) or
/// [`dispatch_line`](Dispatcher::dispatch_line) for each input.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use command_dispatch_core::{CommandSchema, ParameterSchema};
/// use command_dispatch_engine::{DispatchOutcome, Dispatcher};
///
/// let errors = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&errors);
///
/// let mut dispatcher = Dispatcher::new()
///     .on_help(|text| println!("{text}"))
///     .on_error(move |err| sink.borrow_mut().push(err.to_string()));
/// dispatcher
///     .register(
///         CommandSchema::new("greet", |params| {
///             println!("Hello, {}!", params.get("name").unwrap_or("world"));
///         })
///         .with_parameter(ParameterSchema::new("name").at_position(1)),
///     )
///     .unwrap();
///
/// let outcome = dispatcher.dispatch_line("greet Alice").unwrap();
/// assert_eq!(outcome, DispatchOutcome::Invoked { command: "greet".into() });
///
/// dispatcher.dispatch_line("greet -bogus X").unwrap();
/// assert_eq!(errors.borrow()[0], "command 'greet' has no parameter defined 'bogus'");
/// ```
#[derive(Default)]
pub struct Dispatcher {
    registry: CommandRegistry,
    help_sink: Option<HelpSink>,
    error_sink: Option<ErrorSink>,
}

impl Dispatcher {
    /// Creates a dispatcher with an empty registry and no sinks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dispatcher whose registry uses the configured description.
    pub fn from_config(config: &DispatchConfig) -> Self {
        let mut dispatcher = Self::new();
        dispatcher.registry.set_description(config.description.clone());
        dispatcher
    }

    /// Sets the registry-wide help description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.registry.set_description(Some(desc.to_string()));
        self
    }

    /// Sets the function that receives help text.
    pub fn on_help<F>(mut self, sink: F) -> Self
    where
        F: Fn(&str) + 'static,
    {
        self.help_sink = Some(Box::new(sink));
        self
    }

    /// Sets the function that receives parse and resolution errors.
    pub fn on_error<F>(mut self, sink: F) -> Self
    where
        F: Fn(&DispatchError) + 'static,
    {
        self.error_sink = Some(Box::new(sink));
        self
    }

    /// Registers a command. See [`CommandRegistry::register`].
    pub fn register(&mut self, schema: CommandSchema) -> Result<(), RegistrationError> {
        self.registry.register(schema)
    }

    /// Returns the registered commands.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Dispatches an argument vector whose first element is the command.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] only when help or an error has to be
    /// delivered and the matching sink was never set. Input errors go to the
    /// error sink and are reported as [`DispatchOutcome::Failed`].
    pub fn dispatch_args<I, S>(&self, args: I) -> Result<DispatchOutcome, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.dispatch(tokenize(args))
    }

    /// Dispatches a console line split on spaces.
    pub fn dispatch_line(&self, line: &str) -> Result<DispatchOutcome, ConfigurationError> {
        self.dispatch(tokenize_line(line))
    }

    fn dispatch(&self, raw: RawParse) -> Result<DispatchOutcome, ConfigurationError> {
        match resolve(raw, &self.registry) {
            Ok(resolved) => match resolved.invocation {
                Invocation::Action(action) => {
                    debug!(command = %resolved.command_name, "Invoking command");
                    action(&resolved.parameters);
                    Ok(DispatchOutcome::Invoked {
                        command: resolved.command_name,
                    })
                }
                Invocation::Help(text) => {
                    let sink = self
                        .help_sink
                        .as_ref()
                        .ok_or(ConfigurationError::HelpSinkNotConfigured)?;
                    sink(&text);
                    Ok(DispatchOutcome::HelpShown)
                }
            },
            Err(error) => {
                debug!(%error, "Dispatch failed");
                let sink = self
                    .error_sink
                    .as_ref()
                    .ok_or(ConfigurationError::ErrorSinkNotConfigured)?;
                sink(&error);
                Ok(DispatchOutcome::Failed(error))
            }
        }
    }
}
