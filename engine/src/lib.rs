//! Parse-and-resolve pipeline for registered commands.
//!
//! Raw input flows through three steps:
//!
//! 1. [`tokenizer`] splits an argument vector or console line into a command
//!    name and raw parameter values keyed by name or position.
//! 2. [`resolver`] matches the raw values against the command's parameter
//!    schemas, validates them, and binds the command's action, or
//!    synthesizes help text via [`help`].
//! 3. [`Dispatcher`] invokes the bound action, or hands help text and
//!    errors to caller-supplied sinks.
//!
//! # Example
//!
//! ```
//! use command_dispatch_core::{CommandSchema, DataType, ParameterSchema};
//! use command_dispatch_engine::{DispatchOutcome, Dispatcher};
//!
//! let mut dispatcher = Dispatcher::new()
//!     .with_description("Arithmetic helpers")
//!     .on_help(|text| print!("{text}"))
//!     .on_error(|err| eprintln!("error: {err}"));
//!
//! dispatcher
//!     .register(
//!         CommandSchema::new("add", |params| {
//!             let left: i64 = params.parse("left").and_then(Result::ok).unwrap_or(0);
//!             let right: i64 = params.parse("right").and_then(Result::ok).unwrap_or(0);
//!             println!("{}", left + right);
//!         })
//!         .with_parameter(
//!             ParameterSchema::new("left").at_position(1).with_type(DataType::Integer),
//!         )
//!         .with_parameter(
//!             ParameterSchema::new("right").at_position(2).with_type(DataType::Integer),
//!         ),
//!     )
//!     .unwrap();
//!
//! let outcome = dispatcher.dispatch_args(["add", "2", "3"]).unwrap();
//! assert_eq!(outcome, DispatchOutcome::Invoked { command: "add".into() });
//!
//! let outcome = dispatcher.dispatch_args(["add", "two", "3"]).unwrap();
//! assert!(matches!(outcome, DispatchOutcome::Failed(_)));
//! ```

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod help;
pub mod output;
pub mod resolver;
pub mod tokenizer;

pub use config::{ConfigError, DispatchConfig};
pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use error::{ConfigurationError, DispatchError, ParameterKey, ParseError, ResolutionError};
pub use output::{CatalogFormat, format_catalog};
pub use resolver::{Invocation, ResolvedCommand, resolve};
pub use tokenizer::{RawParse, tokenize, tokenize_line};
