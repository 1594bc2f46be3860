//! Core schema types and the command registry.
//!
//! This crate defines the registration-time model of a command dispatcher:
//!
//! - [`CommandSchema`] — a named, aliasable command bound to its parameters
//!   and the [`Action`] it runs.
//! - [`ParameterSchema`] — one expected parameter with aliases, an optional
//!   position, a [`DataType`] and a validator.
//! - [`CommandRegistry`] — registered commands, looked up by name or alias.
//! - [`ParameterMap`] — ordered parameter values handed to actions.
//!
//! Validation ([`validate_command`], [`validate_registration`]) rejects blank
//! names and duplicate command or parameter names before a schema is stored.
//!
//! # Example
//!
//! ```
//! use command_dispatch_core::*;
//!
//! let mut registry = CommandRegistry::new().with_description("Demo tool");
//! registry
//!     .register(
//!         CommandSchema::new("resize", |params| {
//!             let width: i64 = params.parse("width").and_then(Result::ok).unwrap_or(0);
//!             println!("resizing to {width}");
//!         })
//!         .with_alias("rs")
//!         .with_parameter(
//!             ParameterSchema::new("width")
//!                 .with_alias("w")
//!                 .at_position(1)
//!                 .with_type(DataType::Integer),
//!         ),
//!     )
//!     .unwrap();
//!
//! let resize = registry.get("rs").unwrap();
//! assert_eq!(resize.find_parameter("w").unwrap().name, "width");
//! assert!(resize.find_parameter("1").unwrap().validate("640"));
//! ```

mod descriptor;
mod params;
mod registry;
mod types;
mod validate;

pub use descriptor::{CommandDescriptor, ParameterDescriptor};
pub use params::{ParameterMap, fold_case};
pub use registry::{CommandRegistry, HELP_COMMAND, Lookup};
pub use types::*;
pub use validate::{RegistrationError, validate_command, validate_registration};
