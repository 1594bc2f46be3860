//! Schema type definitions for dispatchable commands.
//!
//! This module defines the registration-time data model: a
//! [`CommandSchema`] names a command, its aliases and the action it runs,
//! and owns an ordered list of [`ParameterSchema`] values describing what
//! the command accepts.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{ParameterMap, fold_case};

/// Predicate run against a raw parameter value.
pub type Validator = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Function invoked with the resolved parameters of a command.
pub type Action = Arc<dyn Fn(&ParameterMap) + Send + Sync>;

/// Data type a parameter value is expected to parse as.
///
/// The default validator of a [`ParameterSchema`] accepts a raw value only
/// when it parses as the declared type.
///
/// # Examples
///
/// ```
/// use command_dispatch_core::DataType;
///
/// assert_eq!(DataType::default(), DataType::Text);
/// assert!(DataType::Integer.accepts("-42"));
/// assert!(!DataType::Integer.accepts("4.2"));
///
/// let format = DataType::Choice(vec!["json".into(), "yaml".into()]);
/// assert!(format.accepts("JSON"));
/// assert_eq!(format.label(), "choice(json|yaml)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    /// Free text (the default). Every value is accepted.
    #[default]
    Text,
    /// Signed 64-bit integer.
    Integer,
    /// Finite floating point number.
    Decimal,
    /// `true`/`false`, or an empty value for a bare flag.
    Boolean,
    /// One of a fixed set of values, compared case-insensitively.
    Choice(Vec<String>),
}

impl DataType {
    /// Returns `true` if `raw` parses as this type.
    pub fn accepts(&self, raw: &str) -> bool {
        match self {
            DataType::Text => true,
            DataType::Integer => raw.parse::<i64>().is_ok(),
            DataType::Decimal => raw.parse::<f64>().is_ok_and(f64::is_finite),
            DataType::Boolean => {
                raw.is_empty()
                    || raw.eq_ignore_ascii_case("true")
                    || raw.eq_ignore_ascii_case("false")
            }
            DataType::Choice(choices) => {
                let raw = fold_case(raw);
                choices.iter().any(|c| fold_case(c) == raw)
            }
        }
    }

    /// Human-readable label used in help text and default error messages.
    pub fn label(&self) -> String {
        match self {
            DataType::Text => "text".to_string(),
            DataType::Integer => "integer".to_string(),
            DataType::Decimal => "decimal".to_string(),
            DataType::Boolean => "boolean".to_string(),
            DataType::Choice(choices) => format!("choice({})", choices.join("|")),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Schema for one parameter of a command.
///
/// A parameter is referenced on the command line by its name, one of its
/// aliases, or (when an ordinal is set) by position. Names and aliases are
/// matched case-insensitively.
///
/// Use [`ParameterSchema::new`] and chain builder methods to configure it.
///
/// # Examples
///
/// ```
/// use command_dispatch_core::{DataType, ParameterSchema};
///
/// let count = ParameterSchema::new("count")
///     .with_alias("c")
///     .at_position(1)
///     .with_type(DataType::Integer);
///
/// assert!(count.validate("3"));
/// assert!(!count.validate("three"));
/// assert_eq!(count.error_message(), "count could not be parsed as type integer.");
///
/// // A custom validator replaces the type check entirely.
/// let small = ParameterSchema::new("count")
///     .with_type(DataType::Integer)
///     .with_validator(|raw| raw.len() == 1)
///     .with_error_message("count must be a single character");
/// assert!(small.validate("x"));
/// assert!(!small.validate("12"));
/// assert_eq!(small.error_message(), "count must be a single character");
/// ```
#[derive(Clone)]
pub struct ParameterSchema {
    /// Canonical name; resolved values are stored under it.
    pub name: String,
    /// Alternative names.
    pub aliases: Vec<String>,
    /// 1-based position used to match unnamed values.
    pub ordinal: Option<usize>,
    /// Type checked by the default validator.
    pub data_type: DataType,
    /// Description for help output.
    pub description: Option<String>,
    validator: Option<Validator>,
    error_message: Option<String>,
}

impl ParameterSchema {
    /// Creates a named text parameter with no aliases and no position.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            aliases: Vec::new(),
            ordinal: None,
            data_type: DataType::Text,
            description: None,
            validator: None,
            error_message: None,
        }
    }

    /// Adds an alias.
    pub fn with_alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_string());
        self
    }

    /// Sets the 1-based position matched by unnamed values.
    pub fn at_position(mut self, ordinal: usize) -> Self {
        self.ordinal = Some(ordinal);
        self
    }

    /// Sets the declared data type.
    pub fn with_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Replaces the default type validator.
    pub fn with_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(validator));
        self
    }

    /// Overrides the message reported when validation fails.
    pub fn with_error_message(mut self, message: &str) -> Self {
        self.error_message = Some(message.to_string());
        self
    }

    /// Runs the custom validator if one is set, the type check otherwise.
    pub fn validate(&self, raw: &str) -> bool {
        match &self.validator {
            Some(validator) => validator(raw),
            None => self.data_type.accepts(raw),
        }
    }

    /// Returns the configured error message, or one built from the name and
    /// data type.
    pub fn error_message(&self) -> String {
        self.error_message.clone().unwrap_or_else(|| {
            format!("{} could not be parsed as type {}.", self.name, self.data_type)
        })
    }

    /// Returns `true` if a custom validator replaces the type check.
    pub fn has_custom_validator(&self) -> bool {
        self.validator.is_some()
    }

    /// Checks the canonical name, ignoring case.
    pub fn matches_name(&self, key: &str) -> bool {
        fold_case(&self.name) == fold_case(key)
    }

    /// Checks the aliases, ignoring case.
    pub fn matches_alias(&self, key: &str) -> bool {
        let key = fold_case(key);
        self.aliases.iter().any(|a| fold_case(a) == key)
    }

    /// Checks whether `key` is the decimal form of this parameter's ordinal.
    pub fn matches_ordinal(&self, key: &str) -> bool {
        self.ordinal.is_some_and(|ordinal| ordinal.to_string() == key)
    }

    /// Iterates over the canonical name followed by every alias.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

impl fmt::Debug for ParameterSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterSchema")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("ordinal", &self.ordinal)
            .field("data_type", &self.data_type)
            .field("description", &self.description)
            .field("custom_validator", &self.validator.is_some())
            .field("error_message", &self.error_message)
            .finish()
    }
}

/// Schema for a dispatchable command.
///
/// Binds a name, aliases and an ordered parameter list to the [`Action`]
/// that runs once the parameters are resolved.
///
/// # Examples
///
/// ```
/// use command_dispatch_core::{CommandSchema, ParameterSchema};
///
/// let greet = CommandSchema::new("greet", |params| {
///     println!("Hello, {}!", params.get("name").unwrap_or("world"));
/// })
/// .with_alias("g")
/// .with_description("Print a greeting")
/// .with_parameter(ParameterSchema::new("name").with_alias("n").at_position(1));
///
/// assert!(greet.matches("G"));
/// assert_eq!(greet.find_parameter("n").unwrap().name, "name");
/// assert_eq!(greet.find_parameter("1").unwrap().name, "name");
/// assert!(greet.find_parameter("2").is_none());
/// ```
#[derive(Clone)]
pub struct CommandSchema {
    /// Canonical name; lower-cased when registered.
    pub name: String,
    /// Alternative names.
    pub aliases: Vec<String>,
    /// Parameters in declaration order.
    pub parameters: Vec<ParameterSchema>,
    /// Description for help output.
    pub description: Option<String>,
    action: Action,
}

impl CommandSchema {
    /// Creates a command with no aliases or parameters.
    pub fn new<F>(name: &str, action: F) -> Self
    where
        F: Fn(&ParameterMap) + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            aliases: Vec::new(),
            parameters: Vec::new(),
            description: None,
            action: Arc::new(action),
        }
    }

    /// Adds an alias.
    pub fn with_alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_string());
        self
    }

    /// Adds a parameter.
    pub fn with_parameter(mut self, parameter: ParameterSchema) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Returns the action bound to this command.
    pub fn action(&self) -> &Action {
        &self.action
    }

    /// Checks the name and aliases, ignoring case.
    pub fn matches(&self, name: &str) -> bool {
        let name = fold_case(name);
        self.names().any(|n| fold_case(n) == name)
    }

    /// Iterates over the canonical name followed by every alias.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// Finds the parameter a raw key refers to.
    ///
    /// Names are tried first across all parameters, then aliases, then
    /// ordinals; the first match wins.
    pub fn find_parameter(&self, key: &str) -> Option<&ParameterSchema> {
        self.parameters
            .iter()
            .find(|p| p.matches_name(key))
            .or_else(|| self.parameters.iter().find(|p| p.matches_alias(key)))
            .or_else(|| self.parameters.iter().find(|p| p.matches_ordinal(key)))
    }
}

impl fmt::Debug for CommandSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSchema")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("parameters", &self.parameters)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validator_per_type() {
        assert!(DataType::Text.accepts(""));
        assert!(DataType::Text.accepts("anything at all"));
        assert!(DataType::Integer.accepts("12"));
        assert!(!DataType::Integer.accepts(""));
        assert!(DataType::Decimal.accepts("3.25"));
        assert!(!DataType::Decimal.accepts("NaN"));
        assert!(!DataType::Decimal.accepts("inf"));
        assert!(DataType::Boolean.accepts("TRUE"));
        assert!(DataType::Boolean.accepts(""));
        assert!(!DataType::Boolean.accepts("yes"));
    }

    #[test]
    fn test_custom_validator_replaces_type_check() {
        let param = ParameterSchema::new("level")
            .with_type(DataType::Integer)
            .with_validator(|raw| raw == "high" || raw == "low");

        assert!(param.has_custom_validator());
        assert!(param.validate("high"));
        assert!(!param.validate("5"));
    }

    #[test]
    fn test_default_error_message_names_type() {
        let param = ParameterSchema::new("ratio").with_type(DataType::Decimal);
        assert_eq!(param.error_message(), "ratio could not be parsed as type decimal.");
    }

    #[test]
    fn test_find_parameter_prefers_name_over_alias() {
        let cmd = CommandSchema::new("copy", |_| {})
            .with_parameter(ParameterSchema::new("source").with_alias("target"))
            .with_parameter(ParameterSchema::new("target").at_position(1));

        assert_eq!(cmd.find_parameter("TARGET").unwrap().name, "target");
        assert_eq!(cmd.find_parameter("1").unwrap().name, "target");
        assert!(cmd.find_parameter("dest").is_none());
    }

    #[test]
    fn test_parameter_names_fold_non_ascii_case() {
        let cmd = CommandSchema::new("über", |_| {})
            .with_parameter(ParameterSchema::new("Größe").with_alias("Ö"));

        assert_eq!(cmd.find_parameter("GRÖßE").unwrap().name, "Größe");
        assert_eq!(cmd.find_parameter("ö").unwrap().name, "Größe");
        assert!(cmd.matches("ÜBER"));
        assert!(DataType::Choice(vec!["Äpfel".into()]).accepts("äPFEL"));
    }

    #[test]
    fn test_ordinal_matches_decimal_form_only() {
        let param = ParameterSchema::new("first").at_position(1);
        assert!(param.matches_ordinal("1"));
        assert!(!param.matches_ordinal("01"));
        assert!(!ParameterSchema::new("named").matches_ordinal("1"));
    }
}
