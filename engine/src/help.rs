//! Help text synthesis from registered schema metadata.

use command_dispatch_core::{CommandRegistry, CommandSchema};

const HELP_FOOTER: &str = "For more help on the usage of individual commands enter the name of \
                           the command followed by '-help'.\n";

/// Renders the registry-wide help listing.
///
/// An optional description header is followed by one line per command in
/// registration order, naming its parameters as `-name`.
///
/// # Examples
///
/// ```
/// use command_dispatch_core::*;
/// use command_dispatch_engine::help::render_registry_help;
///
/// let mut registry = CommandRegistry::new().with_description("File tools");
/// registry
///     .register(
///         CommandSchema::new("copy", |_| {})
///             .with_parameter(ParameterSchema::new("source"))
///             .with_parameter(ParameterSchema::new("target")),
///     )
///     .unwrap();
///
/// let text = render_registry_help(&registry);
/// assert!(text.starts_with("Description: File tools\n"));
/// assert!(text.contains("\n  copy -source, -target\n"));
/// ```
pub fn render_registry_help(registry: &CommandRegistry) -> String {
    let mut out = String::new();

    if let Some(desc) = registry.description().filter(|d| !d.trim().is_empty()) {
        out.push_str(&format!("Description: {desc}\n\n"));
    }

    out.push_str("Commands:\n");
    for cmd in registry.commands() {
        let params = cmd
            .parameters
            .iter()
            .map(|p| format!("-{}", p.name))
            .collect::<Vec<_>>()
            .join(", ");
        if params.is_empty() {
            out.push_str(&format!("  {}\n", cmd.name));
        } else {
            out.push_str(&format!("  {} {params}\n", cmd.name));
        }
    }

    out.push('\n');
    out.push_str(HELP_FOOTER);
    out
}

/// Renders detailed help for one command.
///
/// Lists the name, aliases and description, then each parameter in
/// declaration order with its data type, aliases, position and description.
pub fn render_command_help(schema: &CommandSchema) -> String {
    let mut out = String::new();

    out.push_str(&format!("Command: {}\n", schema.name));
    if !schema.aliases.is_empty() {
        out.push_str(&format!("Aliases: {}\n", schema.aliases.join(", ")));
    }
    if let Some(desc) = schema.description.as_deref().filter(|d| !d.trim().is_empty()) {
        out.push_str(&format!("Description: {desc}\n"));
    }

    if !schema.parameters.is_empty() {
        out.push_str("\nParameters:\n");
        for param in &schema.parameters {
            out.push_str(&format!("\n  Parameter: {}\n", param.name));
            out.push_str(&format!("  Data Type: {}\n", param.data_type));
            if !param.aliases.is_empty() {
                out.push_str(&format!("  Aliases: {}\n", param.aliases.join(", ")));
            }
            if let Some(ordinal) = param.ordinal {
                out.push_str(&format!("  Position: {ordinal}\n"));
            }
            if let Some(desc) = param.description.as_deref().filter(|d| !d.trim().is_empty()) {
                out.push_str(&format!("  Description: {desc}\n"));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use command_dispatch_core::{DataType, ParameterSchema};

    use super::*;

    #[test]
    fn test_registry_help_lists_commands_in_order() {
        let mut registry = CommandRegistry::new();
        registry.register(CommandSchema::new("zeta", |_| {})).unwrap();
        registry
            .register(CommandSchema::new("alpha", |_| {}).with_parameter(ParameterSchema::new("x")))
            .unwrap();

        let text = render_registry_help(&registry);
        assert_eq!(text, format!("Commands:\n  zeta\n  alpha -x\n\n{HELP_FOOTER}"));
    }

    #[test]
    fn test_command_help_includes_parameter_details() {
        let schema = CommandSchema::new("greet", |_| {})
            .with_alias("g")
            .with_alias("hi")
            .with_description("Print a greeting")
            .with_parameter(
                ParameterSchema::new("name")
                    .with_alias("n")
                    .at_position(1)
                    .with_description("Who to greet"),
            )
            .with_parameter(ParameterSchema::new("times").with_type(DataType::Integer));

        let text = render_command_help(&schema);
        let expected = [
            "Command: greet",
            "Aliases: g, hi",
            "Description: Print a greeting",
            "",
            "Parameters:",
            "",
            "  Parameter: name",
            "  Data Type: text",
            "  Aliases: n",
            "  Position: 1",
            "  Description: Who to greet",
            "",
            "  Parameter: times",
            "  Data Type: integer",
            "",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_command_help_without_parameters() {
        let schema = CommandSchema::new("version", |_| {});
        assert_eq!(render_command_help(&schema), "Command: version\n");
    }
}
