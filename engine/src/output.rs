//! Output formatting for the command catalog.

use command_dispatch_core::{CommandDescriptor, CommandRegistry};
use serde::{Deserialize, Serialize};

use crate::help::render_registry_help;

/// Supported catalog formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum CatalogFormat {
    /// Same text as registry-wide help.
    #[default]
    Text,
    Markdown,
    Json,
    Yaml,
}

/// Formats every registered command in the requested format.
pub fn format_catalog(registry: &CommandRegistry, format: CatalogFormat) -> Result<String, String> {
    match format {
        CatalogFormat::Text => Ok(render_registry_help(registry)),
        CatalogFormat::Markdown => Ok(catalog_to_markdown(registry)),
        CatalogFormat::Json => serde_json::to_string_pretty(&registry.descriptors())
            .map_err(|e| format!("JSON serialization failed: {e}")),
        CatalogFormat::Yaml => serde_yaml::to_string(&registry.descriptors())
            .map_err(|e| format!("YAML serialization failed: {e}")),
    }
}

fn catalog_to_markdown(registry: &CommandRegistry) -> String {
    let mut out = String::new();

    if let Some(desc) = registry.description() {
        out.push_str(&format!("{desc}\n\n"));
    }

    for cmd in registry.descriptors() {
        command_to_markdown(&cmd, &mut out);
    }

    out
}

fn command_to_markdown(cmd: &CommandDescriptor, out: &mut String) {
    out.push_str(&format!("## {}\n\n", cmd.name));

    if let Some(ref desc) = cmd.description {
        out.push_str(&format!("{desc}\n\n"));
    }

    if !cmd.aliases.is_empty() {
        let aliases = cmd
            .aliases
            .iter()
            .map(|a| format!("`{a}`"))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("**Aliases:** {aliases}\n\n"));
    }

    if cmd.parameters.is_empty() {
        return;
    }

    out.push_str("| Parameter | Aliases | Position | Type | Description |\n");
    out.push_str("|-----------|---------|----------|------|-------------|\n");
    for param in &cmd.parameters {
        let aliases = param.aliases.join(", ");
        let position = param.ordinal.map(|o| o.to_string()).unwrap_or_default();
        let desc = param.description.as_deref().unwrap_or("");
        out.push_str(&format!(
            "| `-{}` | {aliases} | {position} | {} | {desc} |\n",
            param.name, param.data_type
        ));
    }
    out.push('\n');
}
