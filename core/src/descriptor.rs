use serde::Serialize;

use crate::{CommandSchema, DataType, ParameterSchema};

/// Serializable view of a registered command, without its action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandDescriptor {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub parameters: Vec<ParameterDescriptor>,
}

/// Serializable view of a parameter, without its validator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterDescriptor {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<usize>,
    pub data_type: DataType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub custom_validator: bool,
}

impl From<&ParameterSchema> for ParameterDescriptor {
    fn from(param: &ParameterSchema) -> Self {
        Self {
            name: param.name.clone(),
            aliases: param.aliases.clone(),
            ordinal: param.ordinal,
            data_type: param.data_type.clone(),
            description: param.description.clone(),
            custom_validator: param.has_custom_validator(),
        }
    }
}

impl From<&CommandSchema> for CommandDescriptor {
    fn from(cmd: &CommandSchema) -> Self {
        Self {
            name: cmd.name.clone(),
            aliases: cmd.aliases.clone(),
            description: cmd.description.clone(),
            parameters: cmd.parameters.iter().map(ParameterDescriptor::from).collect(),
        }
    }
}
