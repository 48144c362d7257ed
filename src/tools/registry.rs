//! Tool definitions and the name-indexed registry.

use crate::error::{RegistryError, ValidationError};
use crate::tools::validation::{self, Validator};
use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// A named tool: its schema, its backend path, and whether calls carry the
/// session credential.
#[derive(Clone)]
pub struct ToolDefinition {
    name: &'static str,
    description: &'static str,
    path: &'static str,
    requires_session: bool,
    input_schema: Arc<JsonObject>,
    validator: Validator,
}

impl ToolDefinition {
    /// Define a tool whose arguments are described by `T`.
    pub fn new<T>(
        name: &'static str,
        description: &'static str,
        path: &'static str,
        requires_session: bool,
    ) -> Self
    where
        T: DeserializeOwned + Serialize + JsonSchema,
    {
        Self {
            name,
            description,
            path,
            requires_session,
            input_schema: Arc::new(validation::input_schema::<T>()),
            validator: validation::normalize::<T>,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Path appended to the tools base URL.
    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn requires_session(&self) -> bool {
        self.requires_session
    }

    pub fn input_schema(&self) -> &JsonObject {
        &self.input_schema
    }

    /// Validate `arguments` and produce the body to forward.
    pub fn validate(&self, arguments: JsonObject) -> Result<Value, ValidationError> {
        let snapshot = arguments.clone();
        (self.validator)(arguments).map_err(|e| ValidationError {
            tool: self.name.to_string(),
            fields: validation::offending_fields(&self.input_schema, &snapshot),
            reason: e.to_string(),
        })
    }

    /// The MCP-facing description of this tool.
    pub fn to_tool(&self) -> Tool {
        Tool::new(self.name, self.description, self.input_schema.clone())
    }
}

impl std::fmt::Debug for ToolDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolDefinition")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("requires_session", &self.requires_session)
            .finish()
    }
}

/// Fixed set of tools, looked up by name.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    definitions: Vec<ToolDefinition>,
    by_name: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    /// Build a registry, rejecting duplicate names.
    pub fn from_definitions(definitions: Vec<ToolDefinition>) -> Result<Self, RegistryError> {
        let mut by_name = HashMap::with_capacity(definitions.len());
        for (index, definition) in definitions.iter().enumerate() {
            if by_name.insert(definition.name, index).is_some() {
                return Err(RegistryError::DuplicateTool(definition.name.to_string()));
            }
        }

        Ok(Self {
            definitions,
            by_name,
        })
    }

    /// The Clay tool catalog.
    pub fn clay() -> Result<Self, RegistryError> {
        Self::from_definitions(super::catalog::definitions())
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.by_name.get(name).map(|&index| &self.definitions[index])
    }

    /// Definitions in declaration order.
    pub fn definitions(&self) -> &[ToolDefinition] {
        &self.definitions
    }

    /// MCP tool list in declaration order.
    pub fn tools(&self) -> Vec<Tool> {
        self.definitions.iter().map(ToolDefinition::to_tool).collect()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
