//! Tool catalog for MCP operations
//!
//! The catalog is the closed set of tools this server offers. It is built once
//! from the per-tool definitions in [`crate::mcp::tools::issues`] and is then
//! read-only for the lifetime of the process. Both `tools/list` and argument
//! validation consult it.

use crate::error::{GitlabMcpError, Result};
use crate::mcp::tools::issues;
use serde_json::{json, Map, Value};
use std::sync::OnceLock;

/// Value type accepted by a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// JSON string
    Text,
    /// JSON integer, rendered in decimal on the command line
    Integer,
    /// JSON boolean, rendered as a bare flag when true
    Boolean,
}

impl ParameterKind {
    /// JSON-Schema type name
    pub fn json_type(self) -> &'static str {
        match self {
            ParameterKind::Text => "string",
            ParameterKind::Integer => "integer",
            ParameterKind::Boolean => "boolean",
        }
    }
}

/// Declaration of one named parameter of a tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    /// Key in the call's `arguments` object
    pub key: &'static str,
    /// Accepted value type
    pub kind: ParameterKind,
    /// Whether the call is rejected when the key is absent
    pub required: bool,
    /// Closed set of accepted values for a text parameter
    pub allowed_values: Option<&'static [&'static str]>,
    /// Human readable description published in the schema
    pub description: &'static str,
}

impl ParameterSpec {
    fn new(key: &'static str, kind: ParameterKind, description: &'static str) -> Self {
        Self {
            key,
            kind,
            required: false,
            allowed_values: None,
            description,
        }
    }

    /// An optional text parameter
    pub fn text(key: &'static str, description: &'static str) -> Self {
        Self::new(key, ParameterKind::Text, description)
    }

    /// An optional integer parameter
    pub fn integer(key: &'static str, description: &'static str) -> Self {
        Self::new(key, ParameterKind::Integer, description)
    }

    /// An optional boolean parameter
    pub fn boolean(key: &'static str, description: &'static str) -> Self {
        Self::new(key, ParameterKind::Boolean, description)
    }

    /// Mark the parameter as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Restrict a text parameter to a fixed set of values
    pub fn one_of(mut self, values: &'static [&'static str]) -> Self {
        self.allowed_values = Some(values);
        self
    }

    fn schema(&self) -> Value {
        let mut schema = json!({
            "type": self.kind.json_type(),
            "description": self.description,
        });
        if let Some(values) = self.allowed_values {
            schema["enum"] = json!(values);
        }
        schema
    }

    /// Check a supplied value against this parameter, returning its normalized form
    fn check(&self, tool: &str, value: &Value) -> Result<Value> {
        match (self.kind, value) {
            (ParameterKind::Text, Value::String(text)) => {
                if let Some(allowed) = self.allowed_values {
                    // An empty optional value means "not given" and is dropped later
                    let skip = text.is_empty() && !self.required;
                    if !skip && !allowed.contains(&text.as_str()) {
                        return Err(GitlabMcpError::invalid_argument(
                            tool,
                            self.key,
                            format!("expected one of: {}, got {:?}", allowed.join(", "), text),
                        ));
                    }
                }
                Ok(value.clone())
            }
            (ParameterKind::Integer, _) => normalize_integer(value).map(Value::from).ok_or_else(|| {
                GitlabMcpError::invalid_argument(
                    tool,
                    self.key,
                    format!("expected an integer, got {value}"),
                )
            }),
            (ParameterKind::Boolean, Value::Bool(_)) => Ok(value.clone()),
            (kind, other) => Err(GitlabMcpError::invalid_argument(
                tool,
                self.key,
                format!("expected {}, got {other}", kind.json_type()),
            )),
        }
    }
}

/// Accepts JSON integers, integral floats and decimal strings
fn normalize_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                // i64::MAX as f64 rounds up to 2^63, which does not fit
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Immutable description of one tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDefinition {
    /// Unique tool name, matched case-sensitively
    pub name: &'static str,
    /// Description published to clients
    pub description: &'static str,
    /// Parameters in declaration order
    pub parameters: Vec<ParameterSpec>,
}

impl ToolDefinition {
    /// Create a definition with no parameters
    pub fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            parameters: Vec::new(),
        }
    }

    /// Append a parameter
    pub fn with_parameter(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Look up a parameter by key
    pub fn parameter(&self, key: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.key == key)
    }

    /// Keys of the required parameters, in declaration order
    pub fn required_keys(&self) -> Vec<&'static str> {
        self.parameters
            .iter()
            .filter(|p| p.required)
            .map(|p| p.key)
            .collect()
    }

    /// JSON-Schema object describing the tool's arguments
    pub fn input_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .parameters
            .iter()
            .map(|p| (p.key.to_string(), p.schema()))
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": self.required_keys(),
        })
    }

    /// Validate call arguments against this definition
    ///
    /// Returns only declared keys; undeclared keys and `null` values are
    /// dropped, integers are normalized. Fails on the first missing required
    /// parameter or mistyped value.
    pub fn validate(&self, arguments: &Map<String, Value>) -> Result<Map<String, Value>> {
        let mut normalized = Map::new();

        for spec in &self.parameters {
            match arguments.get(spec.key) {
                None | Some(Value::Null) => {
                    if spec.required {
                        return Err(GitlabMcpError::MissingArgument {
                            tool: self.name.to_string(),
                            key: spec.key.to_string(),
                        });
                    }
                }
                Some(value) => {
                    let value = spec.check(self.name, value)?;
                    normalized.insert(spec.key.to_string(), value);
                }
            }
        }

        Ok(normalized)
    }
}

/// The complete, ordered set of tools
#[derive(Debug, Clone)]
pub struct ToolCatalog {
    tools: Vec<ToolDefinition>,
}

impl ToolCatalog {
    /// Build the catalog of issue tools
    pub fn builtin() -> Self {
        Self {
            tools: issues::definitions(),
        }
    }

    /// Process-wide catalog, built on first use
    pub fn global() -> &'static Self {
        static CATALOG: OnceLock<ToolCatalog> = OnceLock::new();
        CATALOG.get_or_init(Self::builtin)
    }

    /// All tools in stable order
    pub fn list_tools(&self) -> &[ToolDefinition] {
        &self.tools
    }

    /// Find a tool by exact name
    pub fn lookup(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.iter().find(|tool| tool.name == name)
    }

    /// All tool names in stable order
    pub fn names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|tool| tool.name).collect()
    }

    /// Number of tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
