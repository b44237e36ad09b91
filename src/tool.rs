//! Tool capability: opaque callables executed by the tool node.
//!
//! The crate passes the configured tool list through to the shared tool node;
//! arguments are the JSON string the model produced, forwarded unparsed.

use async_trait::async_trait;

use crate::error::AgentError;

/// Specification of one tool as advertised to the model.
///
/// `input_schema` is a JSON Schema object describing the arguments.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ToolSpec {
    pub name: String,
    pub description: Option<String>,
    pub input_schema: serde_json::Value,
}

/// One executable tool.
///
/// Invoked only by the tool node, with the JSON-encoded arguments from the
/// originating tool call. A failed call propagates to the top-level caller.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name; matched against `ToolCall::name`.
    fn name(&self) -> &str;

    /// Description advertised to the model.
    fn description(&self) -> String {
        String::new()
    }

    /// Schema of the arguments object; defaults to an unconstrained object.
    fn input_schema(&self) -> serde_json::Value {
        serde_json::json!({"type": "object"})
    }

    /// Executes the tool with JSON-encoded arguments, returning text output.
    async fn call(&self, arguments: &str) -> Result<String, AgentError>;

    /// Spec used when advertising this tool to an LLM.
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name().to_string(),
            description: Some(self.description()),
            input_schema: self.input_schema(),
        }
    }
}
