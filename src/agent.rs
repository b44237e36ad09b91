//! LLM-backed agent: prefix/suffix prompt plus tools over an `LlmClient`.
//!
//! The base agent downstream packages subclassed: a system prompt assembled
//! from a prefix, the tool-name list, and a suffix, with the conversation
//! rendered from the shared state. Replies carry any tool calls the model
//! requested; the graph's tool node executes them.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::llm::LlmClient;
use crate::message::Message;
use crate::state::AgentState;
use crate::tool::ToolSpec;
use crate::traits::{Agent, AgentReply};

/// Configuration for an [`LlmAgent`]: prompt halves and identity.
///
/// All call-site defaults are resolved here by the caller; there is no
/// process-wide registry.
#[derive(Debug, Clone, Default)]
pub struct AgentConfig {
    /// Stable agent name; tags produced messages and names the graph node.
    pub name: String,
    /// Human-readable description; empty means "Agent for {name}".
    pub description: String,
    /// System-prompt prefix (role and task framing).
    pub prefix: String,
    /// System-prompt suffix (closing instructions, e.g. the end-word rule).
    pub suffix: String,
}

/// Tool-using agent over an [`LlmClient`].
///
/// System prompt template:
/// `"{prefix} You have access to the following tools: {tool_names}.\n{suffix}"`.
pub struct LlmAgent {
    config: AgentConfig,
    llm: Arc<dyn LlmClient>,
    tools: Vec<ToolSpec>,
}

impl LlmAgent {
    /// Builds an agent from explicit config, an LLM client, and tool specs.
    pub fn new(config: AgentConfig, llm: Arc<dyn LlmClient>, tools: Vec<ToolSpec>) -> Self {
        Self {
            config,
            llm,
            tools,
        }
    }

    fn system_prompt(&self) -> String {
        let tool_names = self
            .tools
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{} You have access to the following tools: {}.\n{}",
            self.config.prefix, tool_names, self.config.suffix
        )
    }
}

#[async_trait]
impl Agent for LlmAgent {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn description(&self) -> String {
        if self.config.description.is_empty() {
            format!("Agent for {}", self.config.name)
        } else {
            self.config.description.clone()
        }
    }

    async fn invoke(&self, state: &AgentState) -> Result<AgentReply, AgentError> {
        let mut messages = Vec::with_capacity(state.messages.len() + 1);
        messages.push(Message::system(self.system_prompt()));
        messages.extend(state.messages.iter().cloned());

        let response = self.llm.invoke(&messages).await?;
        Ok(AgentReply::Message(Message::Ai {
            content: response.content,
            name: Some(self.config.name.clone()),
            tool_calls: response.tool_calls,
        }))
    }
}
