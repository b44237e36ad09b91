//! LLM client abstraction.
//!
//! `LlmAgent` and `Chain` depend on a callable that turns a message list into
//! assistant text and optional tool calls; this module defines the trait, a
//! mock for tests, and an OpenAI-compatible implementation.

mod mock;
mod openai;

pub use mock::MockLlm;
pub use openai::ChatOpenAI;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::message::{Message, ToolCall};

/// Token usage for one LLM call (prompt + completion), when reported.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct LlmUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Response from one LLM completion: assistant text and optional tool calls.
pub struct LlmResponse {
    /// Assistant message content (plain text).
    pub content: String,
    /// Tool calls from this turn; empty means the model answered directly.
    pub tool_calls: Vec<ToolCall>,
    /// Token usage for this call, when the provider returns it.
    pub usage: Option<LlmUsage>,
}

/// LLM client: given messages, returns assistant text and optional tool calls.
///
/// Implementations: [`MockLlm`] (fixed response, for tests and examples) and
/// [`ChatOpenAI`] (OpenAI-compatible chat completions API).
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Invoke one turn: read messages, return assistant content and tool calls.
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, AgentError>;
}
