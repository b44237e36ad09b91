//! Mock LLM for tests and examples.
//!
//! Returns a fixed assistant message and optional fixed tool calls; optional
//! stateful mode for multi-round runs (first call requests a tool, second
//! answers directly).

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::AgentError;
use crate::llm::{LlmClient, LlmResponse};
use crate::message::{Message, ToolCall};

/// Mock LLM: fixed assistant text and optional tool calls.
///
/// Stateful mode: the first invoke returns `(content, tool_calls)`, later
/// invokes return `(second_content, [])`, so a graph can run one tool round
/// and then terminate.
pub struct MockLlm {
    /// Assistant content to return (first call when stateful).
    content: String,
    /// Tool calls to return (first call when stateful).
    tool_calls: Vec<ToolCall>,
    /// When Some, counts invokes to switch to the second response.
    call_count: Option<AtomicUsize>,
    /// Second response content (stateful mode).
    second_content: Option<String>,
}

impl MockLlm {
    /// Mock with custom content and tool calls.
    pub fn new(content: impl Into<String>, tool_calls: Vec<ToolCall>) -> Self {
        Self {
            content: content.into(),
            tool_calls,
            call_count: None,
            second_content: None,
        }
    }

    /// Mock that returns assistant text and no tool calls.
    pub fn with_no_tool_calls(content: impl Into<String>) -> Self {
        Self::new(content, vec![])
    }

    /// Mock that requests one tool call on the first invoke, then answers
    /// with `second_content` on later invokes.
    pub fn stateful(
        content: impl Into<String>,
        tool_calls: Vec<ToolCall>,
        second_content: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            tool_calls,
            call_count: Some(AtomicUsize::new(0)),
            second_content: Some(second_content.into()),
        }
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn invoke(&self, _messages: &[Message]) -> Result<LlmResponse, AgentError> {
        if let (Some(count), Some(second)) = (&self.call_count, &self.second_content) {
            if count.fetch_add(1, Ordering::SeqCst) > 0 {
                return Ok(LlmResponse {
                    content: second.clone(),
                    tool_calls: vec![],
                    usage: None,
                });
            }
        }
        Ok(LlmResponse {
            content: self.content.clone(),
            tool_calls: self.tool_calls.clone(),
            usage: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: fixed mock returns the same response on every invoke.
    #[tokio::test]
    async fn fixed_mock_repeats_response() {
        let llm = MockLlm::with_no_tool_calls("hello");
        for _ in 0..2 {
            let resp = llm.invoke(&[]).await.unwrap();
            assert_eq!(resp.content, "hello");
            assert!(resp.tool_calls.is_empty());
        }
    }

    /// **Scenario**: stateful mock requests a tool once, then answers directly.
    #[tokio::test]
    async fn stateful_mock_switches_after_first_call() {
        let llm = MockLlm::stateful(
            "checking",
            vec![ToolCall {
                id: Some("call-1".into()),
                name: "get_time".into(),
                arguments: "{}".into(),
            }],
            "FINAL ANSWER: noon",
        );
        let first = llm.invoke(&[]).await.unwrap();
        assert_eq!(first.tool_calls.len(), 1);
        let second = llm.invoke(&[]).await.unwrap();
        assert!(second.tool_calls.is_empty());
        assert_eq!(second.content, "FINAL ANSWER: noon");
    }
}
