//! Node adapter and tool-execution node for agent graphs.
//!
//! `AgentNode` normalizes an agent's reply into a message record appended to
//! the shared state; `ToolNode` executes pending tool calls and routes
//! control back to the invoking agent by leaving `sender` untouched.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::message::Message;
use crate::state::AgentState;
use crate::tool::Tool;
use crate::traits::{Agent, AgentReply};

use super::node::Node;
use super::Next;

/// Node id of the shared tool-execution node.
pub const TOOL_NODE: &str = "tool_node";

/// Wraps an agent as a graph node.
///
/// Invokes the agent with the full state and appends exactly one message:
/// tool results pass through unchanged, message-like replies are re-tagged
/// as AI output carrying the agent's name, and raw envelopes are kept
/// unnormalized (tagged with the agent name) so the router's fallback path
/// stays exercised. `sender` is set to the agent's name. No other state is
/// touched.
pub struct AgentNode {
    agent: Arc<dyn Agent>,
}

impl AgentNode {
    pub fn new(agent: Arc<dyn Agent>) -> Self {
        Self { agent }
    }

    fn normalize(&self, reply: AgentReply) -> Result<Message, AgentError> {
        let name = self.agent.name().to_string();
        match reply {
            // Tool results pass through so their call ids survive.
            AgentReply::Message(msg @ Message::Tool { .. }) => Ok(msg),
            AgentReply::Message(Message::Ai {
                content,
                tool_calls,
                ..
            }) => Ok(Message::Ai {
                content,
                name: Some(name),
                tool_calls,
            }),
            AgentReply::Message(other) => Ok(Message::Ai {
                content: other.content().unwrap_or_default().to_string(),
                name: Some(name),
                tool_calls: Vec::new(),
            }),
            AgentReply::Raw(mut value) => {
                let has_text = value
                    .get("content")
                    .or_else(|| value.get("output"))
                    .and_then(|v| v.as_str())
                    .is_some();
                if !has_text {
                    return Err(AgentError::MalformedReply(format!(
                        "agent {} returned an envelope without content or output",
                        name
                    )));
                }
                if let Some(obj) = value.as_object_mut() {
                    obj.entry("name".to_string())
                        .or_insert_with(|| serde_json::Value::String(name));
                }
                Ok(Message::Raw(value))
            }
        }
    }
}

#[async_trait]
impl Node<AgentState> for AgentNode {
    fn id(&self) -> &str {
        self.agent.name()
    }

    async fn run(&self, state: AgentState) -> Result<(AgentState, Next), AgentError> {
        let reply = self.agent.invoke(&state).await?;
        let message = self.normalize(reply)?;
        let mut state = state;
        state.messages.push(message);
        state.sender = self.agent.name().to_string();
        Ok((state, Next::Continue))
    }
}

/// Shared tool-execution node.
///
/// Runs every pending tool call of the last message through the matching
/// configured tool and appends one tool-result message per call. Does not
/// update `sender`: the conditional edge out of this node routes on `sender`,
/// so control returns to the agent that requested the tools.
pub struct ToolNode {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolNode {
    pub fn new(tools: Vec<Arc<dyn Tool>>) -> Self {
        let tools = tools
            .into_iter()
            .map(|t| (t.name().to_string(), t))
            .collect();
        Self { tools }
    }
}

#[async_trait]
impl Node<AgentState> for ToolNode {
    fn id(&self) -> &str {
        TOOL_NODE
    }

    async fn run(&self, state: AgentState) -> Result<(AgentState, Next), AgentError> {
        let pending: Vec<_> = state
            .last_message()
            .map(|m| m.tool_calls().to_vec())
            .unwrap_or_default();

        let mut state = state;
        for call in pending {
            let tool = self.tools.get(&call.name).ok_or_else(|| {
                AgentError::ExecutionFailed(format!("unknown tool: {}", call.name))
            })?;
            tracing::debug!(tool = %call.name, "executing tool call");
            let output = tool.call(&call.arguments).await?;
            state
                .messages
                .push(Message::tool(output, call.id.clone(), Some(call.name)));
        }
        Ok((state, Next::Continue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::ToolCall;
    use serde_json::json;

    struct FixedAgent {
        name: &'static str,
        reply: AgentReply,
    }

    #[async_trait]
    impl Agent for FixedAgent {
        fn name(&self) -> &str {
            self.name
        }
        async fn invoke(&self, _state: &AgentState) -> Result<AgentReply, AgentError> {
            Ok(self.reply.clone())
        }
    }

    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }
        async fn call(&self, arguments: &str) -> Result<String, AgentError> {
            Ok(arguments.to_string())
        }
    }

    /// **Scenario**: the adapter appends exactly one message and sets sender to the agent name.
    #[tokio::test]
    async fn adapter_appends_one_message_and_sets_sender() {
        let node = AgentNode::new(Arc::new(FixedAgent {
            name: "agent1",
            reply: AgentReply::text("working"),
        }));
        let state = AgentState::from_human_message("hi");
        let before = state.messages.len();

        let (after, next) = node.run(state).await.unwrap();
        assert_eq!(next, Next::Continue);
        assert_eq!(after.messages.len(), before + 1);
        assert_eq!(after.sender, "agent1");
        let last = after.last_message().unwrap();
        assert_eq!(last.content(), Some("working"));
        assert_eq!(last.name(), Some("agent1"));
    }

    /// **Scenario**: a raw envelope is appended unnormalized, tagged with the agent name.
    #[tokio::test]
    async fn adapter_keeps_raw_envelope_and_tags_name() {
        let node = AgentNode::new(Arc::new(FixedAgent {
            name: "wrapped",
            reply: AgentReply::Raw(json!({"output": "FINAL ANSWER"})),
        }));
        let state = AgentState::from_human_message("hi");

        let (after, _) = node.run(state).await.unwrap();
        let last = after.last_message().unwrap();
        assert!(matches!(last, Message::Raw(_)));
        assert_eq!(last.output(), Some("FINAL ANSWER"));
        assert_eq!(last.name(), Some("wrapped"));
        assert_eq!(after.sender, "wrapped");
    }

    /// **Scenario**: an envelope with neither content nor output fails with MalformedReply.
    #[tokio::test]
    async fn adapter_rejects_envelope_without_text() {
        let node = AgentNode::new(Arc::new(FixedAgent {
            name: "wrapped",
            reply: AgentReply::Raw(json!({"steps": 3})),
        }));
        let state = AgentState::from_human_message("hi");
        let result = node.run(state).await;
        assert!(matches!(result, Err(AgentError::MalformedReply(_))));
    }

    /// **Scenario**: a tool-result reply passes through unchanged.
    #[tokio::test]
    async fn adapter_passes_tool_result_through() {
        let node = AgentNode::new(Arc::new(FixedAgent {
            name: "agent1",
            reply: AgentReply::Message(Message::tool(
                "3 pm",
                Some("call-1".into()),
                Some("get_time".into()),
            )),
        }));
        let state = AgentState::from_human_message("hi");
        let (after, _) = node.run(state).await.unwrap();
        let last = after.last_message().unwrap();
        assert!(matches!(last, Message::Tool { .. }));
        assert_eq!(last.name(), Some("get_time"));
    }

    /// **Scenario**: the tool node executes each pending call and leaves sender alone.
    #[tokio::test]
    async fn tool_node_executes_pending_calls() {
        let node = ToolNode::new(vec![Arc::new(EchoTool)]);
        let mut state = AgentState::from_human_message("hi");
        state.messages.push(Message::Ai {
            content: String::new(),
            name: Some("agent1".into()),
            tool_calls: vec![ToolCall {
                id: Some("call-1".into()),
                name: "echo".into(),
                arguments: "{\"x\":1}".into(),
            }],
        });
        state.sender = "agent1".into();
        let before = state.messages.len();

        let (after, _) = node.run(state).await.unwrap();
        assert_eq!(after.messages.len(), before + 1);
        assert_eq!(after.sender, "agent1");
        let last = after.last_message().unwrap();
        assert_eq!(last.content(), Some("{\"x\":1}"));
        assert!(matches!(last, Message::Tool { .. }));
    }

    /// **Scenario**: an unknown tool name fails the run.
    #[tokio::test]
    async fn tool_node_rejects_unknown_tool() {
        let node = ToolNode::new(vec![]);
        let mut state = AgentState::from_human_message("hi");
        state.messages.push(Message::Ai {
            content: String::new(),
            name: Some("agent1".into()),
            tool_calls: vec![ToolCall {
                id: None,
                name: "missing".into(),
                arguments: "{}".into(),
            }],
        });
        let result = node.run(state).await;
        assert!(matches!(result, Err(AgentError::ExecutionFailed(_))));
    }
}
