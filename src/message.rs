//! Message types for the shared conversation state.
//!
//! Roles: System (usually first in the list), Human input, Ai output (content
//! plus optional tool-call requests, tagged with the producing agent's name),
//! Tool results, and Raw JSON envelopes from agents invoked through a wrapping
//! runnable. Used by `AgentState::messages` and read by the router.

/// A single tool invocation requested by an agent.
///
/// Carried on `Message::Ai`; consumed by the tool node, which matches `name`
/// against the configured tool list and passes `arguments` through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ToolCall {
    /// Call id from the model, echoed back on the tool result when present.
    pub id: Option<String>,
    /// Tool name; must match a configured tool.
    pub name: String,
    /// JSON-encoded arguments, passed to the tool unparsed.
    pub arguments: String,
}

/// A single message in the conversation.
///
/// The `Raw` variant keeps an unnormalized JSON envelope in the log; the
/// router reads its `content` field and falls back to `output`. Both access
/// paths are deliberate (dual invocation protocol), not a normalization gap.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum Message {
    /// System prompt; typically placed first in the message list.
    System(String),
    /// Human input; seeds the state at the top-level `invoke`.
    Human(String),
    /// Agent output: content, producing agent, and pending tool calls.
    Ai {
        content: String,
        /// Name of the agent that produced this message.
        name: Option<String>,
        /// Tool invocations requested this turn; empty means none pending.
        tool_calls: Vec<ToolCall>,
    },
    /// Result of one tool execution, appended by the tool node.
    Tool {
        content: String,
        /// Id of the originating tool call, when the model supplied one.
        call_id: Option<String>,
        /// Name of the tool that produced this result.
        name: Option<String>,
    },
    /// Unnormalized JSON envelope from an agent invoked through a wrapper
    /// that returns `{"output": ...}` instead of a chat message.
    Raw(serde_json::Value),
}

impl Message {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::System(content.into())
    }

    /// Creates a human message.
    pub fn human(content: impl Into<String>) -> Self {
        Self::Human(content.into())
    }

    /// Creates an AI message with no tool calls.
    pub fn ai(content: impl Into<String>, name: Option<String>) -> Self {
        Self::Ai {
            content: content.into(),
            name,
            tool_calls: Vec::new(),
        }
    }

    /// Creates a tool-result message.
    pub fn tool(
        content: impl Into<String>,
        call_id: Option<String>,
        name: Option<String>,
    ) -> Self {
        Self::Tool {
            content: content.into(),
            call_id,
            name,
        }
    }

    /// Primary text of the message, when directly accessible.
    ///
    /// For `Raw` envelopes this reads the `content` field only; use
    /// [`Message::output`] for the fallback field.
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::System(s) | Self::Human(s) => Some(s),
            Self::Ai { content, .. } | Self::Tool { content, .. } => Some(content),
            Self::Raw(value) => value.get("content").and_then(|v| v.as_str()),
        }
    }

    /// The `output` field of a raw envelope; `None` for chat messages.
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Raw(value) => value.get("output").and_then(|v| v.as_str()),
            _ => None,
        }
    }

    /// Pending tool calls; empty for everything but `Ai` messages.
    pub fn tool_calls(&self) -> &[ToolCall] {
        match self {
            Self::Ai { tool_calls, .. } => tool_calls,
            _ => &[],
        }
    }

    /// Name of the producing agent or tool, when tagged.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Ai { name, .. } | Self::Tool { name, .. } => name.as_deref(),
            Self::Raw(value) => value.get("name").and_then(|v| v.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// **Scenario**: constructors produce the correct variant with content.
    #[test]
    fn message_constructors() {
        let sys = Message::system("s");
        assert!(matches!(&sys, Message::System(c) if c == "s"));
        let hum = Message::human("h");
        assert!(matches!(&hum, Message::Human(c) if c == "h"));
        let ai = Message::ai("a", Some("agent1".into()));
        assert_eq!(ai.content(), Some("a"));
        assert_eq!(ai.name(), Some("agent1"));
        assert!(ai.tool_calls().is_empty());
        let tool = Message::tool("t", Some("call-1".into()), Some("get_time".into()));
        assert_eq!(tool.content(), Some("t"));
        assert_eq!(tool.name(), Some("get_time"));
    }

    /// **Scenario**: Raw envelope exposes `content` via content() and `output` via output().
    #[test]
    fn raw_envelope_content_and_output_access() {
        let with_content = Message::Raw(json!({"content": "hello"}));
        assert_eq!(with_content.content(), Some("hello"));
        assert_eq!(with_content.output(), None);

        let with_output = Message::Raw(json!({"output": "FINAL ANSWER"}));
        assert_eq!(with_output.content(), None);
        assert_eq!(with_output.output(), Some("FINAL ANSWER"));

        let with_neither = Message::Raw(json!({"other": 1}));
        assert_eq!(with_neither.content(), None);
        assert_eq!(with_neither.output(), None);
    }

    /// **Scenario**: Ai message round-trips through serde with tool calls intact.
    #[test]
    fn ai_message_serde_roundtrip() {
        let msg = Message::Ai {
            content: "calling".into(),
            name: Some("agent1".into()),
            tool_calls: vec![ToolCall {
                id: Some("call-1".into()),
                name: "get_time".into(),
                arguments: "{}".into(),
            }],
        };
        let js = serde_json::to_string(&msg).expect("serialize");
        let back: Message = serde_json::from_str(&js).expect("deserialize");
        assert_eq!(back.content(), Some("calling"));
        assert_eq!(back.tool_calls().len(), 1);
        assert_eq!(back.tool_calls()[0].name, "get_time");
    }
}
