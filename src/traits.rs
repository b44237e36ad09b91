//! Agent trait: the opaque capability a graph node wraps.
//!
//! An agent receives the full conversation state and returns one reply. The
//! reply is a tagged union over the shapes agents actually produce, so the
//! node adapter can normalize without exception-driven fallback.

use async_trait::async_trait;

use crate::error::AgentError;
use crate::message::Message;
use crate::state::AgentState;

/// One reply from an agent invocation.
///
/// Two wire shapes exist: a direct chat message (tool results pass through
/// unchanged, anything else is re-tagged as AI output by the adapter), and a
/// raw JSON envelope from agents invoked through a wrapping runnable. The
/// envelope's text lives in `content` or, on the alternate path, `output`.
#[derive(Debug, Clone)]
pub enum AgentReply {
    /// Direct message-like result.
    Message(Message),
    /// Nested JSON envelope; kept unnormalized in the message log.
    Raw(serde_json::Value),
}

impl AgentReply {
    /// Convenience constructor for a plain-text AI reply.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Message(Message::ai(content, None))
    }
}

/// An agent: a capability producing a message-like response when invoked
/// with the current state.
///
/// `name` must be stable: it tags the messages the agent produces, becomes
/// the node id in the graph, and is what the tool node routes back to.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Stable identifier of the agent (e.g. "radiology_agent").
    fn name(&self) -> &str;

    /// Human-readable description; defaults to a generic one.
    fn description(&self) -> String {
        format!("Agent for {}", self.name())
    }

    /// One invocation: read the full state, produce one reply.
    ///
    /// May perform blocking network I/O (a remote model call). Errors
    /// propagate to the caller of the graph's `invoke`; no retry.
    async fn invoke(&self, state: &AgentState) -> Result<AgentReply, AgentError>;
}
